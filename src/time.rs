//! Clock-style duration arithmetic for step estimates.
//!
//! Durations are written as `HH:MM:SS`, where the hour part may have any number
//! of digits and the minute and second parts are exactly two digits in `00..=59`.
//! Sums carry from seconds into minutes and from minutes into hours; hours never wrap.

use crate::error::TimeParseError;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// An estimated duration, always normalized so minutes and seconds stay below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Eta {
    hours: u64,
    minutes: u32,
    seconds: u32,
}

impl Eta {
    pub const ZERO: Eta = Eta {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Builds a duration from raw components, carrying any overflow upwards.
    pub fn new(hours: u64, minutes: u32, seconds: u32) -> Self {
        let carried_minutes = u64::from(minutes) + u64::from(seconds / 60);
        Self {
            hours: hours.saturating_add(carried_minutes / 60),
            minutes: (carried_minutes % 60) as u32,
            seconds: seconds % 60,
        }
    }

    /// Parses a duration, falling back to zero on any malformed input.
    pub fn lenient(input: &str) -> Self {
        let (hours, minutes, seconds) = parse_time(input);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(u64::from(self.minutes) * 60 + u64::from(self.seconds))
    }
}

impl Add for Eta {
    type Output = Eta;

    fn add(self, rhs: Eta) -> Eta {
        Eta::new(
            self.hours.saturating_add(rhs.hours),
            self.minutes + rhs.minutes,
            self.seconds + rhs.seconds,
        )
    }
}

impl AddAssign for Eta {
    fn add_assign(&mut self, rhs: Eta) {
        *self = *self + rhs;
    }
}

impl Sum for Eta {
    fn sum<I: Iterator<Item = Eta>>(iter: I) -> Self {
        iter.fold(Eta::ZERO, Add::add)
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for Eta {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes, seconds) =
            parse_components(s).ok_or_else(|| TimeParseError::Malformed(s.to_string()))?;
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }
}

/// Splits an `HH:MM:SS` string into its components.
///
/// Anything that does not match the expected shape yields `(0, 0, 0)`.
pub fn parse_time(input: &str) -> (u64, u32, u32) {
    parse_components(input).unwrap_or_else(|| {
        tracing::debug!(input, "Malformed duration, counting it as 00:00:00");
        (0, 0, 0)
    })
}

/// Adds two `HH:MM:SS` strings, returning the normalized, zero-padded sum.
pub fn add_time(a: &str, b: &str) -> String {
    (Eta::lenient(a) + Eta::lenient(b)).to_string()
}

fn parse_components(input: &str) -> Option<(u64, u32, u32)> {
    let mut parts = input.split(':');
    let (hours, minutes, seconds) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Hour strings too long for u64 are treated like any other malformed input.
    let hours = hours.parse().ok()?;
    Some((hours, sexagesimal(minutes)?, sexagesimal(seconds)?))
}

fn sexagesimal(part: &str) -> Option<u32> {
    match part.as_bytes() {
        [tens @ b'0'..=b'5', units @ b'0'..=b'9'] => {
            Some(u32::from(tens - b'0') * 10 + u32::from(units - b'0'))
        }
        _ => None,
    }
}
