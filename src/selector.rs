//! Picks the step the user should work on next.

use crate::flow::{Status, Step, StepLookup};
use crate::layout::StepEntry;
use std::cmp::Ordering;

pub fn is_executable(status: Status) -> bool {
    status.is_executable()
}

/// Finds the first executable substep of the first executable phase.
///
/// `entries` must be in layout order (see [`crate::layout::Traversal::flattened`]).
/// The first entry with an executable status is the active phase; its children,
/// ordered by `position` with unpositioned ones last, are scanned for the first
/// executable one. A phase whose `child_step_ids` is absent is its own only
/// candidate; an empty list yields no candidates.
pub fn first_active_substep<'e, I>(entries: I, lookup: &StepLookup) -> Option<Step>
where
    I: IntoIterator<Item = &'e StepEntry>,
{
    let active = &entries
        .into_iter()
        .find(|entry| is_executable(entry.step.status))?
        .step;

    let mut candidates: Vec<&Step> = match &active.child_step_ids {
        Some(ids) => ids.iter().filter_map(|id| lookup.get(id)).collect(),
        None => vec![active],
    };

    candidates.sort_by(|a, b| compare_positions(a.position, b.position));
    let selected = candidates
        .into_iter()
        .find(|step| is_executable(step.status))
        .cloned();

    tracing::debug!(
        phase = %active.id,
        substep = selected.as_ref().map(|s| s.id.as_str()),
        "Selected active substep"
    );
    selected
}

/// The first step, in flow order, that lists `child_id` among its children.
pub fn parent_of<'s>(steps: &'s [Step], child_id: &str) -> Option<&'s Step> {
    steps
        .iter()
        .find(|step| step.child_ids().iter().any(|id| id == child_id))
}

/// Ascending, with missing positions after every present one.
fn compare_positions(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
