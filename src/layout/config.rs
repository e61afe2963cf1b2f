use crate::error::FlowError;
use serde::{Deserialize, Serialize};

/// Horizontal spacing used when fan-outs split the layout into levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width reserved for one column of step cards.
    #[serde(default = "default_column_width")]
    pub column_width: i64,
    /// How far a parallel column is pulled back towards the preceding level.
    #[serde(default = "default_parallel_inset")]
    pub parallel_inset: i64,
}

fn default_column_width() -> i64 {
    520
}

fn default_parallel_inset() -> i64 {
    180
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_width: default_column_width(),
            parallel_inset: default_parallel_inset(),
        }
    }
}

impl LayoutConfig {
    /// Parses a configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        serde_json::from_str(json).map_err(|e| FlowError::JsonParseError(e.to_string()))
    }
}
