use thiserror::Error;

/// Errors that can occur while loading, indexing or mutating a flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Could not access '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Step id '{step_id}' appears more than once in the flow")]
    DuplicateStep { step_id: String },

    #[error("Step '{step_id}' not found in the flow")]
    StepNotFound { step_id: String },
}

/// Errors produced by the strict duration parser.
///
/// The lenient parser used during traversal never fails; it falls back to zero.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Malformed duration '{0}', expected HH:MM:SS")]
    Malformed(String),
}

/// Errors that can occur when converting a custom user format into a `Flow`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
