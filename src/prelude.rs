//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! stepflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use stepflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let flow = Flow::from_file("path/to/flow.json")?;
//! let view = FlowView::new(flow);
//!
//! if let Some(step) = view.active_substep() {
//!     let request = view.status_change_request(&step.id, Status::Done)?;
//!     println!("{}", serde_json::to_string(&request)?);
//! }
//! # Ok(())
//! # }
//! ```

// Flow model
pub use crate::flow::{
    Content, DanglingReference, EdgeKind, Flow, IntoFlow, NEUTRAL_STEP, Status, Step, StepLookup,
    StepType, default_flow,
};

// Traversal and layout
pub use crate::layout::{
    LayoutConfig, LayoutEngine, LayoutHint, LayoutLevel, StepEntry, Traversal, component_list,
    flow_bfs,
};

// Selection, progress and status changes
pub use crate::progress::{flow_progress, parent_steps_summary, substep_progress};
pub use crate::selector::{first_active_substep, is_executable, parent_of};
pub use crate::status::{
    ChangeStepStatusRequest, ChangeStepStatusResponse, StatusChange, apply_status_response,
    build_status_change_request,
};
pub use crate::view::FlowView;

// Time arithmetic
pub use crate::time::{Eta, add_time, parse_time};

// Error types
pub use crate::error::{FlowConversionError, FlowError, TimeParseError};

// Formatting
pub use crate::render::LayoutFormatter;

// Result type alias for convenience
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
