//! # Stepflow - Onboarding Flow Traversal and Layout Engine
//!
//! **Stepflow** turns an onboarding flow, a graph of steps linked by blocking
//! edges and grouped into phases by containment edges, into everything a flow
//! screen needs: an ordered, leveled layout, progress counters, a total time
//! estimate and the single substep that should be highlighted as current.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Flow**: Deserialize it from JSON with `Flow::from_json` /
//!     `Flow::from_file`, convert your own format through the `IntoFlow` trait,
//!     or start from the built-in `default_flow()`.
//! 2.  **Traverse**: Call `flow_bfs` (or build a `LayoutEngine` when you need a
//!     custom `LayoutConfig` or strict id checking). The walk is breadth-first
//!     over `blocking_step_ids`, splits the layout at fan-outs and never visits
//!     a step twice.
//! 3.  **Select**: Feed the flattened traversal to `first_active_substep` to
//!     find the step to work on next.
//! 4.  **Mutate**: Build a `ChangeStepStatusRequest`, send it with the transport
//!     of your choice, and fold the response back with `apply_status_response`.
//!     `FlowView` bundles steps 2 to 4 for callers that want one owned state object.
//!
//! ## Quick Start
//!
//! ```rust
//! use stepflow::prelude::*;
//!
//! let flow = default_flow();
//! let lookup = StepLookup::from_flow(&flow);
//!
//! let traversal = flow_bfs(&lookup, &flow);
//! assert_eq!(traversal.step_count, 5);
//! assert_eq!(traversal.done_count, 1);
//! assert_eq!(traversal.eta.to_string(), "02:30:00");
//!
//! let active = first_active_substep(traversal.flattened(), &lookup).unwrap();
//! assert_eq!(active.id, "setup-substep-1");
//!
//! println!("{}", LayoutFormatter::format_traversal(&traversal));
//! ```
//!
//! Malformed durations count as zero, dangling step references resolve to a
//! neutral step and cycles are cut by the visited set, so traversal itself
//! never fails. Only loading, strict indexing and lookups by id return errors.

pub mod error;
pub mod flow;
pub mod layout;
pub mod prelude;
pub mod progress;
pub mod render;
pub mod selector;
pub mod status;
pub mod time;
pub mod view;
