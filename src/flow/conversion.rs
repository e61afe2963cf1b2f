use super::definition::Flow;
use crate::error::FlowConversionError;

/// A trait for custom data models that can be converted into a `Flow`.
///
/// Backends rarely agree on the exact shape of an onboarding flow. Implementing
/// this trait on your own structs provides the translation layer into the
/// canonical model the traversal engine works on.
///
/// # Example
///
/// ```rust
/// use stepflow::prelude::*;
///
/// struct Checklist {
///     name: String,
///     tasks: Vec<String>,
/// }
///
/// impl IntoFlow for Checklist {
///     fn into_flow(self) -> Result<Flow, FlowConversionError> {
///         if self.tasks.is_empty() {
///             return Err(FlowConversionError::ValidationError(
///                 "a checklist needs at least one task".to_string(),
///             ));
///         }
///         let mut steps: Vec<Step> = self
///             .tasks
///             .iter()
///             .map(|task| Step::new(task.clone(), StepType::Main, Status::Upcoming))
///             .collect();
///         for i in 0..steps.len() - 1 {
///             steps[i].blocking_step_ids = Some(vec![self.tasks[i + 1].clone()]);
///         }
///         Ok(Flow {
///             id: self.name.clone(),
///             merchant_id: String::new(),
///             flow_id: self.name.clone(),
///             scenario: "checklist".to_string(),
///             root_step_id: self.tasks[0].clone(),
///             last_step_id: self.tasks[self.tasks.len() - 1].clone(),
///             product_info_id: String::new(),
///             steps,
///         })
///     }
/// }
///
/// let flow = Checklist { name: "demo".into(), tasks: vec!["a".into(), "b".into()] }
///     .into_flow()
///     .unwrap();
/// assert_eq!(flow_bfs(&StepLookup::from_flow(&flow), &flow).step_count, 2);
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a flow.
    fn into_flow(self) -> Result<Flow, FlowConversionError>;
}
