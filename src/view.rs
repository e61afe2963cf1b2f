use crate::error::FlowError;
use crate::flow::{Flow, Status, Step, StepLookup};
use crate::layout::{LayoutConfig, LayoutEngine, LayoutLevel, Traversal};
use crate::progress;
use crate::selector;
use crate::status::{self, ChangeStepStatusRequest, ChangeStepStatusResponse};
use ahash::AHashSet;

/// The state a flow screen works from: the flow itself, its layout, the
/// highlighted substep and which phases are expanded.
///
/// The view owns all of it; every mutation goes through a method that keeps the
/// derived parts consistent with the flow.
#[derive(Debug, Clone)]
pub struct FlowView {
    flow: Flow,
    config: LayoutConfig,
    lookup: StepLookup,
    traversal: Traversal,
    active_substep: Option<Step>,
    expanded: AHashSet<String>,
}

impl FlowView {
    pub fn new(flow: Flow) -> Self {
        Self::with_config(flow, LayoutConfig::default())
    }

    pub fn with_config(flow: Flow, config: LayoutConfig) -> Self {
        let (lookup, traversal) = Self::derive(&flow, config);
        let mut view = Self {
            flow,
            config,
            lookup,
            traversal,
            active_substep: None,
            expanded: AHashSet::new(),
        };
        view.activate_first_substep();
        view
    }

    fn derive(flow: &Flow, config: LayoutConfig) -> (StepLookup, Traversal) {
        let engine = LayoutEngine::new(flow).with_config(config);
        let traversal = engine.traverse();
        (engine.into_lookup(), traversal)
    }

    fn activate_first_substep(&mut self) {
        self.active_substep =
            selector::first_active_substep(self.traversal.flattened(), &self.lookup);
        if let Some(active) = &self.active_substep {
            if let Some(parent) = selector::parent_of(&self.flow.steps, &active.id) {
                self.expanded.insert(parent.id.clone());
            }
        }
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn into_flow(self) -> Flow {
        self.flow
    }

    pub fn lookup(&self) -> &StepLookup {
        &self.lookup
    }

    pub fn traversal(&self) -> &Traversal {
        &self.traversal
    }

    pub fn levels(&self) -> &[LayoutLevel] {
        &self.traversal.levels
    }

    pub fn active_substep(&self) -> Option<&Step> {
        self.active_substep.as_ref()
    }

    pub fn is_expanded(&self, step_id: &str) -> bool {
        self.expanded.contains(step_id)
    }

    /// Flips the expansion of a phase and returns the new state.
    pub fn toggle_expanded(&mut self, step_id: &str) -> bool {
        if self.expanded.remove(step_id) {
            false
        } else {
            self.expanded.insert(step_id.to_string());
            true
        }
    }

    /// Highlights `step_id` regardless of its status.
    pub fn select_substep(&mut self, step_id: &str) -> Result<(), FlowError> {
        let step = self
            .lookup
            .get(step_id)
            .ok_or_else(|| FlowError::StepNotFound {
                step_id: step_id.to_string(),
            })?;
        self.active_substep = Some(step.clone());
        Ok(())
    }

    pub fn progress(&self) -> u8 {
        progress::flow_progress(&self.flow)
    }

    pub fn substep_progress(&self, step_id: &str) -> Result<u8, FlowError> {
        let step = self
            .lookup
            .get(step_id)
            .ok_or_else(|| FlowError::StepNotFound {
                step_id: step_id.to_string(),
            })?;
        Ok(progress::substep_progress(&self.flow, step))
    }

    pub fn parent_steps_summary(&self) -> (usize, usize) {
        progress::parent_steps_summary(&self.traversal.levels)
    }

    pub fn status_change_request(
        &self,
        step_id: &str,
        status: Status,
    ) -> Result<ChangeStepStatusRequest, FlowError> {
        status::build_status_change_request(&self.flow, &self.lookup, step_id, status)
    }

    /// Folds a status response into the flow and recomputes everything derived from it.
    ///
    /// The highlighted substep moves to the new first active substep, or is
    /// cleared when nothing is executable any more.
    pub fn apply_status_response(&mut self, response: &ChangeStepStatusResponse) {
        self.flow = status::apply_status_response(&self.flow, response);
        let (lookup, traversal) = Self::derive(&self.flow, self.config);
        self.lookup = lookup;
        self.traversal = traversal;
        self.activate_first_substep();
    }
}
