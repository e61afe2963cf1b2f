use super::definition::{Flow, Step};
use super::fixture::NEUTRAL_STEP;
use crate::error::FlowError;
use ahash::AHashMap;
use std::fmt;

/// Which relation a step reference was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Blocking,
    BlockedBy,
    Child,
    Parent,
    Root,
    Last,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeKind::Blocking => "blocking_step_ids",
            EdgeKind::BlockedBy => "blocked_by_step_ids",
            EdgeKind::Child => "child_step_ids",
            EdgeKind::Parent => "parent_step_id",
            EdgeKind::Root => "root_step_id",
            EdgeKind::Last => "last_step_id",
        };
        f.write_str(name)
    }
}

/// A reference to a step id that is not part of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// The referring step, or the flow id for `Root` and `Last`.
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

/// Steps of a flow indexed by id.
#[derive(Debug, Clone, Default)]
pub struct StepLookup {
    steps: AHashMap<String, Step>,
}

impl StepLookup {
    /// Indexes `steps`; when an id repeats, the later step replaces the earlier one.
    pub fn from_steps<'a, I>(steps: I) -> Self
    where
        I: IntoIterator<Item = &'a Step>,
    {
        let mut map = AHashMap::new();
        for step in steps {
            if map.insert(step.id.clone(), step.clone()).is_some() {
                tracing::warn!(
                    step_id = %step.id,
                    "Duplicate step id, keeping the later definition"
                );
            }
        }
        Self { steps: map }
    }

    /// Indexes `steps`, rejecting the first repeated id.
    pub fn try_from_steps<'a, I>(steps: I) -> Result<Self, FlowError>
    where
        I: IntoIterator<Item = &'a Step>,
    {
        let mut map = AHashMap::new();
        for step in steps {
            if map.insert(step.id.clone(), step.clone()).is_some() {
                return Err(FlowError::DuplicateStep {
                    step_id: step.id.clone(),
                });
            }
        }
        Ok(Self { steps: map })
    }

    pub fn from_flow(flow: &Flow) -> Self {
        Self::from_steps(&flow.steps)
    }

    pub fn get(&self, id: &str) -> Option<&Step> {
        self.steps.get(id)
    }

    /// Returns the step with this id, or the neutral step when it is missing.
    pub fn resolve(&self, id: &str) -> &Step {
        self.steps.get(id).unwrap_or(&NEUTRAL_STEP)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.steps.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Lists every reference in `flow` whose target is not indexed here.
    ///
    /// Steps are visited in flow order so the report is deterministic.
    pub fn dangling_references(&self, flow: &Flow) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        let mut check = |from: &str, to: &str, kind: EdgeKind| {
            if !self.contains(to) {
                dangling.push(DanglingReference {
                    from: from.to_string(),
                    to: to.to_string(),
                    kind,
                });
            }
        };

        check(&flow.id, &flow.root_step_id, EdgeKind::Root);
        check(&flow.id, &flow.last_step_id, EdgeKind::Last);
        for step in &flow.steps {
            for id in step.blocking_ids() {
                check(&step.id, id, EdgeKind::Blocking);
            }
            for id in step.blocked_by_ids() {
                check(&step.id, id, EdgeKind::BlockedBy);
            }
            for id in step.child_ids() {
                check(&step.id, id, EdgeKind::Child);
            }
            if let Some(parent) = &step.parent_step_id {
                check(&step.id, parent, EdgeKind::Parent);
            }
        }
        dangling
    }
}
