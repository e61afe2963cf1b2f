use crate::error::FlowError;
use crate::flow::{Flow, Step, StepLookup};
use crate::time::Eta;
use ahash::AHashSet;

pub mod config;
pub mod connected;
pub mod level;

pub use config::LayoutConfig;
pub use connected::ConnectedSteps;
pub use level::{LayoutHint, LayoutLevel, StepEntry, Traversal};

/// Walks a flow's blocking edges and arranges the discovered steps into levels.
///
/// The engine owns its step index, so it can be traversed repeatedly while the
/// flow it was built from stays borrowed and unchanged.
pub struct LayoutEngine<'a> {
    flow: &'a Flow,
    lookup: StepLookup,
    config: LayoutConfig,
}

pub struct LayoutEngineBuilder<'a> {
    flow: &'a Flow,
    config: LayoutConfig,
    strict_ids: bool,
}

impl<'a> LayoutEngineBuilder<'a> {
    pub fn new(flow: &'a Flow) -> Self {
        Self {
            flow,
            config: LayoutConfig::default(),
            strict_ids: false,
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Reject flows with repeated step ids instead of keeping the last definition.
    pub fn strict_ids(mut self, strict: bool) -> Self {
        self.strict_ids = strict;
        self
    }

    pub fn build(self) -> Result<LayoutEngine<'a>, FlowError> {
        let lookup = if self.strict_ids {
            StepLookup::try_from_steps(&self.flow.steps)?
        } else {
            StepLookup::from_flow(self.flow)
        };
        Ok(LayoutEngine {
            flow: self.flow,
            lookup,
            config: self.config,
        })
    }
}

impl<'a> LayoutEngine<'a> {
    pub fn builder(flow: &'a Flow) -> LayoutEngineBuilder<'a> {
        LayoutEngineBuilder::new(flow)
    }

    /// An engine with the default layout spacing and last-wins id handling.
    pub fn new(flow: &'a Flow) -> Self {
        Self {
            flow,
            lookup: StepLookup::from_flow(flow),
            config: LayoutConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn lookup(&self) -> &StepLookup {
        &self.lookup
    }

    pub fn into_lookup(self) -> StepLookup {
        self.lookup
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn traverse(&self) -> Traversal {
        walk(&self.lookup, self.flow, &self.config)
    }

    pub fn component_list(&self) -> Vec<LayoutLevel> {
        self.traverse().levels
    }
}

/// Breadth-first walk over blocking edges with the default layout spacing.
pub fn flow_bfs(lookup: &StepLookup, flow: &Flow) -> Traversal {
    walk(lookup, flow, &LayoutConfig::default())
}

/// Indexes `flow.steps` and returns only the levels of its traversal.
///
/// Step counts, done counts and the ETA are dropped here; use [`flow_bfs`] or
/// [`LayoutEngine::traverse`] when they are needed.
pub fn component_list(flow: &Flow) -> Vec<LayoutLevel> {
    flow_bfs(&StepLookup::from_flow(flow), flow).levels
}

/// Accumulates entries and cuts them into levels at fan-outs.
struct LevelBuilder<'c> {
    config: &'c LayoutConfig,
    levels: Vec<LayoutLevel>,
    serial: Vec<StepEntry>,
    offset: i64,
}

impl<'c> LevelBuilder<'c> {
    fn new(config: &'c LayoutConfig) -> Self {
        Self {
            config,
            levels: Vec::new(),
            serial: Vec::new(),
            offset: 0,
        }
    }

    fn push(&mut self, entry: StepEntry) {
        self.serial.push(entry);
    }

    fn flush(&mut self, hint: LayoutHint, margin_left: i64) {
        let serial_components = std::mem::take(&mut self.serial);
        self.levels.push(LayoutLevel {
            level: self.levels.len(),
            margin_left,
            serial_components,
            hint,
        });
    }

    /// Closes the serial run that leads into a fan-out and leaves a gutter after it.
    fn open_fan_out(&mut self) {
        let gutter = (self.serial.len() as i64 / 2 + 1) * self.config.column_width;
        self.flush(LayoutHint::Row, self.offset);
        self.offset += gutter;
    }

    /// Closes the column holding the concurrent targets of a fan-out.
    fn close_fan_out(&mut self) {
        self.flush(
            LayoutHint::ParallelColumn,
            self.offset - self.config.parallel_inset,
        );
        self.offset += self.config.column_width - self.config.parallel_inset;
    }

    fn finish(mut self) -> Vec<LayoutLevel> {
        self.flush(LayoutHint::Tail, self.offset);
        self.levels
    }
}

fn walk(lookup: &StepLookup, flow: &Flow, config: &LayoutConfig) -> Traversal {
    let root = lookup.resolve(&flow.root_step_id);
    if !lookup.contains(&flow.root_step_id) {
        tracing::debug!(
            flow_id = %flow.flow_id,
            root_step_id = %flow.root_step_id,
            "Root step not found, walking from the neutral step"
        );
    }

    let mut traversed: AHashSet<&str> = AHashSet::new();
    traversed.insert(root.id.as_str());
    let mut connected = ConnectedSteps::new();
    if lookup.contains(&root.id) {
        connected.insert(&root.id);
    }

    let mut layout = LevelBuilder::new(config);
    let mut step_number = 1;
    let mut done_count = usize::from(root.is_done());
    let mut eta = Eta::ZERO;
    layout.push(StepEntry {
        step: root.clone(),
        step_number,
        is_root_step: true,
        is_last_step: false,
        is_connected_step: true,
    });

    let mut queue: Vec<&Step> = vec![root];
    while !queue.is_empty() {
        let mut next_generation: Vec<&Step> = Vec::new();

        for step in queue {
            if let Some(time_needed) = &step.time_needed {
                eta += Eta::lenient(time_needed);
            }
            if step.has_children() {
                connected.fill_descendants(step.child_ids(), lookup);
                eta += step
                    .child_ids()
                    .iter()
                    .filter_map(|id| lookup.get(id))
                    .filter_map(|child| child.time_needed.as_deref())
                    .map(Eta::lenient)
                    .sum::<Eta>();
            }

            let is_parallel = step.blocking_ids().len() > 1;
            if is_parallel {
                layout.open_fan_out();
            }

            for blocking_id in step.blocking_ids() {
                if !traversed.insert(blocking_id.as_str()) {
                    continue;
                }
                let target = lookup.resolve(blocking_id);
                step_number += 1;
                done_count += usize::from(target.is_done());
                tracing::trace!(
                    from = %step.id,
                    to = %blocking_id,
                    step_number,
                    "Discovered step"
                );

                layout.push(StepEntry {
                    step: target.clone(),
                    step_number,
                    is_root_step: false,
                    is_last_step: *blocking_id == flow.last_step_id,
                    is_connected_step: true,
                });
                if lookup.contains(blocking_id) {
                    connected.insert(blocking_id);
                }
                next_generation.push(target);
            }

            if is_parallel {
                layout.close_fan_out();
            }
        }

        queue = next_generation;
    }

    let levels = layout.finish();
    tracing::debug!(
        flow_id = %flow.flow_id,
        steps = step_number,
        done = done_count,
        eta = %eta,
        levels = levels.len(),
        "Flow traversal finished"
    );

    Traversal {
        levels,
        step_count: step_number,
        done_count,
        eta,
        connected_step_ids: connected.into_vec(),
    }
}
