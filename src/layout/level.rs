use crate::flow::Step;
use crate::time::Eta;
use serde::{Serialize, Serializer};

/// A step placed in the layout, together with its position in the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepEntry {
    pub step: Step,
    /// 1-based discovery order.
    pub step_number: usize,
    pub is_root_step: bool,
    pub is_last_step: bool,
    pub is_connected_step: bool,
}

/// How a level should be arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutHint {
    /// A serial run of steps flushed before a fan-out.
    Row,
    /// The concurrent targets of a fan-out, stacked and centered.
    ParallelColumn,
    /// Whatever remained buffered when the walk finished.
    Tail,
}

impl LayoutHint {
    pub fn class_name(self) -> &'static str {
        match self {
            LayoutHint::Row => "flex",
            LayoutHint::ParallelColumn => "flex flex-col justify-center",
            LayoutHint::Tail => "flex flex-row gap-[146px]",
        }
    }
}

impl Serialize for LayoutHint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.class_name())
    }
}

/// One render group of the flow layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutLevel {
    pub level: usize,
    pub margin_left: i64,
    pub serial_components: Vec<StepEntry>,
    #[serde(rename = "className")]
    pub hint: LayoutHint,
}

impl LayoutLevel {
    pub fn step_ids(&self) -> impl Iterator<Item = &str> {
        self.serial_components.iter().map(|e| e.step.id.as_str())
    }
}

/// Everything a breadth-first walk of a flow produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Traversal {
    pub levels: Vec<LayoutLevel>,
    /// Number of distinct steps discovered, root included.
    pub step_count: usize,
    pub done_count: usize,
    #[serde(serialize_with = "serialize_eta")]
    pub eta: Eta,
    /// Root, discovered steps and all their descendants, in first-seen order.
    pub connected_step_ids: Vec<String>,
}

impl Traversal {
    /// All entries, level by level, in layout order.
    pub fn flattened(&self) -> impl Iterator<Item = &StepEntry> {
        self.levels.iter().flat_map(|l| l.serial_components.iter())
    }
}

fn serialize_eta<S: Serializer>(eta: &Eta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(eta)
}
