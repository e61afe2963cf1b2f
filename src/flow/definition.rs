use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle state of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Upcoming,
    Scheduled,
    Pending,
    Done,
    Blocked,
    Overdue,
    Incomplete,
    InReview,
    Nothing,
    AdhocDone,
    Hidden,
}

impl Status {
    /// Whether a step in this state can be worked on right now.
    pub fn is_executable(self) -> bool {
        matches!(self, Status::Pending | Status::Incomplete | Status::Overdue)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Upcoming => "UPCOMING",
            Status::Scheduled => "SCHEDULED",
            Status::Pending => "PENDING",
            Status::Done => "DONE",
            Status::Blocked => "BLOCKED",
            Status::Overdue => "OVERDUE",
            Status::Incomplete => "INCOMPLETE",
            Status::InReview => "IN_REVIEW",
            Status::Nothing => "NOTHING",
            Status::AdhocDone => "ADHOC_DONE",
            Status::Hidden => "HIDDEN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminates top-level phases from leaf tasks.
///
/// Backends are free to send tags this crate does not know; those are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StepType {
    Root,
    Main,
    Sub,
    Default,
    Other(String),
}

impl StepType {
    pub fn as_str(&self) -> &str {
        match self {
            StepType::Root => "ROOT",
            StepType::Main => "MAIN",
            StepType::Sub => "SUB",
            StepType::Default => "DEFAULT",
            StepType::Other(tag) => tag,
        }
    }
}

impl From<String> for StepType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ROOT" => StepType::Root,
            "MAIN" => StepType::Main,
            "SUB" => StepType::Sub,
            "DEFAULT" => StepType::Default,
            _ => StepType::Other(tag),
        }
    }
}

impl From<StepType> for String {
    fn from(step_type: StepType) -> Self {
        step_type.as_str().to_string()
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const PRIMARY_TEXT: &str = "PRIMARY_TEXT";
pub const SECONDARY_TEXT: &str = "SECONDARY_TEXT";

/// A display payload attached to a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub template_scope_id: String,
    pub display: String,
    pub content_type: String,
}

/// A single node of an onboarding flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_by_step_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking_step_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_step_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_step_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_step_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unblocked_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub contents: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fall_back_step_id: Option<String>,
    /// Estimated effort as `HH:MM:SS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_needed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordering key among siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl Step {
    /// Creates a step with the given id, type and status and no edges or contents.
    pub fn new(id: impl Into<String>, step_type: StepType, status: Status) -> Self {
        Self {
            id: id.into(),
            step_type,
            status,
            blocked_by_step_ids: None,
            blocking_step_ids: None,
            parent_step_id: None,
            child_step_ids: None,
            assignee_id: None,
            template_step_id: None,
            unblocked_at: None,
            completed_by: None,
            completed_at: None,
            contents: Vec::new(),
            fall_back_step_id: None,
            time_needed: None,
            name: None,
            position: None,
        }
    }

    pub fn blocking_ids(&self) -> &[String] {
        self.blocking_step_ids.as_deref().unwrap_or_default()
    }

    pub fn blocked_by_ids(&self) -> &[String] {
        self.blocked_by_step_ids.as_deref().unwrap_or_default()
    }

    pub fn child_ids(&self) -> &[String] {
        self.child_step_ids.as_deref().unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        !self.child_ids().is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// The first content entry of the given type, if any.
    pub fn content_of_type(&self, content_type: &str) -> Option<&Content> {
        self.contents.iter().find(|c| c.content_type == content_type)
    }

    /// A title for display: the primary text, then the name, then the id.
    pub fn title(&self) -> &str {
        self.content_of_type(PRIMARY_TEXT)
            .map(|c| c.display.as_str())
            .or(self.name.as_deref())
            .unwrap_or(self.id.as_str())
    }
}

/// The aggregate graph of an onboarding flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    pub id: String,
    pub merchant_id: String,
    pub flow_id: String,
    pub scenario: String,
    pub root_step_id: String,
    pub last_step_id: String,
    pub product_info_id: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Flow {
    /// Finds a step by id with a linear scan, in flow order.
    pub fn step(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }
}
