use super::definition::Flow;
use crate::error::FlowError;
use std::fs;
use std::path::Path;

impl Flow {
    /// Parses a flow from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, FlowError> {
        serde_json::from_str(json).map_err(|e| FlowError::JsonParseError(e.to_string()))
    }

    /// Loads a flow from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FlowError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| FlowError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let flow = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            flow_id = %flow.flow_id,
            steps = flow.steps.len(),
            "Loaded flow"
        );
        Ok(flow)
    }

    pub fn to_json_pretty(&self) -> Result<String, FlowError> {
        serde_json::to_string_pretty(self).map_err(|e| FlowError::JsonParseError(e.to_string()))
    }

    /// Writes the flow as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FlowError> {
        let path = path.as_ref();
        fs::write(path, self.to_json_pretty()?).map_err(|e| FlowError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
