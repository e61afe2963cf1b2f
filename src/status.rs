//! Data shapes of the remote "change step status" exchange and how its answer
//! is folded back into a flow.
//!
//! No transport lives here: callers send [`ChangeStepStatusRequest`] with the
//! client of their choice and pass the decoded [`ChangeStepStatusResponse`] to
//! [`apply_status_response`].

use crate::error::FlowError;
use crate::flow::{Flow, Status, StepLookup};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A single `{id, status}` pair, used in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub id: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStepStatusRequest {
    pub request_array: Vec<StatusChange>,
    pub flow_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeStepStatusResponse {
    #[serde(default)]
    pub steps: Vec<StatusChange>,
    /// Opaque version marker returned by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<serde_json::Value>,
}

/// Builds the request that moves `step_id` to `status`.
///
/// The backend does not unlock the final phase by itself. When `step_id` is the
/// last substep of the phase directly blocking the last step, every substep of
/// the last step is moved to the same status in the same request.
pub fn build_status_change_request(
    flow: &Flow,
    lookup: &StepLookup,
    step_id: &str,
    status: Status,
) -> Result<ChangeStepStatusRequest, FlowError> {
    if !lookup.contains(step_id) {
        return Err(FlowError::StepNotFound {
            step_id: step_id.to_string(),
        });
    }

    let mut request_array = vec![StatusChange {
        id: step_id.to_string(),
        status,
    }];

    let last_step = lookup.get(&flow.last_step_id);
    let closes_second_last_phase = last_step
        .and_then(|last| last.blocked_by_ids().first())
        .and_then(|id| lookup.get(id))
        .and_then(|phase| phase.child_ids().last())
        .is_some_and(|id| id == step_id);

    if let (true, Some(last)) = (closes_second_last_phase, last_step) {
        tracing::debug!(
            step_id,
            last_step_id = %last.id,
            "Cascading status change to the last step's substeps"
        );
        request_array.extend(last.child_ids().iter().map(|id| StatusChange {
            id: id.clone(),
            status,
        }));
    }

    Ok(ChangeStepStatusRequest {
        request_array,
        flow_id: flow.flow_id.clone(),
    })
}

/// Returns a copy of `flow` with the statuses reported in `response` applied.
pub fn apply_status_response(flow: &Flow, response: &ChangeStepStatusResponse) -> Flow {
    let updates: AHashMap<&str, Status> = response
        .steps
        .iter()
        .map(|change| (change.id.as_str(), change.status))
        .collect();

    let mut updated = flow.clone();
    let mut applied = 0;
    for step in &mut updated.steps {
        if let Some(status) = updates.get(step.id.as_str()) {
            step.status = *status;
            applied += 1;
        }
    }

    if applied < updates.len() {
        tracing::debug!(
            flow_id = %flow.flow_id,
            reported = updates.len(),
            applied,
            "Status response mentions steps that are not part of the flow"
        );
    }
    updated
}
