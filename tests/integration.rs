//! End-to-end tests over the built-in flow: load, traverse, select, mutate.
mod common;
use common::*;
use stepflow::prelude::*;

fn response(changes: &[(&str, Status)]) -> ChangeStepStatusResponse {
    ChangeStepStatusResponse {
        steps: changes
            .iter()
            .map(|(id, status)| StatusChange {
                id: id.to_string(),
                status: *status,
            })
            .collect(),
        latest_version: None,
    }
}

#[test]
fn test_default_flow_end_to_end() {
    let flow = default_flow();
    let lookup = StepLookup::from_flow(&flow);
    assert_eq!(lookup.len(), 11);
    assert!(lookup.dangling_references(&flow).is_empty());

    let traversal = flow_bfs(&lookup, &flow);
    assert_eq!(traversal.step_count, 5);
    assert_eq!(traversal.done_count, 1);
    assert_eq!(traversal.eta.to_string(), "02:30:00");
    assert_eq!(
        level_ids(&traversal.levels),
        vec![vec![
            "root-step-1",
            "setup-step-1",
            "config-step-1",
            "testing-step-1",
            "deployment-step-1",
        ]]
    );
    assert_eq!(traversal.levels[0].hint, LayoutHint::Tail);

    let mut connected = traversal.connected_step_ids.clone();
    connected.sort();
    let mut all: Vec<String> = flow.steps.iter().map(|s| s.id.clone()).collect();
    all.sort();
    assert_eq!(connected, all);

    let active = first_active_substep(traversal.flattened(), &lookup).expect("active substep");
    assert_eq!(active.id, "setup-substep-1");

    assert_eq!(flow_progress(&flow), 9);
    assert_eq!(parent_steps_summary(&traversal.levels), (1, 5));
}

#[test]
fn test_json_round_trip_and_load_errors() {
    let flow = default_flow();
    let json = flow.to_json_pretty().expect("serializes");
    assert!(json.contains("\"type\": \"ROOT\""));
    assert_eq!(Flow::from_json(&json).expect("parses"), flow);

    let path = std::env::temp_dir().join(format!("stepflow-{}.json", std::process::id()));
    flow.save(&path).expect("saves");
    let loaded = Flow::from_file(&path).expect("loads");
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, flow);

    assert!(matches!(
        Flow::from_file("/definitely/not/here.json"),
        Err(FlowError::Io { .. })
    ));
    assert!(matches!(
        Flow::from_json("{\"id\": 1}"),
        Err(FlowError::JsonParseError(_))
    ));
}

#[test]
fn test_completing_second_last_phase_unlocks_last_substeps() {
    let flow = default_flow();
    let lookup = StepLookup::from_flow(&flow);

    let request =
        build_status_change_request(&flow, &lookup, "testing-substep-1", Status::Done).unwrap();
    assert_eq!(request.flow_id, "bbps-integration-flow");
    assert_eq!(
        request.request_array,
        vec![
            StatusChange {
                id: "testing-substep-1".to_string(),
                status: Status::Done,
            },
            StatusChange {
                id: "deployment-substep-1".to_string(),
                status: Status::Done,
            },
        ]
    );

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["request_array"][1]["status"], "DONE");
}

#[test]
fn test_cascade_reaches_last_step_behind_fan_out() {
    let mut last = children(step("last", Status::Upcoming), &["last-sub"]);
    last.blocked_by_step_ids = Some(vec!["a".to_string()]);
    let flow = flow_with(
        "root",
        "last",
        vec![
            blocking(step("root", Status::Done), &["a", "b"]),
            children(blocking(step("a", Status::Pending), &["last"]), &["a-sub"]),
            step("b", Status::Pending),
            step("a-sub", Status::Pending),
            last,
            step("last-sub", Status::Upcoming),
        ],
    );
    let lookup = StepLookup::from_flow(&flow);
    let levels = flow_bfs(&lookup, &flow).levels;
    assert!(levels.len() > 1);
    assert!(!levels[0].step_ids().any(|id| id == "last"));

    let request = build_status_change_request(&flow, &lookup, "a-sub", Status::Done).unwrap();
    let ids: Vec<&str> = request.request_array.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a-sub", "last-sub"]);
}

#[test]
fn test_ordinary_status_change_is_single_item() {
    let flow = default_flow();
    let lookup = StepLookup::from_flow(&flow);

    let request =
        build_status_change_request(&flow, &lookup, "config-substep-1", Status::InReview).unwrap();
    assert_eq!(request.request_array.len(), 1);
    assert_eq!(request.request_array[0].status, Status::InReview);

    assert_eq!(
        build_status_change_request(&flow, &lookup, "nope", Status::Done),
        Err(FlowError::StepNotFound {
            step_id: "nope".to_string()
        })
    );
}

#[test]
fn test_apply_status_response_merges_known_steps() {
    let flow = default_flow();
    let raw = r#"{
        "steps": [
            {"id": "setup-substep-1", "status": "DONE"},
            {"id": "unknown-step", "status": "DONE"}
        ],
        "latest_version": {"version": 7}
    }"#;
    let decoded: ChangeStepStatusResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(decoded.latest_version, Some(serde_json::json!({"version": 7})));

    let updated = apply_status_response(&flow, &decoded);
    assert_eq!(updated.steps.len(), flow.steps.len());
    assert_eq!(updated.step("setup-substep-1").unwrap().status, Status::Done);
    assert_eq!(flow.step("setup-substep-1").unwrap().status, Status::Pending);
    assert!(updated.step("unknown-step").is_none());
}

#[test]
fn test_flow_view_tracks_active_substep() {
    let mut view = FlowView::new(default_flow());
    assert_eq!(view.active_substep().map(|s| s.id.as_str()), Some("setup-substep-1"));
    // The root lists the first setup substep among its children too.
    assert!(view.is_expanded("root-step-1"));
    assert_eq!(view.progress(), 9);
    assert_eq!(view.parent_steps_summary(), (1, 5));
    assert_eq!(view.substep_progress("setup-step-1"), Ok(0));

    view.apply_status_response(&response(&[("setup-substep-1", Status::Done)]));
    assert_eq!(view.active_substep().map(|s| s.id.as_str()), Some("setup-substep-2"));
    assert!(view.is_expanded("setup-step-1"));
    assert_eq!(view.substep_progress("setup-step-1"), Ok(50));
    assert_eq!(view.progress(), 18);

    view.apply_status_response(&response(&[("setup-substep-2", Status::Done)]));
    assert!(view.active_substep().is_none());
    assert_eq!(view.substep_progress("setup-step-1"), Ok(100));
}

#[test]
fn test_flow_view_selection_and_expansion() {
    let mut view = FlowView::new(create_diamond_flow());
    // "b" is the first executable phase and has no children.
    assert_eq!(view.active_substep().map(|s| s.id.as_str()), Some("b"));
    assert_eq!(view.levels().len(), 3);

    assert!(view.toggle_expanded("a"));
    assert!(view.is_expanded("a"));
    assert!(!view.toggle_expanded("a"));
    assert!(!view.is_expanded("a"));

    view.select_substep("c").unwrap();
    assert_eq!(view.active_substep().map(|s| s.id.as_str()), Some("c"));
    assert_eq!(
        view.select_substep("zzz"),
        Err(FlowError::StepNotFound {
            step_id: "zzz".to_string()
        })
    );
    assert!(view.substep_progress("zzz").is_err());

    let request = view.status_change_request("b", Status::Done).unwrap();
    assert_eq!(request.flow_id, "test-flow-id");
    assert_eq!(view.into_flow().steps.len(), 4);
}

struct Stages(Vec<&'static str>);

impl IntoFlow for Stages {
    fn into_flow(self) -> Result<Flow, FlowConversionError> {
        let (first, last) = match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                return Err(FlowConversionError::ValidationError(
                    "no stages".to_string(),
                ));
            }
        };
        let steps = self
            .0
            .iter()
            .zip(self.0.iter().skip(1).map(Some).chain(std::iter::once(None)))
            .map(|(id, next)| match next {
                Some(next) => blocking(step(id, Status::Pending), &[*next]),
                None => step(id, Status::Pending),
            })
            .collect();
        Ok(flow_with(first, last, steps))
    }
}

#[test]
fn test_custom_model_converts_into_flow() {
    let flow = Stages(vec!["plan", "build", "ship"]).into_flow().unwrap();
    let traversal = flow_bfs(&StepLookup::from_flow(&flow), &flow);
    assert_eq!(traversal.step_count, 3);
    assert_eq!(level_ids(&traversal.levels), vec![vec!["plan", "build", "ship"]]);

    assert!(Stages(vec![]).into_flow().is_err());
}
