//! Tests for active-step selection.
mod common;
use common::*;
use stepflow::prelude::*;

fn positioned(id: &str, status: Status, position: Option<i64>) -> Step {
    let mut s = Step::new(id, StepType::Sub, status);
    s.position = position;
    s
}

fn select(flow: &Flow) -> Option<Step> {
    let lookup = StepLookup::from_flow(flow);
    let traversal = flow_bfs(&lookup, flow);
    first_active_substep(traversal.flattened(), &lookup)
}

#[test]
fn test_selects_lowest_position_child() {
    let flow = flow_with(
        "root",
        "phase",
        vec![
            blocking(step("root", Status::Done), &["phase"]),
            children(step("phase", Status::Pending), &["second", "first"]),
            positioned("second", Status::Pending, Some(2)),
            positioned("first", Status::Pending, Some(1)),
        ],
    );
    assert_eq!(select(&flow).map(|s| s.id), Some("first".to_string()));
}

#[test]
fn test_skips_non_executable_children() {
    let flow = flow_with(
        "phase",
        "phase",
        vec![
            children(step("phase", Status::Overdue), &["a", "b", "c"]),
            positioned("a", Status::Done, Some(1)),
            positioned("b", Status::InReview, Some(2)),
            positioned("c", Status::Incomplete, Some(3)),
        ],
    );
    assert_eq!(select(&flow).map(|s| s.id), Some("c".to_string()));
}

#[test]
fn test_unpositioned_children_sort_last() {
    let flow = flow_with(
        "phase",
        "phase",
        vec![
            children(step("phase", Status::Pending), &["loose", "ranked"]),
            positioned("loose", Status::Pending, None),
            positioned("ranked", Status::Pending, Some(7)),
        ],
    );
    assert_eq!(select(&flow).map(|s| s.id), Some("ranked".to_string()));
}

#[test]
fn test_no_executable_steps_selects_nothing() {
    let flow = flow_with(
        "root",
        "next",
        vec![
            blocking(children(step("root", Status::Done), &["sub"]), &["next"]),
            positioned("sub", Status::Pending, Some(1)),
            step("next", Status::Upcoming),
        ],
    );
    assert_eq!(select(&flow), None);
}

#[test]
fn test_phase_without_child_field_is_its_own_candidate() {
    let flow = flow_with(
        "root",
        "task",
        vec![
            blocking(step("root", Status::Done), &["task"]),
            step("task", Status::Pending),
        ],
    );
    assert_eq!(select(&flow).map(|s| s.id), Some("task".to_string()));
}

#[test]
fn test_empty_child_list_selects_nothing() {
    let flow = Flow::from_json(
        r#"{
            "id": "f", "merchant_id": "m", "flow_id": "f", "scenario": "s",
            "root_step_id": "p", "last_step_id": "p", "product_info_id": "i",
            "steps": [{"id": "p", "type": "MAIN", "status": "PENDING", "child_step_ids": []}]
        }"#,
    )
    .unwrap();
    assert_eq!(flow.steps[0].child_step_ids, Some(vec![]));
    assert_eq!(select(&flow), None);
}

#[test]
fn test_only_first_executable_phase_is_considered() {
    let flow = flow_with(
        "root",
        "later",
        vec![
            blocking(children(step("root", Status::Pending), &["done-sub"]), &["later"]),
            positioned("done-sub", Status::Done, Some(1)),
            children(step("later", Status::Pending), &["open-sub"]),
            positioned("open-sub", Status::Pending, Some(1)),
        ],
    );
    assert_eq!(select(&flow), None);
}

#[test]
fn test_dangling_children_are_dropped() {
    let flow = flow_with(
        "phase",
        "phase",
        vec![children(step("phase", Status::Pending), &["ghost"])],
    );
    assert_eq!(select(&flow), None);
}

#[test]
fn test_parent_of_finds_first_container() {
    let steps = vec![
        children(step("p1", Status::Done), &["x"]),
        children(step("p2", Status::Pending), &["x", "y"]),
        step("x", Status::Pending),
    ];
    assert_eq!(parent_of(&steps, "x").map(|s| s.id.as_str()), Some("p1"));
    assert_eq!(parent_of(&steps, "y").map(|s| s.id.as_str()), Some("p2"));
    assert!(parent_of(&steps, "p1").is_none());
}
