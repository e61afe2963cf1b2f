//! Common test utilities for building flows.
use stepflow::prelude::*;

/// A main step with the given status and no edges.
#[allow(dead_code)]
pub fn step(id: &str, status: Status) -> Step {
    Step::new(id, StepType::Main, status)
}

/// Wraps `steps` into a flow rooted at `root` and ending at `last`.
#[allow(dead_code)]
pub fn flow_with(root: &str, last: &str, steps: Vec<Step>) -> Flow {
    Flow {
        id: "test-flow".to_string(),
        merchant_id: "test-merchant".to_string(),
        flow_id: "test-flow-id".to_string(),
        scenario: "test".to_string(),
        root_step_id: root.to_string(),
        last_step_id: last.to_string(),
        product_info_id: "test-product".to_string(),
        steps,
    }
}

/// Sets the blocking edges of `step`.
#[allow(dead_code)]
pub fn blocking(mut step: Step, ids: &[&str]) -> Step {
    step.blocking_step_ids = Some(ids.iter().map(|id| id.to_string()).collect());
    step
}

/// Sets the child edges of `step`.
#[allow(dead_code)]
pub fn children(mut step: Step, ids: &[&str]) -> Step {
    step.child_step_ids = Some(ids.iter().map(|id| id.to_string()).collect());
    step
}

/// A chain `s0 -> s1 -> ... -> s{n-1}`; the root is done, everything else upcoming.
#[allow(dead_code)]
pub fn create_chain_flow(n: usize) -> Flow {
    let ids: Vec<String> = (0..n).map(|i| format!("s{}", i)).collect();
    let steps = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let status = if i == 0 { Status::Done } else { Status::Upcoming };
            let s = step(id, status);
            match ids.get(i + 1) {
                Some(next) => blocking(s, &[next.as_str()]),
                None => s,
            }
        })
        .collect();
    flow_with("s0", &ids[n - 1], steps)
}

/// `root -> {a, b} -> c`, with `c` reachable through both branches.
#[allow(dead_code)]
pub fn create_diamond_flow() -> Flow {
    flow_with(
        "root",
        "c",
        vec![
            blocking(step("root", Status::Done), &["a", "b"]),
            blocking(step("a", Status::Done), &["c"]),
            blocking(step("b", Status::Pending), &["c"]),
            step("c", Status::Upcoming),
        ],
    )
}

/// Step ids of every level, in order.
#[allow(dead_code)]
pub fn level_ids(levels: &[LayoutLevel]) -> Vec<Vec<String>> {
    levels
        .iter()
        .map(|level| level.step_ids().map(str::to_string).collect())
        .collect()
}
