use crate::flow::{Flow, Step};
use crate::layout::LayoutLevel;

/// Share of all steps in the flow that are done, as a rounded percentage.
pub fn flow_progress(flow: &Flow) -> u8 {
    let done = flow.steps.iter().filter(|s| s.is_done()).count();
    percentage(done, flow.steps.len())
}

/// Share of `step`'s children that are done, as a rounded percentage.
///
/// Children are looked up in `flow.steps`; ids that do not resolve are ignored.
pub fn substep_progress(flow: &Flow, step: &Step) -> u8 {
    if !step.has_children() {
        return 0;
    }
    let children: Vec<&Step> = flow
        .steps
        .iter()
        .filter(|s| step.child_ids().contains(&s.id))
        .collect();
    let done = children.iter().filter(|s| s.is_done()).count();
    percentage(done, children.len())
}

/// `(done, total)` over the entries of the first level.
pub fn parent_steps_summary(levels: &[LayoutLevel]) -> (usize, usize) {
    levels.first().map_or((0, 0), |level| {
        let done = level
            .serial_components
            .iter()
            .filter(|e| e.step.is_done())
            .count();
        (done, level.serial_components.len())
    })
}

fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u8
}
