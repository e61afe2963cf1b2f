use crate::layout::{LayoutLevel, StepEntry, Traversal};
use std::fmt::Write;

/// Formats traversals into human-readable text.
pub struct LayoutFormatter;

impl LayoutFormatter {
    /// Renders the summary line followed by one block per level.
    pub fn format_traversal(traversal: &Traversal) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "Steps: {} | Done: {} | ETA: {}",
            traversal.step_count, traversal.done_count, traversal.eta
        );
        for level in &traversal.levels {
            Self::format_level(&mut output, level);
        }
        output
    }

    fn format_level(output: &mut String, level: &LayoutLevel) {
        let _ = writeln!(
            output,
            "\n--- Level {} (margin {}, {}) ---",
            level.level,
            level.margin_left,
            level.hint.class_name()
        );
        if level.serial_components.is_empty() {
            let _ = writeln!(output, "  (empty)");
        }
        for entry in &level.serial_components {
            let _ = writeln!(output, "  {}", Self::format_entry(entry));
        }
    }

    /// Formats one entry as `#n [STATUS] title (id)` plus root/last markers.
    pub fn format_entry(entry: &StepEntry) -> String {
        let mut line = format!(
            "#{} [{}] {} ({})",
            entry.step_number,
            entry.step.status,
            entry.step.title(),
            entry.step.id
        );
        if entry.is_root_step {
            line.push_str(" <root>");
        }
        if entry.is_last_step {
            line.push_str(" <last>");
        }
        line
    }
}
