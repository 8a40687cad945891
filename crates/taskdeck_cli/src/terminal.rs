//! Terminal presentation surface.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use taskdeck_core::{FilterMode, FocusTarget, RowView, Surface, TaskId};

/// Characters of the id shown in listings; any unique prefix is accepted
/// back as input.
pub const SHORT_ID_LEN: usize = 8;

/// Collects the latest frame and prints it on demand.
///
/// Rows never animate out, so deletes apply immediately.
pub struct TerminalSurface {
    rows: Vec<RowView>,
    empty_state_visible: bool,
    pending_count: usize,
    active_filter: FilterMode,
    focus: Option<TaskId>,
    assume_yes: bool,
}

impl TerminalSurface {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            rows: Vec::new(),
            empty_state_visible: true,
            pending_count: 0,
            active_filter: FilterMode::default(),
            focus: None,
            assume_yes,
        }
    }

    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.chips_line())?;
        if self.empty_state_visible {
            writeln!(out, "  {}", "No tasks here.".dimmed())?;
        }
        for row in &self.rows {
            writeln!(out, "{}", self.row_line(row))?;
        }
        writeln!(out, "{} pending", self.pending_count.to_string().bold())
    }

    fn chips_line(&self) -> String {
        FilterMode::ALL_MODES
            .iter()
            .map(|mode| {
                if *mode == self.active_filter {
                    format!("[{mode}]").bold().to_string()
                } else {
                    mode.as_str().dimmed().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn row_line(&self, row: &RowView) -> String {
        let marker = if self.focus.as_ref() == Some(&row.id) {
            ">"
        } else {
            " "
        };
        let checkbox = if row.done { "[x]" } else { "[ ]" };
        let short_id: String = row.id.as_str().chars().take(SHORT_ID_LEN).collect();
        let title = if row.done {
            row.title.strikethrough().dimmed().to_string()
        } else {
            row.title.normal().to_string()
        };
        let badge = if row.done {
            format!(" {}", "✓ completed".green())
        } else {
            String::new()
        };
        format!(
            "{marker} {checkbox} {}  {title}  {}{badge}",
            short_id.cyan(),
            format!("({}, {})", row.age_label, row.created_label).dimmed(),
        )
    }
}

impl Surface for TerminalSurface {
    fn replace_rows(&mut self, rows: &[RowView]) {
        self.rows = rows.to_vec();
        self.focus = None;
    }

    fn set_empty_state_visible(&mut self, visible: bool) {
        self.empty_state_visible = visible;
    }

    fn set_pending_count(&mut self, count: usize) {
        self.pending_count = count;
    }

    fn set_active_filter(&mut self, mode: FilterMode) {
        self.active_filter = mode;
    }

    fn focus(&mut self, target: &FocusTarget) {
        if let FocusTarget::RowToggle(id) = target {
            self.focus = Some(id.clone());
        }
    }

    fn clear_new_task_input(&mut self) {}

    fn begin_exit_transition(&mut self, _id: &TaskId) -> bool {
        false
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let mut stderr = io::stderr();
        if write!(stderr, "{prompt} [y/N] ").and_then(|()| stderr.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::{is_yes, TerminalSurface};
    use taskdeck_core::{RowView, Surface, TaskId};

    #[test]
    fn yes_answers_are_case_insensitive() {
        assert!(is_yes("Y\n"));
        assert!(is_yes(" yes "));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }

    #[test]
    fn assume_yes_skips_the_prompt() {
        let mut surface = TerminalSurface::new(true);
        assert!(surface.confirm("Clear?"));
    }

    #[test]
    fn print_lists_rows_and_pending_count() {
        colored::control::set_override(false);
        let mut surface = TerminalSurface::new(false);
        surface.replace_rows(&[RowView {
            id: TaskId::from("0123456789abcdef"),
            title: "Buy milk".to_string(),
            done: true,
            age_label: "just now".to_string(),
            created_label: "2026-01-01 10:00:00".to_string(),
            exiting: false,
        }]);
        surface.set_empty_state_visible(false);
        surface.set_pending_count(0);

        let mut out = Vec::new();
        surface.print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[all] active completed"));
        assert!(text.contains(
            "[x] 01234567  Buy milk  (just now, 2026-01-01 10:00:00) ✓ completed"
        ));
        assert!(text.ends_with("0 pending\n"));
        assert!(!text.contains("No tasks here."));
    }
}
