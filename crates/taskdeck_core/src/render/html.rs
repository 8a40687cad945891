//! HTML markup surface.
//!
//! # Invariants
//! - User text is escaped before it reaches markup, in both text and
//!   attribute positions.
//! - Markup is regenerated from the last frame; no element identity
//!   survives a render.

use super::frame::{FocusTarget, RowView};
use super::surface::Surface;
use crate::model::filter::FilterMode;
use crate::model::task::TaskId;
use std::fmt::Write as _;

/// Escapes the five HTML-significant characters.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Markup for one task row.
pub fn row_html(row: &RowView) -> String {
    let mut classes = String::from("task");
    if row.done {
        classes.push_str(" done");
    }
    if row.exiting {
        classes.push_str(" exit");
    }
    let checked = if row.done { " checked" } else { "" };
    let badge = if row.done {
        "<span>✓ completed</span>"
    } else {
        ""
    };
    let toggle_label = row.toggle_label();

    format!(
        concat!(
            "<li class=\"{classes}\" data-id=\"{id}\">",
            "<input class=\"checkbox\" type=\"checkbox\"{checked} aria-label=\"{checkbox_label}\">",
            "<div>",
            "<p class=\"task__title\">{title}</p>",
            "<div class=\"task__meta\"><span title=\"{created}\">{age}</span>{badge}</div>",
            "</div>",
            "<div class=\"task__actions\">",
            "<button class=\"icon-btn icon-btn--complete\" data-action=\"toggle\" title=\"{toggle_label}\" aria-label=\"{toggle_label}\"></button>",
            "<button class=\"icon-btn icon-btn--delete\" data-action=\"delete\" title=\"Delete task\" aria-label=\"Delete task\"></button>",
            "</div>",
            "</li>"
        ),
        classes = classes,
        id = escape_html(row.id.as_str()),
        checked = checked,
        checkbox_label = row.checkbox_label(),
        title = escape_html(&row.title),
        created = escape_html(&row.created_label),
        age = escape_html(&row.age_label),
        badge = badge,
        toggle_label = toggle_label,
    )
}

/// Headless HTML surface holding the latest markup state.
///
/// Confirmation answers and exit animation support are configured up
/// front, so the surface can be driven without a browser.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    rows: Vec<RowView>,
    empty_state_visible: bool,
    pending_count: usize,
    active_filter: FilterMode,
    focus: Option<FocusTarget>,
    focus_history: Vec<FocusTarget>,
    new_task_input_cleared: bool,
    animate_exit: bool,
    confirm_answer: bool,
    prompts: Vec<String>,
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            empty_state_visible: true,
            pending_count: 0,
            active_filter: FilterMode::default(),
            focus: None,
            focus_history: Vec::new(),
            new_task_input_cleared: false,
            animate_exit: false,
            confirm_answer: false,
            prompts: Vec::new(),
        }
    }
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes delete play an exit transition instead of removing at once.
    pub fn with_exit_animation(mut self, animate: bool) -> Self {
        self.animate_exit = animate;
        self
    }

    /// Sets the answer given to every confirmation prompt.
    pub fn with_confirm_answer(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    pub fn empty_state_visible(&self) -> bool {
        self.empty_state_visible
    }

    pub fn pending_count(&self) -> usize {
        self.pending_count
    }

    pub fn active_filter(&self) -> FilterMode {
        self.active_filter
    }

    pub fn focused(&self) -> Option<&FocusTarget> {
        self.focus.as_ref()
    }

    /// Every focus request so far, oldest first.
    pub fn focus_history(&self) -> &[FocusTarget] {
        &self.focus_history
    }

    pub fn new_task_input_cleared(&self) -> bool {
        self.new_task_input_cleared
    }

    /// Prompts shown so far, oldest first.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Markup of the task list container.
    pub fn list_html(&self) -> String {
        let rows: String = self.rows.iter().map(row_html).collect();
        format!("<ul id=\"task-list\">{rows}</ul>")
    }

    /// Markup of the filter chips.
    pub fn chips_html(&self) -> String {
        let mut html = String::from("<div class=\"chips\" role=\"tablist\">");
        for mode in FilterMode::ALL_MODES {
            let active = mode == self.active_filter;
            let _ = write!(
                html,
                "<button class=\"chip{}\" data-filter=\"{mode}\" role=\"tab\" aria-selected=\"{active}\">{}</button>",
                if active { " is-active" } else { "" },
                chip_caption(mode),
            );
        }
        html.push_str("</div>");
        html
    }

    /// Full fragment: chips, list, empty state and pending count.
    pub fn to_html(&self) -> String {
        let empty_class = if self.empty_state_visible {
            "empty"
        } else {
            "empty hidden"
        };
        format!(
            "<section class=\"todo\">{}{}<p id=\"empty-state\" class=\"{empty_class}\">No tasks here.</p><footer><span id=\"count-active\">{}</span> pending</footer></section>",
            self.chips_html(),
            self.list_html(),
            self.pending_count,
        )
    }
}

impl Surface for HtmlSurface {
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
        self.focus = Some(target.clone());
        self.focus_history.push(target.clone());
    }

    fn clear_new_task_input(&mut self) {
        self.new_task_input_cleared = true;
    }

    fn begin_exit_transition(&mut self, id: &TaskId) -> bool {
        if !self.animate_exit {
            return false;
        }
        match self.rows.iter_mut().find(|row| &row.id == id) {
            Some(row) => {
                row.exiting = true;
                true
            }
            None => false,
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.confirm_answer
    }
}

fn chip_caption(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::All => "All",
        FilterMode::Active => "Active",
        FilterMode::Completed => "Completed",
    }
}
