//! Presentation surface contract.

use super::frame::{FocusTarget, Frame, RowView};
use crate::model::filter::FilterMode;
use crate::model::task::TaskId;

/// Abstract presentation layer driven by the controller.
pub trait Surface {
    /// Replaces every displayed row.
    fn replace_rows(&mut self, rows: &[RowView]);
    fn set_empty_state_visible(&mut self, visible: bool);
    fn set_pending_count(&mut self, count: usize);
    /// Marks the chip for `mode` active (and ARIA-selected), others inactive.
    fn set_active_filter(&mut self, mode: FilterMode);
    fn focus(&mut self, target: &FocusTarget);
    fn clear_new_task_input(&mut self);
    /// Starts the exit transition for the row showing `id`.
    ///
    /// Returns `false` when no such row is displayed or the surface does not
    /// animate; the caller then removes immediately. A surface returning
    /// `true` must later report `UiEvent::ExitTransitionEnded`.
    fn begin_exit_transition(&mut self, id: &TaskId) -> bool;
    /// Asks the user to confirm a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Applies `frame` to `surface`.
pub fn present(frame: &Frame, surface: &mut impl Surface) {
    surface.replace_rows(&frame.rows);
    surface.set_empty_state_visible(frame.empty_state_visible);
    surface.set_pending_count(frame.pending_count);
    if let Some(target) = &frame.focus {
        surface.focus(target);
    }
}
