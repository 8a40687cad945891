//! Rendering of the display list onto a presentation surface.
//!
//! # Responsibility
//! - Build a `Frame` (rows, empty state, pending count, focus) from state.
//! - Push frames onto any `Surface` implementation.
//!
//! # Invariants
//! - Rows keep display-list order; the renderer never sorts.
//! - Pending count covers the whole repository, not the filtered view.
//! - Each frame fully replaces the previous rows.

pub mod frame;
pub mod html;
pub mod surface;

pub use frame::{build_frame, FocusTarget, Frame, RowView};
pub use surface::{present, Surface};
