//! Published calendar state snapshot.

use chrono::NaiveDate;

use crate::week::Week;

/// Display mode of the calendar surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalendarMode {
    /// Compact single-row week strip.
    #[default]
    Week,
    /// Expanded month grid.
    Month,
}

/// Immutable snapshot of the calendar surface, published after every
/// controller operation.
///
/// Title, selection, and progress are always mutually consistent within one
/// snapshot; subscribers never observe a new selection with a stale title.
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarState {
    /// The user's current pick, if any.
    pub selected_date: Option<NaiveDate>,
    /// The week anchoring the week-mode display. Always contains
    /// `selected_date` when a selection exists.
    pub focused_week: Week,
    /// Current display mode. Provisionally [`CalendarMode::Month`] while a
    /// drag is at non-zero progress.
    pub mode: CalendarMode,
    /// Morph progress in `[0, 1]`: 0 is fully week mode, 1 is fully month
    /// mode.
    pub drag_progress: f32,
    /// Derived "Month Year" title for the selection.
    pub title: String,
}
