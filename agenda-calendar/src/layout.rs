//! Layout configuration for the week/month morph.
//!
//! ## Usage
//!
//! Hosts describe their calendar sizing once and hand it to the controller;
//! the engine derives the expanded month height and the drag travel distance
//! from it.

use std::time::Duration;

use derive_setters::Setters;

/// Default layout values for the calendar surface.
pub struct CalendarDefaults;

impl CalendarDefaults {
    /// Height of a single week row in the host's logical units.
    pub const WEEK_ROW_HEIGHT: f32 = 48.0;
    /// Number of rows the expanded month surface is sized for.
    pub const EXPANDED_MONTH_ROWS: u32 = 5;
    /// Duration of the snap/toggle morph animation.
    pub const MORPH_DURATION: Duration = Duration::from_millis(300);
}

/// Host-supplied sizing constants for the calendar surface.
///
/// The expanded month height is always `week_row_height *
/// expanded_month_rows`, regardless of how many rows the currently visible
/// month lays out.
#[derive(Clone, Copy, Debug, PartialEq, Setters)]
pub struct CalendarLayout {
    /// Height of a single week row in the host's logical units.
    pub week_row_height: f32,
    /// Number of rows the expanded month surface is sized for.
    pub expanded_month_rows: u32,
}

impl Default for CalendarLayout {
    fn default() -> Self {
        Self {
            week_row_height: CalendarDefaults::WEEK_ROW_HEIGHT,
            expanded_month_rows: CalendarDefaults::EXPANDED_MONTH_ROWS,
        }
    }
}

impl CalendarLayout {
    /// Height of the fully collapsed (week mode) surface.
    pub fn week_height(&self) -> f32 {
        self.week_row_height
    }

    /// Height of the fully expanded (month mode) surface.
    pub fn month_height(&self) -> f32 {
        self.week_row_height * self.expanded_month_rows as f32
    }

    /// Total vertical travel of the morph gesture.
    pub fn travel(&self) -> f32 {
        self.month_height() - self.week_height()
    }
}
