//! Calendar navigation engine for agenda-style reminder apps.
//!
//! The engine owns the single source of truth for a calendar surface: the
//! selected date, the focused week, the derived title, and the continuous
//! drag progress that morphs the surface between a compact week strip and an
//! expanded month grid. Hosts forward raw gesture input and render from the
//! published [`CalendarState`](state::CalendarState) snapshots; the engine
//! performs no I/O and never blocks.
//!
//! # Usage
//!
//! ```
//! use agenda_calendar::{CalendarController, CalendarLayout, CalendarState};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 10, 24).unwrap();
//! let mut calendar = CalendarController::anchored(today, CalendarLayout::default());
//!
//! calendar.subscribe(|state: &CalendarState| {
//!     println!("{} ({:?})", state.title, state.mode);
//! });
//!
//! // A vertical drag past a third of the travel distance snaps to month mode.
//! calendar.update_drag(130.0);
//! calendar.end_drag();
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod animation;

pub mod callback;
pub mod controller;
pub mod date_grid;
pub mod item_source;
pub mod layout;
pub mod month;
pub mod morph;
pub mod shared;
pub mod state;
pub mod week;

pub use callback::CallbackWith;
pub use controller::CalendarController;
pub use item_source::{ItemSource, ItemSourceError};
pub use layout::{CalendarDefaults, CalendarLayout};
pub use month::Month;
pub use morph::{MorphEngine, MorphTimeline};
pub use shared::Shared;
pub use state::{CalendarMode, CalendarState};
pub use week::{RelativeOrder, Week};
