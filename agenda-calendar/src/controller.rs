//! Calendar controller: the single source of truth for the calendar surface.
//!
//! ## Usage
//!
//! The host forwards tap selections and raw vertical drag translations into
//! [`CalendarController`] and re-renders from the [`CalendarState`]
//! snapshots it publishes. All operations are synchronous and apply
//! atomically: every published snapshot carries a mutually consistent
//! selection, title, focused week, mode, and progress.

use std::{sync::Arc, time::Instant};

use chrono::{Local, NaiveDate};
use tracing::{debug, trace, warn};

use crate::{
    callback::CallbackWith,
    date_grid,
    item_source::ItemSource,
    layout::{CalendarDefaults, CalendarLayout},
    month::Month,
    morph::{MorphEngine, MorphTimeline},
    state::{CalendarMode, CalendarState},
    week::{RelativeOrder, Week},
};

/// Owns and mutates the calendar state.
///
/// Single-threaded by contract: operations are expected to run on the
/// host's event loop in arrival order. Hosts that need to share the
/// controller across handlers wrap it in [`Shared`](crate::shared::Shared).
pub struct CalendarController {
    state: CalendarState,
    morph: MorphEngine,
    timeline: Option<MorphTimeline>,
    drag_from: Option<CalendarMode>,
    subscribers: Vec<CallbackWith<CalendarState>>,
    mode_subscribers: Vec<CallbackWith<CalendarMode>>,
    items: Option<Arc<dyn ItemSource>>,
}

impl CalendarController {
    /// Creates a controller anchored on today, in week mode with today
    /// selected.
    pub fn new(layout: CalendarLayout) -> Self {
        Self::anchored(Local::now().date_naive(), layout)
    }

    /// Creates a controller anchored on an explicit date.
    ///
    /// The initial state selects `today`, focuses the week containing it,
    /// and starts fully collapsed in week mode.
    pub fn anchored(today: NaiveDate, layout: CalendarLayout) -> Self {
        let focused_week = Week::containing(today, RelativeOrder::Current);
        let state = CalendarState {
            selected_date: Some(today),
            focused_week,
            mode: CalendarMode::Week,
            drag_progress: 0.0,
            title: date_grid::month_and_year_title(today),
        };
        Self {
            state,
            morph: MorphEngine::new(layout),
            timeline: None,
            drag_from: None,
            subscribers: Vec::new(),
            mode_subscribers: Vec::new(),
            items: None,
        }
    }

    /// The current state snapshot.
    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    /// The layout constants the morph maps against.
    pub fn layout(&self) -> CalendarLayout {
        self.morph.layout()
    }

    /// Registers a subscriber receiving every published snapshot.
    pub fn subscribe(&mut self, subscriber: impl Into<CallbackWith<CalendarState>>) {
        self.subscribers.push(subscriber.into());
    }

    /// Registers a hook fired whenever the published mode flips, so the
    /// host can resize sibling layout in sync with the morph.
    pub fn on_mode_changed(&mut self, subscriber: impl Into<CallbackWith<CalendarMode>>) {
        self.mode_subscribers.push(subscriber.into());
    }

    /// Injects the reminder store collaborator used for day markers.
    pub fn set_item_source(&mut self, source: Arc<dyn ItemSource>) {
        self.items = Some(source);
    }

    /// Selects a date, recomputing the title and, when the date falls
    /// outside the focused week, the focused week as well.
    ///
    /// Any valid date is acceptable; there is no error condition.
    pub fn select(&mut self, date: NaiveDate) {
        debug!(%date, "select");
        self.state.selected_date = Some(date);
        self.state.title = date_grid::month_and_year_title(date);
        if !self.state.focused_week.contains(date) {
            self.state.focused_week = Week::containing(date, RelativeOrder::Current);
            trace!(monday = %self.state.focused_week.id(), "focused week recomputed");
        }
        self.publish();
    }

    /// Inbound host hook for selection changes that did not originate from
    /// the calendar itself (e.g. a "jump to today" affordance).
    pub fn external_selection_changed(&mut self, date: NaiveDate) {
        trace!(%date, "external selection");
        self.select(date);
    }

    /// Applies the cumulative vertical drag translation since the gesture
    /// began.
    ///
    /// The first call after an `end_drag` starts a new gesture, capturing
    /// the current progress as its baseline. While dragging, the mode is
    /// provisionally `Month` whenever progress is above zero, which picks
    /// the grid the host renders underneath the morph.
    pub fn update_drag(&mut self, translation: f32) {
        if self.drag_from.is_none() {
            self.drag_from = Some(self.state.mode);
            self.timeline = None;
            self.morph.begin_drag();
            trace!(from = ?self.state.mode, "drag started");
        }
        let progress = self.morph.drag_to(translation);
        self.state.drag_progress = progress;
        let provisional = if progress > 0.0 {
            CalendarMode::Month
        } else {
            CalendarMode::Week
        };
        let flipped = self.apply_mode(provisional);
        if flipped {
            self.notify_mode(provisional);
        }
        self.publish();
    }

    /// Ends the active drag, snapping progress to 0 or 1.
    ///
    /// The decision uses only the final progress and the mode the drag
    /// started from: past one third of the travel an expanding gesture
    /// snaps open, and below two thirds a collapsing gesture snaps closed.
    /// Velocity is ignored. Without an active drag this is a no-op.
    pub fn end_drag(&mut self) {
        let Some(from) = self.drag_from.take() else {
            return;
        };
        let progress = self.state.drag_progress;
        let target_mode = MorphEngine::snap_target(from, progress);
        let target = match target_mode {
            CalendarMode::Week => 0.0,
            CalendarMode::Month => 1.0,
        };
        debug!(?from, progress, ?target_mode, "drag ended");
        self.timeline = Some(MorphTimeline::new(
            progress,
            target,
            Instant::now(),
            CalendarDefaults::MORPH_DURATION,
        ));
        self.morph.set_progress(target);
        self.state.drag_progress = target;
        let flipped = self.apply_mode(target_mode);
        if flipped {
            self.notify_mode(target_mode);
        }
        self.publish();
    }

    /// Host-side gesture cancellation.
    ///
    /// Handled identically to [`end_drag`](Self::end_drag) at the last
    /// known progress, so a cancelled gesture never leaves half-applied
    /// state behind.
    pub fn cancel_drag(&mut self) {
        trace!("drag cancelled");
        self.end_drag();
    }

    /// Discrete alternative to dragging: flips between fully collapsed week
    /// mode and fully expanded month mode with an eased transition.
    pub fn toggle_mode(&mut self) {
        if self.drag_from.take().is_some() {
            trace!("toggle superseded an active drag");
        }
        let (target_mode, target) = match self.state.mode {
            CalendarMode::Week => (CalendarMode::Month, 1.0),
            CalendarMode::Month => (CalendarMode::Week, 0.0),
        };
        debug!(?target_mode, "toggle mode");
        self.timeline = Some(MorphTimeline::new(
            self.state.drag_progress,
            target,
            Instant::now(),
            CalendarDefaults::MORPH_DURATION,
        ));
        self.morph.set_progress(target);
        self.state.drag_progress = target;
        let flipped = self.apply_mode(target_mode);
        if flipped {
            self.notify_mode(target_mode);
        }
        self.publish();
    }

    /// Moves the focused week by whole weeks without touching the selection
    /// (the week pager swipe).
    pub fn shift_focus(&mut self, weeks: i64) {
        if weeks == 0 {
            return;
        }
        self.state.focused_week = self.state.focused_week.shifted(weeks);
        trace!(monday = %self.state.focused_week.id(), "focus shifted");
        self.publish();
    }

    /// Eased progress for the current frame.
    ///
    /// While a snap or toggle animation is in flight this samples the
    /// timeline; once settled (or while dragging) it returns the snapshot
    /// progress. Hosts call this once per frame for interpolated rendering.
    pub fn animated_progress(&mut self) -> f32 {
        let Some(timeline) = self.timeline else {
            return self.state.drag_progress;
        };
        let now = Instant::now();
        if timeline.is_finished_at(now) {
            self.timeline = None;
            return timeline.target();
        }
        timeline.progress_at(now)
    }

    /// Container height for the current frame, within
    /// `[week_height, month_height]`.
    pub fn container_height(&mut self) -> f32 {
        let progress = self.animated_progress();
        self.morph.container_height(progress)
    }

    /// Opacity of non-focused week rows for the current frame.
    pub fn inactive_week_opacity(&mut self) -> f32 {
        MorphEngine::inactive_week_opacity(self.animated_progress())
    }

    /// Returns whether a snap or toggle animation is still running.
    pub fn is_animating(&self) -> bool {
        self.timeline
            .is_some_and(|timeline| !timeline.is_finished_at(Instant::now()))
    }

    /// Returns whether `day` shows an item marker.
    ///
    /// A missing or failing [`ItemSource`] degrades to `false`; collaborator
    /// failures are logged and never corrupt calendar state.
    pub fn day_has_items(&self, day: NaiveDate) -> bool {
        let Some(source) = &self.items else {
            return false;
        };
        match source.has_items(day) {
            Ok(has_items) => has_items,
            Err(error) => {
                warn!(%day, %error, "item source failed, rendering day without marker");
                false
            }
        }
    }

    /// The previous/current/next weeks around the focused week, for a paged
    /// week strip.
    pub fn week_carousel(&self) -> [Week; 3] {
        Week::carousel(self.state.focused_week.id())
    }

    /// The previous/current/next month grids around the selection, for a
    /// paged month surface.
    pub fn month_carousel(&self) -> [Month; 3] {
        let anchor = self
            .state
            .selected_date
            .unwrap_or_else(|| self.state.focused_week.id());
        Month::carousel(anchor)
    }

    fn apply_mode(&mut self, mode: CalendarMode) -> bool {
        if self.state.mode == mode {
            return false;
        }
        self.state.mode = mode;
        true
    }

    fn notify_mode(&self, mode: CalendarMode) {
        for subscriber in &self.mode_subscribers {
            subscriber.call(&mode);
        }
    }

    fn publish(&self) {
        for subscriber in &self.subscribers {
            subscriber.call(&self.state);
        }
    }
}
