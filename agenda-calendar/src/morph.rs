//! Gesture-to-progress mapping for the week/month morph.
//!
//! ## Usage
//!
//! [`MorphEngine`] turns a vertical drag translation into a clamped progress
//! scalar and the visual parameters derived from it; [`MorphTimeline`]
//! animates progress to its snap target after the gesture ends. Neither type
//! knows anything about dates.

use std::time::{Duration, Instant};

use crate::{animation, layout::CalendarLayout, state::CalendarMode};

/// Fraction of the travel a week-mode drag must cover to snap open.
const EXPAND_SNAP_RATIO: f32 = 1.0 / 3.0;
/// Fraction of the travel below which a month-mode drag snaps closed.
///
/// Asymmetric with [`EXPAND_SNAP_RATIO`] on purpose: the surface is sticky
/// toward whichever mode the drag started in.
const COLLAPSE_SNAP_RATIO: f32 = 2.0 / 3.0;

/// Maps drag input to morph progress and derived visual parameters.
///
/// Progress is always recomputed from the gesture's start-of-drag baseline
/// plus the latest cumulative translation, so many small pointer events
/// cannot accumulate drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphEngine {
    layout: CalendarLayout,
    baseline: f32,
    offset: f32,
}

impl MorphEngine {
    /// Creates an engine at fully collapsed (week mode) progress.
    pub fn new(layout: CalendarLayout) -> Self {
        Self {
            layout,
            baseline: 0.0,
            offset: 0.0,
        }
    }

    /// The layout constants this engine maps against.
    pub fn layout(&self) -> CalendarLayout {
        self.layout
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        let travel = self.layout.travel();
        if travel <= 0.0 {
            return 0.0;
        }
        self.offset / travel
    }

    /// Forces progress to a value, clamped to `[0, 1]`.
    pub fn set_progress(&mut self, progress: f32) {
        self.offset = progress.clamp(0.0, 1.0) * self.layout.travel().max(0.0);
    }

    /// Records the current offset as the baseline of a new gesture.
    pub fn begin_drag(&mut self) {
        self.baseline = self.offset;
    }

    /// Applies the cumulative translation since the gesture began and
    /// returns the resulting progress.
    ///
    /// Positive translation expands toward month mode. The translation is
    /// measured against the gesture baseline, never summed incrementally, so
    /// out-of-range input clamps instead of propagating.
    pub fn drag_to(&mut self, translation: f32) -> f32 {
        let travel = self.layout.travel();
        if travel <= 0.0 {
            self.offset = 0.0;
            return 0.0;
        }
        self.offset = (self.baseline + translation).clamp(0.0, travel);
        self.progress()
    }

    /// Container height for a progress value, always within
    /// `[week_height, month_height]`.
    pub fn container_height(&self, progress: f32) -> f32 {
        self.layout.week_height() + progress.clamp(0.0, 1.0) * self.layout.travel().max(0.0)
    }

    /// Opacity of the non-focused week rows for a progress value.
    pub fn inactive_week_opacity(progress: f32) -> f32 {
        progress.clamp(0.0, 1.0)
    }

    /// Decides the snap destination for a released drag.
    ///
    /// Uses only the mode at drag start and the final progress; gesture
    /// velocity is deliberately ignored.
    pub fn snap_target(from: CalendarMode, progress: f32) -> CalendarMode {
        match from {
            CalendarMode::Week => {
                if progress >= EXPAND_SNAP_RATIO {
                    CalendarMode::Month
                } else {
                    CalendarMode::Week
                }
            }
            CalendarMode::Month => {
                if progress >= COLLAPSE_SNAP_RATIO {
                    CalendarMode::Month
                } else {
                    CalendarMode::Week
                }
            }
        }
    }
}

/// Eased progress animation toward a snap target.
///
/// Purely a function of the clock: `progress_at` can be sampled with any
/// `Instant`, which keeps the timeline testable without sleeping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphTimeline {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl MorphTimeline {
    /// Starts a timeline at `started_at` running for `duration`.
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// The progress value the timeline settles on.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Eased progress at `now`; exactly the target once the duration has
    /// elapsed.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * animation::easing(t)
    }

    /// Returns whether the timeline has settled by `now`.
    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MorphEngine {
        MorphEngine::new(CalendarLayout::default())
    }

    #[test]
    fn test_progress_stays_clamped_for_any_translation() {
        let mut morph = engine();
        morph.begin_drag();
        for translation in [-1000.0, -1.0, 0.0, 50.0, 191.0, 192.0, 10_000.0] {
            let progress = morph.drag_to(translation);
            assert!((0.0..=1.0).contains(&progress), "translation {translation}");
        }
    }

    #[test]
    fn test_drag_recomputes_from_baseline_without_drift() {
        let mut morph = engine();
        morph.begin_drag();
        // Many tiny updates ending at the same cumulative translation must
        // land exactly where a single update would.
        for step in 1..=96 {
            morph.drag_to(step as f32);
        }
        let incremental = morph.progress();
        let mut direct = engine();
        direct.begin_drag();
        assert_eq!(direct.drag_to(96.0), incremental);
    }

    #[test]
    fn test_baseline_carries_the_previous_offset() {
        let mut morph = engine();
        morph.set_progress(1.0);
        morph.begin_drag();
        // Collapsing from month mode: translation is negative.
        let progress = morph.drag_to(-96.0);
        assert!((progress - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_container_height_bounds() {
        let morph = engine();
        assert_eq!(morph.container_height(0.0), 48.0);
        assert_eq!(morph.container_height(1.0), 240.0);
        assert_eq!(morph.container_height(-3.0), 48.0);
        assert_eq!(morph.container_height(7.0), 240.0);
        assert_eq!(morph.container_height(0.5), 144.0);
    }

    #[test]
    fn test_snap_is_sticky_toward_the_starting_mode() {
        assert_eq!(
            MorphEngine::snap_target(CalendarMode::Week, 0.2),
            CalendarMode::Week
        );
        assert_eq!(
            MorphEngine::snap_target(CalendarMode::Week, 0.5),
            CalendarMode::Month
        );
        assert_eq!(
            MorphEngine::snap_target(CalendarMode::Month, 0.5),
            CalendarMode::Week
        );
        assert_eq!(
            MorphEngine::snap_target(CalendarMode::Month, 0.7),
            CalendarMode::Month
        );
    }

    #[test]
    fn test_degenerate_travel_pins_progress_to_zero() {
        let layout = CalendarLayout::default().expanded_month_rows(1);
        let mut morph = MorphEngine::new(layout);
        morph.begin_drag();
        assert_eq!(morph.drag_to(500.0), 0.0);
        assert_eq!(morph.container_height(1.0), layout.week_height());
    }

    #[test]
    fn test_timeline_settles_on_target() {
        let start = Instant::now();
        let timeline = MorphTimeline::new(0.6, 1.0, start, Duration::from_millis(300));
        assert_eq!(timeline.progress_at(start), 0.6);
        assert_eq!(timeline.progress_at(start + Duration::from_millis(300)), 1.0);
        assert!(timeline.is_finished_at(start + Duration::from_millis(300)));
        assert!(!timeline.is_finished_at(start + Duration::from_millis(150)));
    }

    #[test]
    fn test_timeline_is_monotonic_between_endpoints() {
        let start = Instant::now();
        let timeline = MorphTimeline::new(0.1, 0.9, start, Duration::from_millis(300));
        let mut last = timeline.progress_at(start);
        for ms in (0..=300).step_by(10) {
            let value = timeline.progress_at(start + Duration::from_millis(ms));
            assert!(value >= last);
            assert!((0.1..=0.9).contains(&value));
            last = value;
        }
    }

    #[test]
    fn test_zero_duration_timeline_is_immediately_settled() {
        let start = Instant::now();
        let timeline = MorphTimeline::new(0.4, 0.0, start, Duration::ZERO);
        assert_eq!(timeline.progress_at(start), 0.0);
        assert!(timeline.is_finished_at(start));
    }
}
