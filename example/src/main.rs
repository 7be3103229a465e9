//! Headless demo of the calendar navigation engine.
//!
//! Drives a scripted session through the controller: selects dates, drags
//! the surface past the snap threshold, cancels a gesture, toggles the mode,
//! and prints the month grid with day markers. Run with
//! `RUST_LOG=agenda_calendar=trace` to watch the engine's own diagnostics.

use std::sync::Arc;

use agenda_calendar::{
    CalendarController, CalendarLayout, CalendarMode, CalendarState, Shared, date_grid,
};
use chrono::{Datelike, NaiveDate};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let calendar = Shared::new(CalendarController::new(CalendarLayout::default()));

    calendar.with_mut(|calendar| {
        calendar.subscribe(|state: &CalendarState| {
            info!(
                title = %state.title,
                mode = ?state.mode,
                progress = state.drag_progress,
                "snapshot"
            );
        });
        calendar.on_mode_changed(|mode: &CalendarMode| {
            info!(?mode, "host relayouts siblings");
        });
        // A toy reminder store: items on Mondays and on the 15th.
        calendar.set_item_source(Arc::new(|day: NaiveDate| {
            day.weekday().num_days_from_monday() == 0 || day.day() == 15
        }));
    });

    info!("-- tap a day in the visible week");
    let in_week = calendar.with(|calendar| calendar.state().focused_week.days()[3]);
    calendar.with_mut(|calendar| calendar.select(in_week));

    info!("-- drag down past a third of the travel, release");
    calendar.with_mut(|calendar| {
        for translation in [30.0, 75.0, 120.0] {
            calendar.update_drag(translation);
        }
        calendar.end_drag();
    });

    info!("-- start collapsing, then the recognizer cancels");
    calendar.with_mut(|calendar| {
        calendar.update_drag(-20.0);
        calendar.cancel_drag();
    });

    info!("-- tap the capsule to collapse back to the week strip");
    calendar.with_mut(|calendar| calendar.toggle_mode());

    print_month(&calendar);
}

fn print_month(calendar: &Shared<CalendarController>) {
    calendar.with(|calendar| {
        let [_, month, _] = calendar.month_carousel();
        println!("\n{}", calendar.state().title);
        println!("{}", date_grid::weekday_symbols().join(" "));
        for week in month.weeks() {
            let row: Vec<String> = week
                .days()
                .iter()
                .map(|day| {
                    let marker = if calendar.day_has_items(*day) { "*" } else { " " };
                    if month.is_own_day(*day) {
                        format!("{:>2}{marker}", day.day())
                    } else {
                        format!("  {marker}")
                    }
                })
                .collect();
            println!("{}", row.join(" "));
        }
    });
}
