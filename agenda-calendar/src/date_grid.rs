//! Pure ISO-week date arithmetic for calendar grids.
//!
//! ## Usage
//!
//! Leaf helpers used by [`Week`](crate::week::Week) and
//! [`Month`](crate::month::Month) construction; all functions are
//! side-effect-free and total over valid [`NaiveDate`] inputs.
//!
//! Week boundaries are ISO-8601 (Monday first), independent of any
//! locale-specific first-weekday setting.

use chrono::{Datelike, Days, NaiveDate};
use smallvec::SmallVec;

/// A month grid as Monday-first rows of seven days each.
///
/// Never more than six rows, so the backing storage stays inline.
pub type MonthRows = SmallVec<[[NaiveDate; 7]; 6]>;

/// Returns the Monday of the ISO week containing `date`.
///
/// If `date` is itself a Monday it is returned unchanged.
pub fn nearest_monday(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(back))
        .expect("date stays within chrono's representable range")
}

/// Returns the seven contiguous days starting at `monday`.
pub fn week_containing(monday: NaiveDate) -> [NaiveDate; 7] {
    core::array::from_fn(|i| {
        monday
            .checked_add_days(Days::new(i as u64))
            .expect("date stays within chrono's representable range")
    })
}

/// Lays out the month containing `anchor` as full Monday-first weeks.
///
/// The grid starts on the Monday of the week containing the first of the
/// month and ends with the week containing the last of the month, padding
/// both ends with adjacent-month days. The result is always 4 to 6 rows and
/// the concatenated days are contiguous; a trailing partial row is padded to
/// a full week, never truncated.
pub fn month_rows(anchor: NaiveDate) -> MonthRows {
    let first = first_of_month(anchor);
    let last = last_of_month(anchor);

    let mut rows = MonthRows::new();
    let mut row_start = nearest_monday(first);
    loop {
        let row = week_containing(row_start);
        let row_end = row[6];
        rows.push(row);
        if row_end >= last {
            break;
        }
        row_start = row_start
            .checked_add_days(Days::new(7))
            .expect("date stays within chrono's representable range");
    }
    rows
}

/// Returns the first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Returns the last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first of the following month is a valid date")
        .pred_opt()
        .expect("a month's last day is a valid date")
}

/// Formats `date` as a "Month Year" title, e.g. `"November 2025"`.
pub fn month_and_year_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Returns the seven Monday-first abbreviated weekday names.
pub fn weekday_symbols() -> [String; 7] {
    // Any known Monday works as the formatting anchor.
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1).expect("2024-01-01 is a valid date");
    week_containing(monday).map(|day| day.format("%a").to_string())
}
