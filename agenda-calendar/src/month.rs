//! Month value type for the calendar grid.
//!
//! ## Usage
//!
//! A [`Month`] is the full-week grid for one calendar month: five or six
//! Monday-first rows, padded at both ends with adjacent-month days so the
//! concatenated days form one contiguous run.

use chrono::{Datelike, Days, NaiveDate};
use smallvec::SmallVec;

use crate::{
    date_grid,
    week::{RelativeOrder, Week},
};

/// The full-week grid covering one calendar month.
#[derive(Clone, Debug)]
pub struct Month {
    weeks: SmallVec<[Week; 6]>,
    order: RelativeOrder,
    first_of_month: NaiveDate,
}

impl Month {
    /// Builds the month grid containing `date`.
    ///
    /// The order tag is caller-supplied carousel context, not derived from
    /// the date.
    pub fn containing(date: NaiveDate, order: RelativeOrder) -> Self {
        let weeks = date_grid::month_rows(date)
            .into_iter()
            .map(|row| Week::from_row(row, RelativeOrder::Current))
            .collect();
        Self {
            weeks,
            order,
            first_of_month: date_grid::first_of_month(date),
        }
    }

    /// The week rows, top to bottom.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// The relative order tag.
    pub fn order(&self) -> RelativeOrder {
        self.order
    }

    /// The first day of the month this grid covers.
    pub fn first_of_month(&self) -> NaiveDate {
        self.first_of_month
    }

    /// Number of rows in the grid (5 or 6, or 4 for a February starting on
    /// Monday).
    pub fn row_count(&self) -> usize {
        self.weeks.len()
    }

    /// Iterates every grid day in order, including the padding days.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flat_map(|week| week.days().iter().copied())
    }

    /// Returns whether `date` belongs to the covered month itself, as
    /// opposed to the leading/trailing padding.
    pub fn is_own_day(&self, date: NaiveDate) -> bool {
        date.year() == self.first_of_month.year() && date.month() == self.first_of_month.month()
    }

    /// Builds the previous/current/next month carousel around `date`.
    pub fn carousel(date: NaiveDate) -> [Self; 3] {
        let first = date_grid::first_of_month(date);
        let in_previous = first
            .pred_opt()
            .expect("date stays within chrono's representable range");
        let in_next = date_grid::last_of_month(date)
            .checked_add_days(Days::new(1))
            .expect("date stays within chrono's representable range");
        [
            Self::containing(in_previous, RelativeOrder::Previous),
            Self::containing(date, RelativeOrder::Current),
            Self::containing(in_next, RelativeOrder::Next),
        ]
    }
}

// Identity is the covered month; order and row contents follow from it.
impl PartialEq for Month {
    fn eq(&self, other: &Self) -> bool {
        self.first_of_month == other.first_of_month
    }
}

impl Eq for Month {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_is_whole_weeks_and_contiguous() {
        let month = Month::containing(date(2025, 11, 15), RelativeOrder::Current);
        let days: Vec<NaiveDate> = month.days().collect();
        assert_eq!(days.len(), month.row_count() * 7);
        for pair in days.windows(2) {
            assert_eq!(pair[0].checked_add_days(Days::new(1)).unwrap(), pair[1]);
        }
        // November 2025 starts on a Saturday and ends on a Sunday.
        assert_eq!(days[0], date(2025, 10, 27));
        assert_eq!(*days.last().unwrap(), date(2025, 11, 30));
    }

    #[test]
    fn test_own_day_excludes_padding() {
        let month = Month::containing(date(2025, 11, 15), RelativeOrder::Current);
        assert!(month.is_own_day(date(2025, 11, 1)));
        assert!(month.is_own_day(date(2025, 11, 30)));
        assert!(!month.is_own_day(date(2025, 10, 31)));
    }

    #[test]
    fn test_identity_ignores_anchor_day_and_order() {
        let a = Month::containing(date(2025, 11, 1), RelativeOrder::Previous);
        let b = Month::containing(date(2025, 11, 30), RelativeOrder::Next);
        assert_eq!(a, b);
        assert_eq!(a.first_of_month(), date(2025, 11, 1));
    }

    #[test]
    fn test_carousel_spans_adjacent_months() {
        let [previous, current, next] = Month::carousel(date(2025, 11, 15));
        assert_eq!(previous.first_of_month(), date(2025, 10, 1));
        assert_eq!(current.first_of_month(), date(2025, 11, 1));
        assert_eq!(next.first_of_month(), date(2025, 12, 1));
        assert_eq!(previous.order(), RelativeOrder::Previous);
        assert_eq!(next.order(), RelativeOrder::Next);
    }

    #[test]
    fn test_carousel_crosses_year_boundary() {
        let [previous, _, next] = Month::carousel(date(2026, 1, 10));
        assert_eq!(previous.first_of_month(), date(2025, 12, 1));
        assert_eq!(next.first_of_month(), date(2026, 2, 1));
    }
}
