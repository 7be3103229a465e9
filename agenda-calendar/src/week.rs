//! Week value type for the calendar grid.
//!
//! ## Usage
//!
//! A [`Week`] is seven contiguous Monday-first days. Its identity is the
//! starting Monday: any two weeks built from dates in the same ISO week
//! compare equal, regardless of their [`RelativeOrder`] tag.

use chrono::{Datelike, NaiveDate};

use crate::date_grid;

/// Position of a week or month relative to the focused one.
///
/// Used only to pick emphasis (opacity) in a paged carousel, never for
/// identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RelativeOrder {
    /// The page before the focused one.
    Previous,
    /// The focused page.
    #[default]
    Current,
    /// The page after the focused one.
    Next,
}

/// Seven contiguous Monday-first days.
#[derive(Clone, Debug)]
pub struct Week {
    days: [NaiveDate; 7],
    order: RelativeOrder,
}

impl Week {
    /// Builds the week containing `date`.
    ///
    /// The date is normalized to its ISO-week Monday first, so any date in
    /// the same week yields an equal `Week`.
    pub fn containing(date: NaiveDate, order: RelativeOrder) -> Self {
        let monday = date_grid::nearest_monday(date);
        Self {
            days: date_grid::week_containing(monday),
            order,
        }
    }

    /// Builds a week directly from a row of seven grid days.
    pub(crate) fn from_row(days: [NaiveDate; 7], order: RelativeOrder) -> Self {
        debug_assert_eq!(days[0].weekday().num_days_from_monday(), 0);
        Self { days, order }
    }

    /// The starting Monday, which is the week's identity.
    pub fn id(&self) -> NaiveDate {
        self.days[0]
    }

    /// The seven days, Monday first.
    pub fn days(&self) -> &[NaiveDate; 7] {
        &self.days
    }

    /// The relative order tag.
    pub fn order(&self) -> RelativeOrder {
        self.order
    }

    /// Returns whether `date` falls within this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days[0] <= date && date <= self.days[6]
    }

    /// Returns this week shifted by a whole number of weeks.
    ///
    /// The shifted week keeps this week's order tag.
    pub fn shifted(&self, weeks: i64) -> Self {
        let monday = self.days[0] + chrono::Duration::days(weeks * 7);
        Self {
            days: date_grid::week_containing(monday),
            order: self.order,
        }
    }

    /// Builds the previous/current/next week carousel around `date`.
    pub fn carousel(date: NaiveDate) -> [Self; 3] {
        let current = Self::containing(date, RelativeOrder::Current);
        let mut previous = current.shifted(-1);
        previous.order = RelativeOrder::Previous;
        let mut next = current.shifted(1);
        next.order = RelativeOrder::Next;
        [previous, current, next]
    }
}

// Identity is the starting Monday; the order tag is presentation context.
impl PartialEq for Week {
    fn eq(&self, other: &Self) -> bool {
        self.days[0] == other.days[0]
    }
}

impl Eq for Week {}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_construction_is_idempotent_within_a_week() {
        let a = Week::containing(date(2025, 10, 20), RelativeOrder::Current);
        for offset in 0..7u64 {
            let day = date(2025, 10, 20)
                .checked_add_days(Days::new(offset))
                .unwrap();
            let b = Week::containing(day, RelativeOrder::Next);
            assert_eq!(a, b);
            assert_eq!(a.id(), b.id());
            assert_eq!(a.days(), b.days());
        }
    }

    #[test]
    fn test_equality_ignores_order_tag() {
        let a = Week::containing(date(2025, 10, 22), RelativeOrder::Previous);
        let b = Week::containing(date(2025, 10, 22), RelativeOrder::Next);
        assert_eq!(a, b);
    }

    #[test]
    fn test_contains() {
        let week = Week::containing(date(2025, 10, 20), RelativeOrder::Current);
        assert!(week.contains(date(2025, 10, 20)));
        assert!(week.contains(date(2025, 10, 26)));
        assert!(!week.contains(date(2025, 10, 27)));
        assert!(!week.contains(date(2025, 10, 19)));
    }

    #[test]
    fn test_shifted_crosses_month_boundaries() {
        let week = Week::containing(date(2025, 10, 29), RelativeOrder::Current);
        assert_eq!(week.shifted(1).id(), date(2025, 11, 3));
        assert_eq!(week.shifted(-1).id(), date(2025, 10, 20));
    }

    #[test]
    fn test_carousel_orders_and_spacing() {
        let [previous, current, next] = Week::carousel(date(2025, 10, 24));
        assert_eq!(previous.order(), RelativeOrder::Previous);
        assert_eq!(current.order(), RelativeOrder::Current);
        assert_eq!(next.order(), RelativeOrder::Next);
        assert_eq!(previous.id(), date(2025, 10, 13));
        assert_eq!(current.id(), date(2025, 10, 20));
        assert_eq!(next.id(), date(2025, 10, 27));
    }
}
