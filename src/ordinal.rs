//! Constant-time conversion of calendar dates to absolute day numbers.

use serde::Serialize;

use crate::{CalendarDate, prelude::*};

/// Days since the epoch, where 0001-01-01 is day 1.
///
/// Only produced from a [`CalendarDate`], so it always falls between the
/// ordinals of 1901-01-01 and 2999-12-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize)]
#[serde(into = "u32")]
pub struct DayOrdinal(u32);

/// Count of whole days strictly between two dates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, From, Into, Serialize,
)]
#[serde(into = "u32")]
pub struct DayDifference(u32);

impl DayOrdinal {
    pub(crate) const fn from_date(date: &CalendarDate) -> Self {
        Self(date.year().days_before() + date.day_of_year() as u32)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whole days elapsed between this ordinal and `other`, in either direction.
    ///
    /// The boundary days are partially elapsed and are not counted, so
    /// adjacent days give 0. Identical days also give 0.
    pub const fn whole_days_until(self, other: Self) -> DayDifference {
        let raw = self.0.abs_diff(other.0);
        DayDifference(raw.saturating_sub(1))
    }
}

impl DayDifference {
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Number of whole days between two dates. Symmetric in its arguments.
pub fn whole_days_between(a: &CalendarDate, b: &CalendarDate) -> DayDifference {
    let (from, to) = (a.to_ordinal(), b.to_ordinal());
    tracing::trace!(%a, %from, %b, %to, "converted dates to ordinals");
    from.whole_days_until(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    fn between(a: (u16, u8, u8), b: (u16, u8, u8)) -> u32 {
        whole_days_between(&date(a.0, a.1, a.2), &date(b.0, b.1, b.2)).get()
    }

    #[test]
    fn test_ordinal_anchors() {
        assert_eq!(date(1901, 1, 1).to_ordinal().get(), 693_961);
        assert_eq!(date(1904, 2, 29).to_ordinal().get(), 695_115);
        assert_eq!(date(2000, 12, 31).to_ordinal().get(), 730_485);
        assert_eq!(date(2020, 3, 1).to_ordinal().get(), 737_485);
        assert_eq!(date(2999, 12, 31).to_ordinal().get(), 1_095_362);
    }

    #[test]
    fn test_ordinal_crosses_year_boundary_by_one() {
        let cases = [(1999, 2000), (2000, 2001), (2099, 2100), (2100, 2101)];
        for (year, next) in cases {
            let last = date(year, 12, 31).to_ordinal().get();
            let first = date(next, 1, 1).to_ordinal().get();
            assert_eq!(first - last, 1, "{year} -> {next}");
        }
    }

    #[test]
    fn test_whole_days_until_rule() {
        let a = DayOrdinal(10);
        assert_eq!(a.whole_days_until(DayOrdinal(10)).get(), 0);
        assert_eq!(a.whole_days_until(DayOrdinal(11)).get(), 0);
        assert_eq!(a.whole_days_until(DayOrdinal(9)).get(), 0);
        assert_eq!(a.whole_days_until(DayOrdinal(12)).get(), 1);
        assert_eq!(DayOrdinal(12).whole_days_until(a).get(), 1);
    }

    #[test]
    fn test_same_and_adjacent() {
        assert_eq!(between((2000, 1, 1), (2000, 1, 1)), 0);
        assert_eq!(between((2000, 1, 1), (2000, 1, 2)), 0);
        assert_eq!(between((1999, 12, 31), (2000, 1, 1)), 0);
        assert_eq!(between((2000, 1, 1), (2000, 1, 3)), 1);
    }

    #[test]
    fn test_leap_day_counted_once() {
        assert_eq!(between((2020, 2, 28), (2020, 3, 1)), 1);
        assert_eq!(between((2019, 2, 28), (2019, 3, 1)), 0);
        assert_eq!(between((2100, 2, 28), (2100, 3, 1)), 0);
        assert_eq!(between((2000, 2, 28), (2000, 3, 1)), 1);
    }

    #[test]
    fn test_across_years() {
        assert_eq!(between((1901, 1, 1), (1902, 1, 1)), 364);
        assert_eq!(between((1996, 1, 1), (1997, 1, 1)), 365);
        assert_eq!(between((2100, 1, 1), (2100, 12, 31)), 363);
        assert_eq!(between((2097, 1, 1), (2103, 12, 31)), 2553);
    }

    #[test]
    fn test_difference_conversions() {
        let diff = DayDifference::from(42);
        assert_eq!(*diff, 42);
        assert_eq!(u32::from(diff), 42);
        assert_eq!(diff.to_string(), "42");
        assert_eq!(DayDifference::default().get(), 0);
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&DayDifference(7)).unwrap(), "7");
        let ordinal = date(1901, 1, 1).to_ordinal();
        assert_eq!(serde_json::to_string(&ordinal).unwrap(), "693961");
    }
}
