mod consts;
mod format;
mod ordinal;
mod prelude;
mod types;

pub use consts::*;
pub use format::{DateFormat, Field, FormatError};
pub use ordinal::{DayDifference, DayOrdinal, whole_days_between};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A full Gregorian calendar date between 1901-01-01 and 2999-12-31.
///
/// Every component is validated at construction, so a `CalendarDate` always
/// names a real day inside the supported range. Field order gives
/// chronological ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Broad category of a [`DateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateErrorKind {
    /// Year outside `MIN_YEAR..=MAX_YEAR`
    OutOfRange,
    /// Month or day does not exist in the Gregorian calendar
    InvalidDate,
    /// Input does not match the expected format
    FormatMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    OutOfRange(u16),
    #[display(fmt = "invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "{input:?} does not match format {format}")]
    FormatMismatch { input: String, format: String },
    #[display(fmt = "empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl DateError {
    pub const fn kind(&self) -> DateErrorKind {
        match self {
            Self::OutOfRange(_) => DateErrorKind::OutOfRange,
            Self::InvalidMonth(_) | Self::InvalidDay { .. } => DateErrorKind::InvalidDate,
            Self::FormatMismatch { .. } | Self::EmptyInput => DateErrorKind::FormatMismatch,
        }
    }
}

impl CalendarDate {
    /// Creates a date from already validated components
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is past the end of the month
    /// for this particular year.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        // `Day` may have been validated against a different year or month
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw numbers, checking year, then month, then day.
    ///
    /// # Errors
    /// Returns `OutOfRange`, `InvalidMonth` or `InvalidDay` for the first
    /// component that fails.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Earliest supported date, 1901-01-01
    pub fn min() -> Self {
        Self::from_ymd(MIN_YEAR, JANUARY, MIN_DAY).unwrap_or_else(|_| unreachable!())
    }

    /// Latest supported date, 2999-12-31
    pub fn max() -> Self {
        Self::from_ymd(MAX_YEAR, DECEMBER, DAYS_IN_MONTH[DECEMBER as usize])
            .unwrap_or_else(|_| unreachable!())
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// 1-based position of this date within its year (Jan 1 is 1, Dec 31 is 365 or 366)
    pub const fn day_of_year(&self) -> u16 {
        types::day_of_year(self.year, self.month, self.day)
    }

    /// Absolute day number counted from 0001-01-01, which is day 1.
    pub const fn to_ordinal(&self) -> DayOrdinal {
        DayOrdinal::from_date(self)
    }

    /// Converts to (year, month, day) columns
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(year, month, day)
    }
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFormat::iso().parse(s)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Number of whole days between two date strings written in `format`.
///
/// The order of the two dates does not matter.
///
/// # Errors
/// Returns the first `DateError` raised while parsing either string.
pub fn datediff(first: &str, second: &str, format: &DateFormat) -> Result<DayDifference, DateError> {
    let first = format.parse(first)?;
    let second = format.parse(second)?;
    let days = whole_days_between(&first, &second);
    tracing::debug!(%first, %second, %days, "computed whole days between dates");
    Ok(days)
}
