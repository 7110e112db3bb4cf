use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DEFAULT_DATE_FORMAT, DateError, ISO_DATE_FORMAT, prelude::*};

/// A numeric date component inside a format specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "DD")]
    Day,
    #[display(fmt = "MM")]
    Month,
    #[display(fmt = "YYYY")]
    Year,
}

impl Field {
    const ALL: [Self; 3] = [Self::Year, Self::Month, Self::Day];

    /// Token in the specifier, which is also the digit width of the field.
    const fn token(self) -> &'static str {
        match self {
            Self::Day => "DD",
            Self::Month => "MM",
            Self::Year => "YYYY",
        }
    }

    const fn width(self) -> usize {
        self.token().len()
    }
}

/// Error type for format specifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Field token does not appear in the specifier.
    #[error("date format must contain {0} exactly once, found none")]
    MissingField(Field),

    /// Field token appears more than once.
    #[error("date format must contain {0} exactly once, found it again")]
    DuplicateField(Field),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed date format such as `DD/MM/YYYY` or `YYYY-MM-DD`.
///
/// `DD`, `MM` and `YYYY` each appear exactly once and match exactly two,
/// two and four ASCII digits. Everything else is literal text that must be
/// present verbatim in the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat {
    pattern: String,
    segments: Vec<Segment>,
}

impl DateFormat {
    /// Parses a format specifier.
    ///
    /// # Errors
    /// Returns `FormatError` unless each of `DD`, `MM` and `YYYY` occurs exactly once.
    pub fn new(pattern: &str) -> Result<Self, FormatError> {
        let segments = tokenize(pattern);
        for field in Field::ALL {
            let count = segments
                .iter()
                .filter(|s| **s == Segment::Field(field))
                .count();
            match count {
                0 => return Err(FormatError::MissingField(field)),
                1 => {}
                _ => return Err(FormatError::DuplicateField(field)),
            }
        }
        Ok(Self {
            pattern: pattern.to_owned(),
            segments,
        })
    }

    /// `YYYY-MM-DD`
    pub fn iso() -> Self {
        Self::new(ISO_DATE_FORMAT).unwrap_or_else(|_| unreachable!())
    }

    /// The specifier this format was built from
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Parses `input` into a validated date.
    ///
    /// Surrounding whitespace is ignored. Components are validated year
    /// first, then month, then day.
    ///
    /// # Errors
    /// Returns `FormatMismatch` or `EmptyInput` if the text does not fit this
    /// format, otherwise the validation error from [`CalendarDate::from_ymd`].
    pub fn parse(&self, input: &str) -> Result<CalendarDate, DateError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        let mismatch = || DateError::FormatMismatch {
            input: trimmed.to_owned(),
            format: self.pattern.clone(),
        };

        let (mut year, mut month, mut day) = (0u16, 0u8, 0u8);
        let mut rest = trimmed;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    rest = rest.strip_prefix(text.as_str()).ok_or_else(mismatch)?;
                }
                Segment::Field(field) => {
                    let (value, tail) = take_digits(rest, field.width()).ok_or_else(mismatch)?;
                    rest = tail;
                    // Widths are 2 and 4 digits, so the values always fit
                    match field {
                        Field::Year => year = u16::try_from(value).map_err(|_| mismatch())?,
                        Field::Month => month = u8::try_from(value).map_err(|_| mismatch())?,
                        Field::Day => day = u8::try_from(value).map_err(|_| mismatch())?,
                    }
                }
            }
        }
        if !rest.is_empty() {
            return Err(mismatch());
        }

        CalendarDate::from_ymd(year, month, day)
    }

    /// Formats `date` according to this specifier.
    pub fn format(&self, date: &CalendarDate) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.clone(),
                Segment::Field(Field::Year) => date.year().to_string(),
                Segment::Field(Field::Month) => date.month().to_string(),
                Segment::Field(Field::Day) => date.day().to_string(),
            })
            .collect()
    }
}

/// Splits a specifier into literal runs and field tokens, longest token first.
fn tokenize(pattern: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = pattern;

    'outer: while !rest.is_empty() {
        for field in Field::ALL {
            if let Some(tail) = rest.strip_prefix(field.token()) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(field));
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            literal.push(c);
        }
        rest = chars.as_str();
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Reads exactly `width` ASCII digits from the front of `s`.
fn take_digits(s: &str, width: usize) -> Option<(u32, &str)> {
    let (digits, tail) = s.split_at_checked(width)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = digits
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
    Some((value, tail))
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT).unwrap_or_else(|_| unreachable!())
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl FromStr for DateFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DateFormat {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.pattern
    }
}
