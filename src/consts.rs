/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1901;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 2999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common (non-leap) year
pub const DAYS_IN_COMMON_YEAR: u32 = 365;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed in a common year before the first of each month
/// (index 0 is unused, months are 1-indexed)
pub const DAYS_BEFORE_MONTH: [u16; 13] = cumulative_days_before_month();

const fn cumulative_days_before_month() -> [u16; 13] {
    let mut table = [0u16; 13];
    let mut month = 2;
    while month <= MAX_MONTH as usize {
        table[month] = table[month - 1] + DAYS_IN_MONTH[month - 1] as u16;
        month += 1;
    }
    table
}

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Format used when the caller does not supply one
pub const DEFAULT_DATE_FORMAT: &str = "DD/MM/YYYY";
/// ISO 8601 calendar date format
pub const ISO_DATE_FORMAT: &str = "YYYY-MM-DD";
