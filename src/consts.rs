use crate::number::Digits;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separators; whichever appears first must appear again
pub const DATE_SEPARATORS: [char; 2] = ['-', '/'];
/// Separators accepted between the date and the time
pub const DATE_TIME_SEPARATORS: [char; 2] = [' ', 'T'];
/// Time component separator, also used between offset hours and minutes
pub const TIME_SEPARATOR: char = ':';
/// Introduces fractional seconds
pub const FRACTION_MARKER: char = '.';
/// UTC designator
pub const ZULU: char = 'Z';

/// Year width in a date
pub const YEAR_DIGITS: Digits = Digits::new(1, 4);
/// Width of month, day, hour, minute and second fields
pub const FIELD_DIGITS: Digits = Digits::new(1, 2);
/// Width of the minutes after `HH:` in an offset
pub const OFFSET_MINUTE_DIGITS: Digits = Digits::new(0, 2);

/// Shortest text that can hold a date: `dddd-d-d`
pub const MIN_DATETIME_LEN: usize = 8;
/// Offsets at or above this are rejected (only `HHMM` is packed)
pub const OFFSET_LIMIT: u64 = 10_000;
/// Offsets at or above this are packed `HHMM`, below it hours only
pub const PACKED_OFFSET_THRESHOLD: u64 = 100;
/// Offset minutes must be below this
pub const MINUTES_PER_HOUR: u64 = 60;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const MONTHS_PER_YEAR: i64 = 12;

/// Excel serial date of 1970-01-01
pub const EXCEL_UNIX_EPOCH: f64 = 25_569.0;
/// Julian day number of 1970-01-01T00:00:00Z
pub const JULIAN_UNIX_EPOCH: f64 = 2_440_587.5;
