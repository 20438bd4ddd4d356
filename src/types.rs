use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use crate::error::DateError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Year, month and day exactly as scanned, 1-based month.
///
/// The fields are not checked against the calendar; see [`Ymd::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct Ymd {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Ymd {
    /// Checks that the triple names a real Gregorian date. The scanners
    /// accept any one-to-four digit year and one-or-two digit month and day,
    /// so `2023-02-30` scans fine and is only caught here.
    ///
    /// # Errors
    /// Returns the first component that is out of range.
    pub const fn validate(&self) -> Result<(), DateError> {
        if self.year == 0 || self.year > MAX_YEAR {
            return Err(DateError::InvalidYear(self.year));
        }
        if self.month == 0 || self.month > MAX_MONTH {
            return Err(DateError::InvalidMonth(self.month));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(DateError::InvalidDay {
                month: self.month,
                day: self.day,
                year: self.year,
            });
        }
        Ok(())
    }
}

/// Hour, minute and second exactly as scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct Hms {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::datetime::parse_ymd;

    #[test]
    fn test_ymd_validate() {
        for (year, month, day) in [(2024, 2, 29), (1, 1, 1), (9999, 12, 31), (2023, 4, 30)] {
            let ymd = Ymd { year, month, day };
            assert_eq!(ymd.validate(), Ok(()), "{ymd}");
        }
    }

    #[test]
    fn test_validate_scanned_dates() {
        let cases = [
            ("2024/2/29", Ok(())),
            ("2023-02-29", Err(DateError::InvalidDay { month: 2, day: 29, year: 2023 })),
            ("2023-4-31", Err(DateError::InvalidDay { month: 4, day: 31, year: 2023 })),
            ("2023-13-01", Err(DateError::InvalidMonth(13))),
            ("0-1-1", Err(DateError::InvalidYear(0))),
        ];
        for (text, expected) in cases {
            let mut cur = Cursor::from(text);
            let ymd = parse_ymd(&mut cur).unwrap();
            assert_eq!(ymd.validate(), expected, "{text}");
        }
    }

    #[test]
    fn test_ymd_validate_rejects() {
        let cases = [
            (Ymd { year: 0, month: 1, day: 1 }, DateError::InvalidYear(0)),
            (Ymd { year: 2023, month: 0, day: 1 }, DateError::InvalidMonth(0)),
            (Ymd { year: 2023, month: 13, day: 1 }, DateError::InvalidMonth(13)),
            (
                Ymd { year: 2023, month: 2, day: 29 },
                DateError::InvalidDay { month: 2, day: 29, year: 2023 },
            ),
            (
                Ymd { year: 2023, month: 4, day: 0 },
                DateError::InvalidDay { month: 4, day: 0, year: 2023 },
            ),
        ];
        for (ymd, expected) in cases {
            assert_eq!(ymd.validate(), Err(expected), "{ymd}");
        }
    }

    #[test]
    fn test_ymd_hms_display() {
        let ymd = Ymd {
            year: 22,
            month: 1,
            day: 2,
        };
        assert_eq!(ymd.to_string(), "0022-01-02");
        let hms = Hms {
            hour: 3,
            minute: 4,
            second: 5,
        };
        assert_eq!(hms.to_string(), "03:04:05");
    }

    #[test]
    fn test_ymd_serde() {
        let ymd = Ymd {
            year: 2022,
            month: 1,
            day: 2,
        };
        let json = serde_json::to_string(&ymd).unwrap();
        assert_eq!(json, r#"{"year":2022,"month":1,"day":2}"#);
        let parsed: Ymd = serde_json::from_str(&json).unwrap();
        assert_eq!(ymd, parsed);
    }

    #[test]
    fn test_is_leap_year_cases() {
        for (year, is_leap) in [
            (2020, true),
            (2024, true),
            (2021, false),
            (1900, false),
            (2100, false),
            (2000, true),
            (2400, true),
        ] {
            assert_eq!(is_leap_year(year), is_leap, "Year {year}");
        }
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
    }
}
