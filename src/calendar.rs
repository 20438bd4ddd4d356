//! Conversions between [`DateTime`] records and absolute instants.
//!
//! All arithmetic is proleptic Gregorian in UTC. Records with fields outside
//! their natural ranges (negative hours, 75 minutes, month 12) are rolled
//! over into neighbouring days, months and years.

use crate::consts::{
    EXCEL_UNIX_EPOCH, JULIAN_UNIX_EPOCH, MONTHS_PER_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::datetime::DateTime;

/// Days from 1970-01-01 to the given civil date, `month` in `1..=12`.
const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    // March-based month so the leap day falls at the end of the year
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date `(year, month 1..=12, day)` for days since 1970-01-01.
const fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

impl DateTime {
    /// Seconds since the Unix epoch, treating the record as UTC.
    ///
    /// Out-of-range fields carry into the next larger unit, so hour `-1` on
    /// 2022-01-01 is 23:00 on 2021-12-31.
    pub const fn to_unix(self) -> i64 {
        let months = self.year as i64 * MONTHS_PER_YEAR + self.month as i64;
        let year = months.div_euclid(MONTHS_PER_YEAR);
        let month = months.rem_euclid(MONTHS_PER_YEAR) + 1;
        let days = days_from_civil(year, month, 1) + self.day as i64 - 1;

        days * SECONDS_PER_DAY
            + self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64
    }

    /// The UTC record for `t` seconds since the Unix epoch.
    ///
    /// Returns `None` if the year does not fit in an `i32`.
    pub fn from_unix(t: i64) -> Option<Self> {
        let days = t.div_euclid(SECONDS_PER_DAY);
        let secs = t.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        let narrow = |v: i64| i32::try_from(v).ok();
        Some(Self {
            year: narrow(year)?,
            month: narrow(month - 1)?,
            day: narrow(day)?,
            hour: narrow(secs / SECONDS_PER_HOUR)?,
            minute: narrow(secs % SECONDS_PER_HOUR / SECONDS_PER_MINUTE)?,
            second: narrow(secs % SECONDS_PER_MINUTE)?,
            dst: Some(false),
        })
    }

    /// The same instant with every field back in its natural range.
    pub fn normalized(&self) -> Option<Self> {
        Self::from_unix(self.to_unix())
    }
}

/// Excel serial date for `t` seconds since the Unix epoch.
#[allow(clippy::cast_precision_loss)]
pub fn to_excel(t: i64) -> f64 {
    EXCEL_UNIX_EPOCH + t as f64 / SECONDS_PER_DAY as f64
}

/// Seconds since the Unix epoch for an Excel serial date, truncated toward
/// zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn from_excel(serial: f64) -> i64 {
    ((serial - EXCEL_UNIX_EPOCH) * SECONDS_PER_DAY as f64) as i64
}

/// Julian day number for `t` seconds since the Unix epoch.
#[allow(clippy::cast_precision_loss)]
pub fn to_julian_day(t: i64) -> f64 {
    JULIAN_UNIX_EPOCH + t as f64 / SECONDS_PER_DAY as f64
}

/// Seconds since the Unix epoch for a Julian day number, truncated toward
/// zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn from_julian_day(jd: f64) -> i64 {
    ((jd - JULIAN_UNIX_EPOCH) * SECONDS_PER_DAY as f64) as i64
}
