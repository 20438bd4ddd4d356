//! Loose ISO-8601 date-time scanning.
//!
//! Accepted text:
//!
//! ```text
//! Y{1,4} sep M{1,2} sep D{1,2}                    sep is '-' or '/', the same twice
//! [(' ' | 'T') H{1,2}:M{1,2}:S{1,2}
//!     ['.' digit+]
//!     ['Z' | ('+' | '-') (HH | HHMM | HH ':' MM)]]
//! ```
//!
//! Offsets are added to the hour and minute fields without normalization.
//! `-1` applied to midnight yields hour `-1`; [`DateTime::to_unix`] rolls
//! such records over into the previous day.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DATE_SEPARATORS, DATE_TIME_SEPARATORS, FIELD_DIGITS, FRACTION_MARKER, MIN_DATETIME_LEN,
    MINUTES_PER_HOUR, OFFSET_LIMIT, OFFSET_MINUTE_DIGITS, PACKED_OFFSET_THRESHOLD, TIME_SEPARATOR,
    YEAR_DIGITS, ZULU,
};
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::number::{Digits, parse_uint};
use crate::prelude::*;
use crate::symbol::Symbol;
use crate::types::{Hms, Ymd};

/// Broken-down calendar time.
///
/// `month` is zero-based. After a timezone offset is applied `hour` and
/// `minute` may lie outside `0..24` and `0..60`; that state is expected and
/// resolved by [`DateTime::to_unix`] or [`DateTime::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[display(
    fmt = "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
    year,
    "month + 1",
    day,
    hour,
    minute,
    second
)]
pub struct DateTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    /// Daylight saving flag; `None` when unknown, which is always the case
    /// for parsed records.
    pub dst: Option<bool>,
}

impl DateTime {
    /// Midnight on the given date, `month` zero-based.
    pub const fn from_date(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            dst: None,
        }
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cur = Cursor::from(s.trim());
        let dt = parse_datetime(&mut cur)?;
        if !cur.is_empty() {
            return Err(cur.fail_with(ParseErrorKind::Expected("end of input")));
        }
        Ok(dt)
    }
}

/// Scans a calendar field into its storage type.
fn field<N, T>(cur: &mut Cursor<'_, T>, digits: Digits) -> Result<N, ParseError>
where
    N: TryFrom<u64>,
    T: Symbol,
{
    let value = parse_uint(cur, digits)?;
    N::try_from(value).map_err(|_| cur.fail_with(ParseErrorKind::Overflow))
}

/// Requires `c` as the next symbol.
fn expect<T: Symbol>(cur: &mut Cursor<'_, T>, c: char, what: &'static str) -> Result<(), ParseError> {
    if cur.eat(c) {
        Ok(())
    } else {
        Err(cur.fail_with(ParseErrorKind::Expected(what)))
    }
}

/// Scans `yyyy-mm-dd` or `yyyy/mm/dd`.
///
/// The year takes one to four digits, month and day one or two. Whichever
/// separator follows the year must also follow the month.
///
/// # Errors
/// Any missing separator or malformed digit run fails the whole triple.
pub fn parse_ymd<T: Symbol>(cur: &mut Cursor<'_, T>) -> Result<Ymd, ParseError> {
    let year = field(cur, YEAR_DIGITS)?;
    let sep = cur
        .eat_any(&DATE_SEPARATORS)
        .ok_or_else(|| cur.fail_with(ParseErrorKind::Expected("'-' or '/'")))?;
    let month = field(cur, FIELD_DIGITS)?;
    expect(cur, sep, "matching date separator")?;
    let day = field(cur, FIELD_DIGITS)?;

    Ok(Ymd { year, month, day })
}

/// Scans `hh:mm:ss`, each field one or two digits.
///
/// # Errors
/// Any missing `:` or malformed digit run fails the whole triple.
pub fn parse_hms<T: Symbol>(cur: &mut Cursor<'_, T>) -> Result<Hms, ParseError> {
    let hour = field(cur, FIELD_DIGITS)?;
    expect(cur, TIME_SEPARATOR, "':'")?;
    let minute = field(cur, FIELD_DIGITS)?;
    expect(cur, TIME_SEPARATOR, "':'")?;
    let second = field(cur, FIELD_DIGITS)?;

    Ok(Hms {
        hour,
        minute,
        second,
    })
}

/// Skips `'.' digit+`. The fraction is not kept.
fn skip_fraction<T: Symbol>(cur: &mut Cursor<'_, T>) -> Result<(), ParseError> {
    if !cur.eat(FRACTION_MARKER) {
        return Ok(());
    }
    if cur.peek().and_then(Symbol::digit).is_none() {
        return Err(cur.fail_with(ParseErrorKind::Dangling("fractional seconds marker")));
    }
    while cur.peek().and_then(Symbol::digit).is_some() {
        cur.advance();
    }
    Ok(())
}

/// Scans `(+|-)(HH | HHMM | HH:MM)` and adds it to `dt`.
fn apply_offset<T: Symbol>(cur: &mut Cursor<'_, T>, dt: &mut DateTime) -> Result<(), ParseError> {
    let sign = if cur.eat('-') {
        -1
    } else if cur.eat('+') {
        1
    } else {
        return Err(cur.fail_with(ParseErrorKind::Expected("'Z', '+' or '-'")));
    };

    let tz = parse_uint(cur, Digits::at_least(1))?;
    if tz >= OFFSET_LIMIT {
        return Err(cur.fail_with(ParseErrorKind::OutOfRange {
            what: "timezone offset",
            value: tz,
        }));
    }
    // Bounded by OFFSET_LIMIT above
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let signed = sign * tz as i32;

    if tz < PACKED_OFFSET_THRESHOLD {
        dt.hour += signed;
        if cur.eat(TIME_SEPARATOR) {
            let minutes = parse_uint(cur, OFFSET_MINUTE_DIGITS)?;
            if minutes >= MINUTES_PER_HOUR {
                return Err(cur.fail_with(ParseErrorKind::OutOfRange {
                    what: "timezone minutes",
                    value: minutes,
                }));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let minutes = minutes as i32;
            dt.minute += sign * minutes;
        }
    } else {
        dt.minute += signed % 100;
        dt.hour += signed / 100;
    }
    Ok(())
}

/// Scans a full date-time into a [`DateTime`].
///
/// Each step either succeeds or fails the whole parse; nothing is retried.
/// Scanning stops after the last symbol of the grammar. Anything after a
/// `Z` or a numeric offset stays on the cursor for the caller.
///
/// # Errors
/// Fails on input shorter than eight symbols and on any text outside the
/// grammar in the module docs. Offset magnitudes of `10000` or more and
/// offset minutes of `60` or more are rejected.
pub fn parse_datetime<T: Symbol>(cur: &mut Cursor<'_, T>) -> Result<DateTime, ParseError> {
    cur.ensure_live()?;
    if cur.len() < MIN_DATETIME_LEN {
        return Err(cur.fail_with(ParseErrorKind::TooShort {
            min: MIN_DATETIME_LEN,
        }));
    }

    let ymd = parse_ymd(cur)?;
    let mut dt = DateTime::from_date(
        i32::from(ymd.year),
        i32::from(ymd.month) - 1,
        i32::from(ymd.day),
    );
    if cur.is_empty() {
        tracing::trace!(%dt, "parsed date");
        return Ok(dt);
    }

    if cur.eat_any(&DATE_TIME_SEPARATORS).is_none() {
        return Err(cur.fail_with(ParseErrorKind::Expected("' ' or 'T'")));
    }

    let hms = parse_hms(cur)?;
    dt.hour = i32::from(hms.hour);
    dt.minute = i32::from(hms.minute);
    dt.second = i32::from(hms.second);

    skip_fraction(cur)?;
    if cur.eat(ZULU) || cur.is_empty() {
        tracing::trace!(%dt, "parsed date-time");
        return Ok(dt);
    }

    apply_offset(cur, &mut dt)?;
    tracing::trace!(%dt, "parsed date-time");
    Ok(dt)
}
