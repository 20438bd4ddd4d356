//! Zero-copy scanning of integers, floats and loose ISO-8601 date-times.
//!
//! A [`Cursor`] borrows a buffer of bytes, UTF-16 code units or `char`s.
//! The scanners take it by `&mut`, advance it past what they consume and
//! return a `Result`. On failure the cursor is also marked as failed, keeps
//! the unconsumed remainder for diagnostics, and refuses further scanning.
//!
//! ```
//! use textscan::{Cursor, Digits, parse_int};
//!
//! let mut cur = Cursor::from("123c");
//! let n: i32 = parse_int(&mut cur, Digits::ANY).unwrap();
//! assert_eq!(n, 123);
//! assert_eq!(cur.peek(), Some(b'c'));
//! ```
//!
//! Date-times keep timezone offsets unnormalized until asked:
//!
//! ```
//! use textscan::DateTime;
//!
//! let dt: DateTime = "2022-1-1T0:0:0.0-1".parse().unwrap();
//! assert_eq!(dt.hour, -1);
//! let utc = dt.normalized().unwrap();
//! assert_eq!((utc.year, utc.month, utc.day, utc.hour), (2021, 11, 31, 23));
//! ```

mod affinity;
mod calendar;
mod consts;
mod cursor;
mod datetime;
mod error;
mod number;
mod prelude;
mod symbol;
mod types;

pub use affinity::Affinity;
pub use calendar::{from_excel, from_julian_day, to_excel, to_julian_day};
pub use consts::*;
pub use cursor::{Cursor, compare};
pub use datetime::{DateTime, parse_datetime, parse_hms, parse_ymd};
pub use error::{DateError, ParseError, ParseErrorKind};
pub use number::{Digits, parse_double, parse_int, parse_uint};
pub use symbol::Symbol;
pub use types::{Hms, Ymd, days_in_month, is_leap_year};
