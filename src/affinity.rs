//! Guessing the declared column type of a text value.

use crate::cursor::Cursor;
use crate::datetime::parse_datetime;
use crate::number::{Digits, parse_double, parse_int};
use crate::prelude::*;

/// Runs `scan` and checks that it consumed all of `text`.
fn whole(text: &str, scan: fn(&mut Cursor<'_>) -> bool) -> bool {
    let mut cur = Cursor::from(text);
    scan(&mut cur) && cur.is_empty()
}

/// Storage class a text value would be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Affinity {
    #[display(fmt = "INTEGER")]
    Integer,
    #[display(fmt = "REAL")]
    Real,
    #[display(fmt = "DATETIME")]
    DateTime,
    #[display(fmt = "TEXT")]
    Text,
}

impl Affinity {
    /// Classifies `text`. Dates are tried first, then integers, then floats;
    /// a candidate only counts if it consumes the whole string.
    pub fn detect(text: &str) -> Self {
        if whole(text, |c| parse_datetime(c).is_ok()) {
            Self::DateTime
        } else if whole(text, |c| parse_int::<i64, _>(c, Digits::at_least(1)).is_ok()) {
            Self::Integer
        } else if whole(text, |c| parse_double(c).is_ok()) {
            Self::Real
        } else {
            Self::Text
        }
    }

    /// Type name used in a `CREATE TABLE` column declaration.
    pub const fn decl_type(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::DateTime => "DATETIME",
            Self::Text => "TEXT",
        }
    }
}
