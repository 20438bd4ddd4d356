use crate::consts::{MAX_MONTH, MAX_YEAR};

/// What went wrong while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A required symbol was not found.
    #[error("expected {0}")]
    Expected(&'static str),

    /// The digit run was shorter than the minimum width.
    #[error("expected at least {min} digits, found {found}")]
    TooFewDigits { min: usize, found: usize },

    /// The digit run continued past the maximum width.
    #[error("more than {max} digits")]
    TooManyDigits { max: usize },

    /// The value does not fit the requested integer type.
    #[error("numeric overflow")]
    Overflow,

    /// An introducer (sign, fraction point) with nothing valid after it.
    #[error("{0} must be followed by a digit")]
    Dangling(&'static str),

    /// A well-formed number outside its allowed domain.
    #[error("{what} {value} out of range")]
    OutOfRange { what: &'static str, value: u64 },

    /// Input too short to hold the grammar at all.
    #[error("input shorter than {min} characters")]
    TooShort { min: usize },

    /// The cursor was already in the error state.
    #[error("cursor already failed")]
    Poisoned,
}

/// Error returned by every scanner, with the number of symbols consumed
/// before the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

impl ParseError {
    pub(crate) const fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Symbols consumed before the failure was detected.
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// Calendar validation errors for parsed dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(ParseErrorKind::Expected("':'"), 12);
        assert_eq!(err.to_string(), "expected ':' at offset 12");

        let err = ParseError::new(ParseErrorKind::TooFewDigits { min: 1, found: 0 }, 5);
        assert_eq!(err.to_string(), "expected at least 1 digits, found 0 at offset 5");

        let err = ParseError::new(
            ParseErrorKind::OutOfRange {
                what: "offset",
                value: 10_000,
            },
            24,
        );
        assert_eq!(err.to_string(), "offset 10000 out of range at offset 24");
    }

    #[test]
    fn test_date_error_display() {
        assert_eq!(
            DateError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            DateError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            DateError::InvalidDay {
                month: 2,
                day: 30,
                year: 2023
            }
            .to_string(),
            "Invalid day 30 for month 2023-02"
        );
    }
}
