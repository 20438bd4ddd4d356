//! Integer and floating-point scanners.
//!
//! Digit runs end at the first non-digit. The symbol that ended the run is
//! left in place so callers can keep scanning a larger grammar after the
//! number.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::symbol::Symbol;

/// Inclusive bounds on the length of a digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digits {
    min: usize,
    max: usize,
}

impl Digits {
    /// Any number of digits, including none.
    pub const ANY: Self = Self::new(0, usize::MAX);

    pub const fn new(min: usize, max: usize) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    pub const fn exactly(n: usize) -> Self {
        Self::new(n, n)
    }

    pub const fn at_least(min: usize) -> Self {
        Self::new(min, usize::MAX)
    }

    pub const fn at_most(max: usize) -> Self {
        Self::new(0, max)
    }

    #[inline]
    pub const fn min(self) -> usize {
        self.min
    }

    #[inline]
    pub const fn max(self) -> usize {
        self.max
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self::ANY
    }
}

/// Scans an unsigned digit run of `digits` width.
///
/// # Errors
/// Fails on fewer than `digits.min()` digits, on a run longer than
/// `digits.max()`, or when the value does not fit in a `u64`.
pub fn parse_uint<T: Symbol>(cur: &mut Cursor<'_, T>, digits: Digits) -> Result<u64, ParseError> {
    cur.ensure_live()?;

    let mut value: u64 = 0;
    let mut found = 0;
    while let Some(d) = cur.peek().and_then(Symbol::digit) {
        if found == digits.max {
            return Err(cur.fail_with(ParseErrorKind::TooManyDigits { max: digits.max }));
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(d)))
            .ok_or_else(|| cur.fail_with(ParseErrorKind::Overflow))?;
        cur.advance();
        found += 1;
    }

    if found < digits.min {
        return Err(cur.fail_with(ParseErrorKind::TooFewDigits {
            min: digits.min,
            found,
        }));
    }

    Ok(value)
}

/// Consumes an optional `+` or `-`, returning true for `-`.
fn eat_sign<T: Symbol>(cur: &mut Cursor<'_, T>) -> bool {
    if cur.eat('-') {
        return true;
    }
    cur.eat('+');
    false
}

/// Returns true if a sign is next.
fn at_sign<T: Symbol>(cur: &Cursor<'_, T>) -> bool {
    cur.peek().is_some_and(|s| s.is('+') || s.is('-'))
}

/// Scans `[+|-] digit{min,max}` into any integer type.
///
/// The magnitude is accumulated first and the sign applied last, so `-0`
/// and `+0` are plain zero and `N::MIN` is reachable. A sign with no digits
/// after it is an error whatever `digits.min()` is.
///
/// # Errors
/// See [`parse_uint`]; additionally fails with `Overflow` when the signed
/// value does not fit in `N`.
pub fn parse_int<N, T>(cur: &mut Cursor<'_, T>, digits: Digits) -> Result<N, ParseError>
where
    N: TryFrom<i128>,
    T: Symbol,
{
    cur.ensure_live()?;

    let signed = at_sign(cur);
    let negative = eat_sign(cur);
    let start = cur.offset();
    let magnitude = parse_uint(cur, digits)?;
    if signed && cur.offset() == start {
        return Err(cur.fail_with(ParseErrorKind::Dangling("sign")));
    }

    let value = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    N::try_from(value).map_err(|_| cur.fail_with(ParseErrorKind::Overflow))
}

/// Scans `[+|-] digit+ ['.' digit*] [('e'|'E') [+|-] digit+]`.
///
/// The fraction is summed digit by digit with decreasing weights, so long
/// fractions never overflow.
///
/// # Errors
/// Fails when the integer part or the exponent has no digits or overflows.
pub fn parse_double<T: Symbol>(cur: &mut Cursor<'_, T>) -> Result<f64, ParseError> {
    cur.ensure_live()?;

    let negative = eat_sign(cur);
    #[allow(clippy::cast_precision_loss)]
    let mut value = parse_uint(cur, Digits::at_least(1))? as f64;

    if cur.eat('.') {
        let mut weight = 0.1;
        while let Some(d) = cur.peek().and_then(Symbol::digit) {
            value += f64::from(d) * weight;
            weight /= 10.0;
            cur.advance();
        }
    }

    if cur.eat('e') || cur.eat('E') {
        let exp: i32 = parse_int(cur, Digits::at_least(1))?;
        value *= 10f64.powi(exp);
    }

    Ok(if negative { -value } else { value })
}
