//! Forward-only cursor over a borrowed buffer.
//!
//! The cursor never owns its input. Parsers take it by `&mut` and advance it
//! past what they consume. A failed parse marks the cursor as failed while
//! keeping the unconsumed remainder, so the position of the failure stays
//! visible. Once failed, the cursor stops moving.

use std::cmp::Ordering;

use crate::error::{ParseError, ParseErrorKind};
use crate::symbol::Symbol;

/// Compares the first `len` symbols of `a` and `b`.
///
/// A slice shorter than `len` is compared as far as it goes, and orders
/// before a longer one it is a prefix of.
pub fn compare<T: Symbol>(a: &[T], b: &[T], len: usize) -> Ordering {
    a.iter().take(len).cmp(b.iter().take(len))
}

/// Scan position over a buffer of symbols.
///
/// The cursor is [`Copy`], so taking a snapshot before a speculative scan
/// costs nothing.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a, T: Symbol = u8> {
    /// Unconsumed input.
    rest: &'a [T],
    /// Symbols consumed from the front since construction.
    offset: usize,
    failed: bool,
}

impl<'a, T: Symbol> Cursor<'a, T> {
    pub const fn new(buf: &'a [T]) -> Self {
        Self {
            rest: buf,
            offset: 0,
            failed: false,
        }
    }

    /// Number of unconsumed symbols, also when failed.
    #[inline]
    pub const fn len(&self) -> usize {
        self.rest.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        self.failed
    }

    /// True while the cursor is live and has input left.
    #[inline]
    pub const fn has_more(&self) -> bool {
        !self.failed && !self.rest.is_empty()
    }

    /// The unconsumed input.
    #[inline]
    pub const fn remaining(&self) -> &'a [T] {
        self.rest
    }

    /// Symbols consumed from the front so far.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Current symbol, if the cursor is live and not exhausted.
    #[inline]
    pub fn peek(&self) -> Option<T> {
        if self.failed {
            return None;
        }
        self.rest.first().copied()
    }

    /// Moves past one symbol.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        if self.has_more() {
            self.rest = &self.rest[1..];
            self.offset += 1;
        }
        self
    }

    /// Removes `n` symbols from the front, or `-n` from the back when `n` is
    /// negative. `n` is clamped to the remaining length.
    pub fn drop(&mut self, n: isize) -> &mut Self {
        if self.failed {
            return self;
        }
        let len = self.rest.len();
        let k = n.unsigned_abs().min(len);
        if n >= 0 {
            self.rest = &self.rest[k..];
            self.offset += k;
        } else {
            self.rest = &self.rest[..len - k];
        }
        self
    }

    /// Keeps `n` symbols from the front, or the last `-n` when `n` is
    /// negative. `n` is clamped to the remaining length.
    pub fn take(&mut self, n: isize) -> &mut Self {
        if self.failed {
            return self;
        }
        let len = self.rest.len();
        let k = n.unsigned_abs().min(len);
        if n >= 0 {
            self.rest = &self.rest[..k];
        } else {
            self.rest = &self.rest[len - k..];
            self.offset += len - k;
        }
        self
    }

    /// Copy with `n` symbols dropped. See [`Cursor::drop`].
    #[must_use]
    pub fn dropped(mut self, n: isize) -> Self {
        self.drop(n);
        self
    }

    /// Copy with `n` symbols kept. See [`Cursor::take`].
    #[must_use]
    pub fn taken(mut self, n: isize) -> Self {
        self.take(n);
        self
    }

    /// Consumes `c` if it is the current symbol.
    #[inline]
    pub fn eat(&mut self, c: char) -> bool {
        match self.peek() {
            Some(s) if s.is(c) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Consumes the current symbol if it is one of `set`, returning it.
    pub fn eat_any(&mut self, set: &[char]) -> Option<char> {
        let s = self.peek()?;
        let c = set.iter().copied().find(|&c| s.is(c))?;
        self.advance();
        Some(c)
    }

    /// Consumes a maximal run of whitespace.
    pub fn eat_ws(&mut self) -> &mut Self {
        while self.peek().is_some_and(Symbol::is_space) {
            self.advance();
        }
        self
    }

    /// Marks the cursor as failed, keeping the unconsumed remainder.
    #[inline]
    pub fn fail(&mut self) {
        self.failed = true;
    }

    /// Copy of this cursor in the failed state.
    #[must_use]
    pub const fn as_error(self) -> Self {
        Self {
            failed: true,
            ..self
        }
    }

    /// Fails the cursor and returns the matching error.
    pub(crate) fn fail_with(&mut self, kind: ParseErrorKind) -> ParseError {
        self.failed = true;
        tracing::trace!(offset = self.offset, remaining = self.rest.len(), %kind, "scan failed");
        ParseError::new(kind, self.offset)
    }

    /// Errors out if the cursor already failed.
    #[inline]
    pub(crate) fn ensure_live(&self) -> Result<(), ParseError> {
        if self.failed {
            return Err(ParseError::new(ParseErrorKind::Poisoned, self.offset));
        }
        Ok(())
    }
}

impl<'a> From<&'a str> for Cursor<'a, u8> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a, T: Symbol> From<&'a [T]> for Cursor<'a, T> {
    fn from(buf: &'a [T]) -> Self {
        Self::new(buf)
    }
}

impl<T: Symbol> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Symbol> Eq for Cursor<'_, T> {}

impl<T: Symbol> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Symbol> Ord for Cursor<'_, T> {
    /// Failed cursors first, then shorter remainders, then symbol by symbol.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .failed
            .cmp(&self.failed)
            .then_with(|| self.rest.len().cmp(&other.rest.len()))
            .then_with(|| compare(self.rest, other.rest, self.rest.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cur(s: &str) -> Cursor<'_> {
        Cursor::from(s)
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(b"abc", b"abc", 3), Ordering::Equal);
        assert_eq!(compare(b"abc", b"cbd", 3), Ordering::Less);
        assert_eq!(compare(b"bc", b"abc", 2), Ordering::Greater);
        assert_eq!(compare(b"abx", b"aby", 2), Ordering::Equal);
    }

    #[test]
    fn test_compare_short_slices() {
        assert_eq!(compare(b"ab", b"abc", 5), Ordering::Less);
        assert_eq!(compare(b"abc", b"ab", 5), Ordering::Greater);
        assert_eq!(compare(b"ab", b"ab", 10), Ordering::Equal);
        assert_eq!(compare::<u8>(b"", b"", 3), Ordering::Equal);
        assert_eq!(compare(b"ab", b"abc", 2), Ordering::Equal);
    }

    #[test]
    fn test_default_cursor_is_empty() {
        let c = Cursor::<u8>::new(&[]);
        assert!(c.is_empty());
        assert!(!c.has_more());
        assert!(!c.is_error());
        assert_eq!(c.peek(), None);
    }

    #[test]
    fn test_ordering() {
        assert_eq!(cur("abc"), cur("abc"));
        assert!(cur("abc") < cur("bcd"));
        assert!(cur("bcd") > cur("abc"));
        assert!(cur("ab") < cur("abc"));
        assert!(cur("abc") > cur("ab"));
        assert!(cur("abc").as_error() < cur(""));
        assert_ne!(cur("abc").as_error(), cur("abc"));
    }

    #[test]
    fn test_peek_and_advance() {
        let mut c = cur("abc");
        assert_eq!(c.peek(), Some(b'a'));
        c.advance();
        assert_eq!(c.peek(), Some(b'b'));
        assert_eq!(c.offset(), 1);
        c.advance().advance().advance();
        assert!(c.is_empty());
        assert_eq!(c.offset(), 3);
    }

    #[test]
    fn test_drop() {
        assert_eq!(cur("abc").dropped(0), cur("abc"));
        assert_eq!(cur("abc").dropped(1), cur("bc"));
        assert_eq!(cur("abc").dropped(-1), cur("ab"));
        assert_eq!(cur("abc").dropped(4), cur(""));
        assert_eq!(cur("abc").dropped(-4), cur(""));
        assert!(!cur("abc").dropped(3).has_more());
        assert!(!cur("abc").dropped(-10).is_error());
    }

    #[test]
    fn test_take() {
        assert_eq!(cur("abc").taken(3), cur("abc"));
        assert!(!cur("abc").taken(0).has_more());
        assert_eq!(cur("abc").taken(1), cur("a"));
        assert_eq!(cur("abc").taken(2), cur("ab"));
        assert_eq!(cur("abc").taken(-1), cur("c"));
        assert_eq!(cur("abc").taken(-4), cur("abc"));
        assert_eq!(cur("abc").taken(10), cur("abc"));
    }

    #[test]
    fn test_drop_take_track_offset() {
        let c = cur("abcdef").dropped(2);
        assert_eq!(c.offset(), 2);
        let c = c.taken(-1);
        assert_eq!(c.remaining(), b"f");
        assert_eq!(c.offset(), 5);
    }

    #[test]
    fn test_drop_take_on_wide_buffer() {
        let buf: Vec<u16> = "abc".encode_utf16().collect();
        let c = Cursor::new(&buf);
        assert_eq!(c.dropped(1).remaining(), &buf[1..]);
        assert_eq!(c.taken(-1).remaining(), &buf[2..]);
    }

    #[test]
    fn test_eat() {
        let mut c = cur("+1");
        assert!(!c.eat('-'));
        assert!(c.eat('+'));
        assert!(!c.eat('+'));
        assert_eq!(c.peek(), Some(b'1'));
        assert!(c.eat('1'));
        assert!(!c.eat('1'));
    }

    #[test]
    fn test_eat_any() {
        let mut c = cur("/x");
        assert_eq!(c.eat_any(&['-', '/']), Some('/'));
        assert_eq!(c.eat_any(&['-', '/']), None);
        assert_eq!(c.peek(), Some(b'x'));
    }

    #[test]
    fn test_eat_ws() {
        let mut c = cur(" \t\r\n x ");
        c.eat_ws();
        assert_eq!(c.peek(), Some(b'x'));
        c.advance().eat_ws();
        assert!(c.is_empty());
        assert!(!c.is_error());
    }

    #[test]
    fn test_failed_cursor_is_frozen() {
        let mut c = cur("12ab");
        c.advance();
        c.fail();
        assert!(c.is_error());
        assert_eq!(c.len(), 3);
        assert_eq!(c.peek(), None);
        assert!(!c.eat('2'));
        c.advance().drop(1).take(1).eat_ws();
        assert_eq!(c.remaining(), b"2ab");
        assert_eq!(c.offset(), 1);
    }

    #[test]
    fn test_fail_with_reports_offset() {
        let mut c = cur("12:");
        c.advance().advance();
        let err = c.fail_with(ParseErrorKind::Expected("'-'"));
        assert!(c.is_error());
        assert_eq!(err.offset(), 2);
        assert_eq!(err.kind(), ParseErrorKind::Expected("'-'"));
        assert_eq!(
            c.ensure_live().map_err(|e| e.kind()),
            Err(ParseErrorKind::Poisoned)
        );
    }
}
