use std::fmt::Debug;

/// A single element of a scanned buffer.
///
/// Implemented for bytes, UTF-16 code units and `char`, so the same parsers
/// run over narrow and wide text without transcoding.
pub trait Symbol: Copy + Ord + Debug {
    /// Numeric code of the symbol.
    fn code(self) -> u32;

    /// Returns true if the symbol is exactly `c`.
    #[inline]
    fn is(self, c: char) -> bool {
        self.code() == c as u32
    }

    /// Value of an ASCII decimal digit.
    #[inline]
    fn digit(self) -> Option<u32> {
        let d = self.code().wrapping_sub('0' as u32);
        (d < 10).then_some(d)
    }

    /// Space, tab, newline, carriage return, vertical tab or form feed.
    #[inline]
    fn is_space(self) -> bool {
        matches!(self.code(), 0x20 | 0x09..=0x0d)
    }
}

impl Symbol for u8 {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }
}

impl Symbol for u16 {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }
}

impl Symbol for char {
    #[inline]
    fn code(self) -> u32 {
        self as u32
    }
}
