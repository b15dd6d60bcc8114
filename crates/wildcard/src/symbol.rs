use memchr::memchr;

/// A unit of comparison for wildcard matching.
///
/// Pattern and text are both sequences of symbols of the same type. Two symbol values are
/// reserved in the pattern as wildcards; in the text they are ordinary symbols.
///
/// Implementations are provided for:
/// - `u8` - raw bytes
/// - `u16` - UTF-16 code units
/// - `char` - Unicode scalar values
/// - `&str` - extended grapheme clusters, see [`matches_graphemes`](crate::matches_graphemes)
pub trait Symbol: Copy + Eq {
    /// Wildcard matching exactly one symbol of the text (`?`).
    const ANY_ONE: Self;

    /// Wildcard matching zero or more symbols of the text (`*`).
    const ANY_MANY: Self;

    #[inline]
    fn is_any_one(self) -> bool {
        self == Self::ANY_ONE
    }

    #[inline]
    fn is_any_many(self) -> bool {
        self == Self::ANY_MANY
    }

    /// Returns the offset of the first occurrence of `self` in `haystack`.
    #[inline]
    fn find_in(self, haystack: &[Self]) -> Option<usize> {
        haystack.iter().position(|&s| s == self)
    }
}

impl Symbol for u8 {
    const ANY_ONE: Self = b'?';
    const ANY_MANY: Self = b'*';

    #[inline]
    fn find_in(self, haystack: &[Self]) -> Option<usize> {
        memchr(self, haystack)
    }
}

impl Symbol for u16 {
    const ANY_ONE: Self = b'?' as u16;
    const ANY_MANY: Self = b'*' as u16;
}

impl Symbol for char {
    const ANY_ONE: Self = '?';
    const ANY_MANY: Self = '*';
}

impl<'a> Symbol for &'a str {
    const ANY_ONE: Self = "?";
    const ANY_MANY: Self = "*";
}
