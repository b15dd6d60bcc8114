// third-party imports
use unicode_segmentation::UnicodeSegmentation;

// local imports
use crate::index::matches;

// ---

/// Tests whether `text` matches `pattern`, treating each byte as a symbol.
///
/// With UTF-8 input, `?` consumes a single byte, so prefer [`matches_str`] unless
/// byte semantics are intended.
#[inline]
pub fn matches_bytes(pattern: &[u8], text: &[u8]) -> bool {
    matches(pattern, text)
}

/// Tests whether `text` matches `pattern`, treating each Unicode scalar value as a symbol.
///
/// Works on bytes directly whenever that gives the same answer, which is when the pattern has no
/// `?` or the text is pure ASCII. Multi-byte UTF-8 sequences never contain ASCII bytes and always
/// start with a lead byte, so literals can only line up on character boundaries.
///
/// # Examples
///
/// ```
/// use wildcard::matches_str;
///
/// assert!(matches_str("*☂🎉", "🐂🚀♥☂🎉"));
/// assert!(matches_str("??", "🦀🎉"));
/// assert!(!matches_str("???", "🦀🎉"));
/// ```
pub fn matches_str(pattern: &str, text: &str) -> bool {
    if text.is_ascii() || !pattern.as_bytes().contains(&b'?') {
        matches(pattern.as_bytes(), text.as_bytes())
    } else {
        matches_chars(pattern, text)
    }
}

/// Tests whether `text` matches `pattern`, treating each Unicode scalar value as a symbol.
///
/// Always decodes both strings into code point buffers first.
pub fn matches_chars(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    matches(&pattern, &text)
}

/// Tests whether `text` matches `pattern`, treating each extended grapheme cluster as a symbol.
///
/// A wildcard is recognized only when it forms a cluster on its own, so `?` followed by
/// a combining mark is a literal.
///
/// # Examples
///
/// ```
/// use wildcard::{matches_chars, matches_graphemes};
///
/// // "e" followed by U+0301 COMBINING ACUTE ACCENT is two code points but one grapheme.
/// assert!(matches_graphemes("caf?", "cafe\u{301}"));
/// assert!(!matches_chars("caf?", "cafe\u{301}"));
/// ```
pub fn matches_graphemes(pattern: &str, text: &str) -> bool {
    let pattern: Vec<&str> = pattern.graphemes(true).collect();
    let text: Vec<&str> = text.graphemes(true).collect();
    matches(&pattern, &text)
}

// ---

/// Granularity at which strings are split into symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    Byte,
    #[default]
    Char,
    Grapheme,
}

impl Unit {
    /// Tests whether `text` matches `pattern` using this unit as the symbol.
    #[inline]
    pub fn matches(self, pattern: &str, text: &str) -> bool {
        match self {
            Self::Byte => matches_bytes(pattern.as_bytes(), text.as_bytes()),
            Self::Char => matches_str(pattern, text),
            Self::Grapheme => matches_graphemes(pattern, text),
        }
    }
}
