//! Whole-string wildcard matching.
//!
//! Pattern syntax:
//! - `*` - Matches zero or more symbols
//! - `?` - Matches exactly one symbol
//! - Any other symbol matches itself, there is no escaping
//!
//! The pattern always has to account for the entire text, so use a leading or trailing `*` to
//! match a part of it.
//!
//! # Features
//!
//! - **No recursion, no allocation**: a couple of positions and one checkpoint per comparison
//! - **Symbol-generic**: works over bytes, UTF-16 code units, code points or grapheme clusters
//! - **Two formulations**: [`index`] and [`cursor`] give identical results for every input
//!
//! # Examples
//!
//! ```
//! use wildcard::{matches, matches_str};
//!
//! assert!(matches(b"Hi*", b"Hi"));
//! assert!(!matches(b"ab*d", b"abc"));
//!
//! // `*` and `?` in the text are ordinary characters.
//! assert!(matches_str("***a*b*c***", "*abc*"));
//!
//! // `?` never matches nothing.
//! assert!(!matches_str("*?", ""));
//! ```
//!
//! # UTF-8 Handling
//!
//! [`matches_str`] treats each code point as a symbol:
//!
//! ```
//! use wildcard::{matches_bytes, matches_str};
//!
//! assert!(matches_str("???", "🦀🎉🌟"));
//! assert!(!matches_bytes(b"???", "🦀🎉🌟".as_bytes()));
//! ```

pub mod cursor;
pub mod index;
mod symbol;
mod text;

pub use index::matches;
pub use symbol::Symbol;
pub use text::{Unit, matches_bytes, matches_chars, matches_graphemes, matches_str};

#[cfg(test)]
mod tests;
