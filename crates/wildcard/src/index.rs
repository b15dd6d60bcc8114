//! Index-based formulation of the matcher.
//!
//! All traversal is expressed in symbol positions, so the same code serves any
//! [`Symbol`] type regardless of how the underlying text is encoded.

use crate::symbol::Symbol;

/// Tests whether `text` matches `pattern` as a whole.
///
/// `?` in the pattern matches exactly one symbol, `*` matches zero or more symbols and any other
/// symbol matches an identical symbol. Wildcard symbols in the text have no special meaning.
///
/// Runs without recursion or allocation, keeping only the current positions and a single
/// checkpoint taken at the most recent `*`.
///
/// # Examples
///
/// ```
/// use wildcard::index::matches;
///
/// assert!(matches(b"*a?b", b"caaab"));
/// assert!(!matches(b"ab*d", b"abc"));
/// assert!(matches(&['*', 'ё'], &['ж', 'ё']));
/// ```
pub fn matches<S: Symbol>(pattern: &[S], text: &[S]) -> bool {
    // Leading part up to the first `*` is compared in lockstep, so one position serves both.
    let mut p = 0;
    loop {
        if p >= text.len() {
            return pattern[p..].iter().all(|s| s.is_any_many());
        }
        let Some(&w) = pattern.get(p) else {
            return false;
        };
        if w.is_any_many() {
            break;
        }
        if w != text[p] && !w.is_any_one() {
            return false;
        }
        p += 1;
    }

    // From here on `p` always points at a `*` first, which replaces the checkpoint below.
    let mut t = p;
    let mut checkpoint = Checkpoint { p, t };

    loop {
        if pattern.get(p).is_some_and(|s| s.is_any_many()) {
            match anchor(pattern, text, p, t) {
                Anchor::Tail => return true,
                Anchor::Lost => return false,
                Anchor::At(ap, at) => {
                    p = ap;
                    t = at;
                    checkpoint = Checkpoint { p, t };
                }
            }
        } else {
            let Some(&s) = text.get(t) else {
                return p >= pattern.len();
            };

            if !pattern.get(p).is_some_and(|&w| w == s || w.is_any_one()) {
                // Single wildcards right at the checkpoint are taken as already consumed.
                while pattern.get(checkpoint.p).is_some_and(|s| s.is_any_one()) {
                    checkpoint.p += 1;
                    checkpoint.t += 1;
                }

                p = checkpoint.p;
                let Some(&w) = pattern.get(p) else {
                    return true;
                };

                let from = checkpoint.t + 1;
                match w.find_in(text.get(from..).unwrap_or_default()) {
                    Some(offset) => checkpoint.t = from + offset,
                    None => return false,
                }
                t = checkpoint.t;
            }
        }

        p += 1;
        t += 1;
    }
}

// ---

#[derive(Clone, Copy, Debug)]
struct Checkpoint {
    p: usize,
    t: usize,
}

enum Anchor {
    /// The run of `*` ends the pattern and absorbs the rest of the text.
    Tail,
    /// Nothing in the rest of the text can start the symbol following the run.
    Lost,
    /// Pattern and text positions where comparison continues.
    At(usize, usize),
}

/// Skips the run of `*` starting at `p` and finds the first text position from `t` on
/// where the next pattern symbol can be placed.
#[inline]
fn anchor<S: Symbol>(pattern: &[S], text: &[S], mut p: usize, t: usize) -> Anchor {
    while pattern.get(p).is_some_and(|s| s.is_any_many()) {
        p += 1;
    }

    let Some(&next) = pattern.get(p) else {
        return Anchor::Tail;
    };
    if t >= text.len() {
        return Anchor::Lost;
    }
    if next.is_any_one() {
        return Anchor::At(p, t);
    }

    match next.find_in(&text[t..]) {
        Some(offset) => Anchor::At(p, t + offset),
        None => Anchor::Lost,
    }
}
