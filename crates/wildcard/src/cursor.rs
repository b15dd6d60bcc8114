//! Pointer-style formulation of the matcher.
//!
//! Instead of positions, the cursors and the checkpoint are the remaining parts of the
//! pattern and the text, advanced by re-slicing. The results are the same as those of
//! [`index::matches`](crate::index::matches) for every input.

use crate::symbol::Symbol;

/// Tests whether `text` matches `pattern` as a whole.
///
/// See [`index::matches`](crate::index::matches) for the matching rules.
///
/// # Examples
///
/// ```
/// use wildcard::cursor::matches;
///
/// assert!(matches(b"*issip*ss*", b"mississipissippi"));
/// assert!(!matches(b"??", b"a"));
/// ```
pub fn matches<S: Symbol>(pattern: &[S], text: &[S]) -> bool {
    let mut wild = pattern;
    let mut tame = text;

    loop {
        match (wild.split_first(), tame.split_first()) {
            (_, None) => return wild.iter().all(|s| s.is_any_many()),
            (None, Some(_)) => return false,
            (Some((w, _)), Some(_)) if w.is_any_many() => break,
            (Some((&w, wild_rest)), Some((&s, tame_rest))) => {
                if w != s && !w.is_any_one() {
                    return false;
                }
                wild = wild_rest;
                tame = tame_rest;
            }
        }
    }

    let mut checkpoint = (wild, tame);

    loop {
        if wild.first().is_some_and(|s| s.is_any_many()) {
            match anchor(wild, tame) {
                Anchor::Tail => return true,
                Anchor::Lost => return false,
                Anchor::At(w, t) => {
                    wild = w;
                    tame = t;
                    checkpoint = (w, t);
                }
            }
        } else {
            let Some(&s) = tame.first() else {
                return wild.is_empty();
            };

            if !wild.first().is_some_and(|&w| w == s || w.is_any_one()) {
                let (mut cw, mut ct) = checkpoint;
                while let Some((w, rest)) = cw.split_first() {
                    if !w.is_any_one() {
                        break;
                    }
                    cw = rest;
                    ct = ct.get(1..).unwrap_or_default();
                }

                wild = cw;
                let Some(&w) = cw.first() else {
                    return true;
                };

                let rest = ct.get(1..).unwrap_or_default();
                match w.find_in(rest) {
                    Some(offset) => ct = &rest[offset..],
                    None => return false,
                }
                tame = ct;
                checkpoint = (cw, ct);
            }
        }

        wild = wild.get(1..).unwrap_or_default();
        tame = tame.get(1..).unwrap_or_default();
    }
}

// ---

enum Anchor<'a, S> {
    Tail,
    Lost,
    At(&'a [S], &'a [S]),
}

#[inline]
fn anchor<'a, S: Symbol>(mut wild: &'a [S], tame: &'a [S]) -> Anchor<'a, S> {
    while let Some((_, rest)) = wild.split_first().filter(|(s, _)| s.is_any_many()) {
        wild = rest;
    }

    let Some(&next) = wild.first() else {
        return Anchor::Tail;
    };
    if tame.is_empty() {
        return Anchor::Lost;
    }
    if next.is_any_one() {
        return Anchor::At(wild, tame);
    }

    match next.find_in(tame) {
        Some(offset) => Anchor::At(wild, &tame[offset..]),
        None => Anchor::Lost,
    }
}
