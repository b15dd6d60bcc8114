use rstest::rstest;
use wildmatch::WildMatch;

use super::*;

fn both(pattern: &str, text: &str) -> (bool, bool) {
    (
        index::matches(pattern.as_bytes(), text.as_bytes()),
        cursor::matches(pattern.as_bytes(), text.as_bytes()),
    )
}

/// Brute-force dynamic programming over all pattern/text suffix pairs.
fn reference(pattern: &[u8], text: &[u8]) -> bool {
    let mut m = vec![vec![false; text.len() + 1]; pattern.len() + 1];
    m[pattern.len()][text.len()] = true;
    for i in (0..pattern.len()).rev() {
        for j in (0..=text.len()).rev() {
            let more = j < text.len();
            m[i][j] = match pattern[i] {
                b'*' => m[i + 1][j] || (more && m[i][j + 1]),
                b'?' => more && m[i + 1][j + 1],
                c => more && text[j] == c && m[i + 1][j + 1],
            };
        }
    }
    m[0][0]
}

/// All sequences over `alphabet` with length up to `max`, shortest first.
fn sequences(alphabet: &[u8], max: usize) -> Vec<Vec<u8>> {
    let mut result = vec![Vec::new()];
    let mut last = vec![Vec::new()];
    for _ in 0..max {
        let mut next = Vec::new();
        for prefix in &last {
            for &c in alphabet {
                let mut seq = prefix.clone();
                seq.push(c);
                next.push(seq);
            }
        }
        result.extend(next.iter().cloned());
        last = next;
    }
    result
}

fn collapse_stars(pattern: &[u8]) -> Vec<u8> {
    let mut result: Vec<u8> = Vec::with_capacity(pattern.len());
    for &c in pattern {
        if c != b'*' || result.last() != Some(&b'*') {
            result.push(c);
        }
    }
    result
}

#[rstest]
#[case("Hi", "Hi*", true)]
#[case("abc", "ab*d", false)]
#[case("mississipissippi", "*issip*ss*", true)]
#[case("a", "??", false)]
#[case("caaab", "*a?b", true)]
#[case("*abc*", "***a*b*c***", true)]
#[case("", "?", false)]
#[case("", "*?", false)]
#[case("abcd", "?**?d?", false)]
#[case("abcccd", "*ccd", true)]
#[case("xxxx*zzzzzzzzy*f", "xxxx*zzy*fffff", false)]
#[case("xxxx*zzzzzzzzy*f", "xxx*zzy*f", true)]
#[case("xyxyxyzyxyz", "xy*z*xyz", true)]
#[case("mississippi", "mi*sip*", true)]
#[case("a12b12", "*12*23", false)]
#[case("a*ar", "a*aar", false)]
#[case("miSsissippi", "mi*Sip*", false)]
#[case("abc", "?**?*&?", false)]
#[case("abcd", "?**?c?", true)]
#[case("abcde", "?*b*?*d*?", true)]
#[case("aaabbaabbaab", "*aabbaa*a*", true)]
#[case("aaaaaaaaaaaaaaaa", "*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*", false)]
#[case("abc", "********a********b********c********", true)]
#[case("********a********b********c********", "abc", false)]
fn test_scenarios(#[case] text: &str, #[case] pattern: &str, #[case] expected: bool) {
    assert_eq!(both(pattern, text), (expected, expected));
    assert_eq!(matches_str(pattern, text), expected);
    assert_eq!(WildMatch::new(pattern).matches(text), expected);
}

#[test]
fn test_empty_inputs() {
    assert_eq!(both("", ""), (true, true));
    assert_eq!(both("", "a"), (false, false));
    assert_eq!(both("*", ""), (true, true));
    assert_eq!(both("***", ""), (true, true));
    assert_eq!(both("a", ""), (false, false));
    assert_eq!(both("?", ""), (false, false));
    assert_eq!(both("**?**", ""), (false, false));
}

#[test]
fn test_single_star_matches_anything() {
    for text in ["", "a", "*", "?", "anything at all"] {
        assert_eq!(both("*", text), (true, true), "text {:?}", text);
    }
}

#[test]
fn test_wildcards_in_text_are_literal() {
    assert_eq!(both("?", "*"), (true, true));
    assert_eq!(both("a", "*"), (false, false));
    assert_eq!(both("*", "?*?"), (true, true));
    assert_eq!(both("a*", "a*r"), (true, true));
}

#[test]
fn test_not_commutative() {
    assert_eq!(both("a*", "abc"), (true, true));
    assert_eq!(both("abc", "a*"), (false, false));
}

#[test]
fn test_exhaustive_against_reference() {
    let patterns = sequences(b"ab*?", 5);
    let texts = sequences(b"ab*", 5);
    for pattern in &patterns {
        for text in &texts {
            let expected = reference(pattern, text);
            assert_eq!(
                index::matches(pattern, text),
                expected,
                "index: pattern {:?} text {:?}",
                String::from_utf8_lossy(pattern),
                String::from_utf8_lossy(text),
            );
            assert_eq!(
                cursor::matches(pattern, text),
                expected,
                "cursor: pattern {:?} text {:?}",
                String::from_utf8_lossy(pattern),
                String::from_utf8_lossy(text),
            );
        }
    }
}

#[test]
fn test_literal_patterns_match_only_themselves() {
    let all = sequences(b"ab", 4);
    for pattern in &all {
        for text in &all {
            let expected = pattern == text;
            assert_eq!(index::matches(pattern, text), expected);
            assert_eq!(cursor::matches(pattern, text), expected);
        }
    }
}

#[test]
fn test_star_runs_collapse() {
    let patterns = sequences(b"a*?", 6);
    let texts = sequences(b"ab", 4);
    for pattern in patterns.iter().filter(|p| p.windows(2).any(|w| w == b"**")) {
        let collapsed = collapse_stars(pattern);
        for text in &texts {
            assert_eq!(
                index::matches(pattern, text),
                index::matches(&collapsed, text),
                "pattern {:?} text {:?}",
                String::from_utf8_lossy(pattern),
                String::from_utf8_lossy(text),
            );
        }
    }
}

#[rstest]
#[case("*☂🎉", "🐂🚀♥☂🎉", true)]
#[case("▲◐☂*", "▲◐🐍✗🤣", false)]
#[case("Мне нужно выучить * язык, чтобы лучше оценить *.", "Мне нужно выучить русский язык, чтобы лучше оценить Пушкина.", true)]
#[case("𓋍𓋔?", "𓋍𓋔𓁐", true)]
#[case("𓋍?𓋔𓁐", "𓋍𓋔𓁐", false)]
#[case("?ؿꜪ*ꜿ", "ḪؿꜪἪꜿ", true)]
fn test_formulations_agree_on_code_points(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    assert_eq!(index::matches(&p, &t), expected);
    assert_eq!(cursor::matches(&p, &t), expected);

    let p: Vec<u16> = pattern.encode_utf16().collect();
    let t: Vec<u16> = text.encode_utf16().collect();
    if !pattern.contains('?') {
        assert_eq!(index::matches(&p, &t), expected);
    }
    assert_eq!(index::matches(&p, &t), cursor::matches(&p, &t));
}

#[test]
fn test_long_repetitive_text() {
    let text = "ab".repeat(50_000) + "c";
    let pattern = "*a*b".repeat(200) + "*c";
    assert_eq!(both(&pattern, &text), (true, true));

    let pattern = "*a*b".repeat(200) + "*d";
    assert_eq!(both(&pattern, &text), (false, false));

    let text = "a".repeat(100_000);
    let pattern = "*aaaaaaaaaab";
    assert_eq!(both(pattern, &text), (false, false));

    let pattern = "a*".repeat(1_000);
    assert_eq!(both(&pattern, &text), (true, true));
}

#[test]
fn test_long_literal_sequences() {
    let text = "abc*abcd*abcde*abcdef*abcdefg*abcdefgh*abcdefghi*abcdefghij*abcdefghijk*abcdefghijkl*abcdefghijklm*abcdefghijklmn";
    assert_eq!(both("abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*", text), (true, true));
    assert_eq!(
        both("abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*", text),
        (false, false)
    );
}
