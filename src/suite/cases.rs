// local imports
use super::{Case, case};

// ---

/// Patterns without `*`, including `?`-only ones.
pub(super) const TAME: &[Case] = &[
    case("abc", "abd", false),
    case("abcccd", "abcccd", true),
    case("mississipissippi", "mississipissippi", true),
    case("xxxxzzzzzzzzyf", "xxxxzzzzzzzzyfffff", false),
    case("xxxxzzzzzzzzyf", "xxxxzzzzzzzzyf", true),
    case("xxxxzzzzzzzzyf", "xxxxzzy.fffff", false),
    case("xyxyxyzyxyz", "xyxyxyzyxyz", true),
    case("mississippi", "mississippi", true),
    case("xyxyxyxyz", "xyxyxyxyz", true),
    case("m ississippi", "m ississippi", true),
    case("ababac", "ababac?", false),
    case("dababac", "ababac", false),
    case("aaazz", "aaazz", true),
    case("a12b12", "1212", false),
    case("a12b12", "a12b", false),
    case("a12b12", "a12b12", true),
    case("n", "n", true),
    case("aabab", "aabab", true),
    case("ar", "ar", true),
    case("aar", "aaar", false),
    case("XYXYXYZYXYz", "XYXYXYZYXYz", true),
    case("missisSIPpi", "missisSIPpi", true),
    case("mississipPI", "mississipPI", true),
    case("miSsissippi", "miSsissippi", true),
    case("miSsissippi", "miSsisSippi", false),
    case("abAbac", "abAbac", true),
    case("aAazz", "aAazz", true),
    case("A12b12", "A12b123", false),
    case("a12B12", "a12B12", true),
    case("oWn", "oWn", true),
    case("bLah", "bLah", true),
    case("bLah", "bLaH", false),
    case("a", "a", true),
    case("ab", "a?", true),
    case("abc", "ab?", true),
    case("a", "??", false),
    case("ab", "??", true),
    case("abc", "???", true),
    case("abcd", "????", true),
    case("abc", "????", false),
    case("abcd", "?b??", true),
    case("abcd", "?a??", false),
    case("abcd", "??c?", true),
    case("abcd", "??d?", false),
    case(
        concat!(
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab",
        ),
        concat!(
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab",
        ),
        true,
    ),
    case(
        concat!(
            "abababababababababababababababababababaacacacacaca",
            "cacadaeafagahaiajakalaaaaaaaaaaaaaaaaaffafagaaggga",
            "gaaaaaaaab",
        ),
        concat!(
            "abababababababababababababababababababaacacacacaca",
            "cacadaeafagahaiajakalaaaaaaaaaaaaaaaaaffafagaaggga",
            "gaaaaaaaab",
        ),
        true,
    ),
    case(
        concat!(
            "abababababababababababababababababababaacacacacaca",
            "cacadaeafagahaiajakalaaaaaaaaaaaaaaaaaffafagaaggga",
            "gaaaaaaaab",
        ),
        concat!(
            "abababababababababababababababababababaacacacacaca",
            "cacadaeafagahaiajaxalaaaaaaaaaaaaaaaaaffafagaaggga",
            "gaaaaaaaab",
        ),
        false,
    ),
    case(
        concat!(
            "abababababababababababababababababababaacacacacaca",
            "cacadaeafagahaiajakalaaaaaaaaaaaaaaaaaffafagaaggga",
            "gaaaaaaaab",
        ),
        concat!(
            "abababababababababababababababababababaacacacacaca",
            "cacadaeafagahaiajakalaaaaaaaaaaaaaaaaaffafagagggga",
            "gaaaaaaaab",
        ),
        false,
    ),
    case("aaabbaabbaab", "aaabbaabbaab", true),
    case("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", true),
    case("aaaaaaaaaaaaaaaaa", "aaaaaaaaaaaaaaaaa", true),
    case("aaaaaaaaaaaaaaaa", "aaaaaaaaaaaaaaaaa", false),
    case(
        concat!(
            "abcabcdabcdeabcdefabcdefgabcdefghabcdefghiabcdefgh",
            "ijabcdefghijkabcdefghijklabcdefghijklmabcdefghijkl",
            "mn",
        ),
        "abcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabcabc",
        false,
    ),
    case(
        concat!(
            "abcabcdabcdeabcdefabcdefgabcdefghabcdefghiabcdefgh",
            "ijabcdefghijkabcdefghijklabcdefghijklmabcdefghijkl",
            "mn",
        ),
        concat!(
            "abcabcdabcdeabcdefabcdefgabcdefghabcdefghiabcdefgh",
            "ijabcdefghijkabcdefghijklabcdefghijklmabcdefghijkl",
            "mn",
        ),
        true,
    ),
    case("abcabcdabcdabcabcd", "abcabc?abcabcabc", false),
    case("abcabcdabcdabcabcdabcdabcabcdabcabcabcd", "abcabc?abc?abcabc?abc?abc?bc?abc?bc?bcd", true),
    case("?abc?", "?abc?", true),
];

/// Empty text or empty pattern.
pub(super) const EMPTY: &[Case] = &[
    case("", "abd", false),
    case("", "abcccd", false),
    case("", "mississipissippi", false),
    case("", "xxxxzzzzzzzzyfffff", false),
    case("", "xxxxzzzzzzzzyf", false),
    case("", "xxxxzzy.fffff", false),
    case("", "xyxyxyzyxyz", false),
    case("", "mississippi", false),
    case("", "xyxyxyxyz", false),
    case("", "m ississippi", false),
    case("", "ababac*", false),
    case("", "ababac", false),
    case("", "aaazz", false),
    case("", "1212", false),
    case("", "a12b", false),
    case("", "a12b12", false),
    case("", "n", false),
    case("", "aabab", false),
    case("", "ar", false),
    case("", "aaar", false),
    case("", "XYXYXYZYXYz", false),
    case("", "missisSIPpi", false),
    case("", "mississipPI", false),
    case("", "miSsissippi", false),
    case("", "miSsisSippi", false),
    case("", "abAbac", false),
    case("", "aAazz", false),
    case("", "A12b123", false),
    case("", "a12B12", false),
    case("", "oWn", false),
    case("", "bLah", false),
    case("", "bLaH", false),
    case("", "", true),
    case("abc", "", false),
    case("abcccd", "", false),
    case("mississipissippi", "", false),
    case("xxxxzzzzzzzzyf", "", false),
    case("xyxyxyzyxyz", "", false),
    case("mississippi", "", false),
    case("xyxyxyxyz", "", false),
    case("m ississippi", "", false),
    case("ababac", "", false),
    case("dababac", "", false),
    case("aaazz", "", false),
    case("a12b12", "", false),
    case("n", "", false),
    case("aabab", "", false),
    case("ar", "", false),
    case("aar", "", false),
    case("XYXYXYZYXYz", "", false),
    case("missisSIPpi", "", false),
    case("mississipPI", "", false),
    case("miSsissippi", "", false),
    case("abAbac", "", false),
    case("aAazz", "", false),
    case("A12b12", "", false),
    case("a12B12", "", false),
    case("oWn", "", false),
    case("bLah", "", false),
];

/// Patterns with `*`, including literal `*` in the text.
pub(super) const WILD: &[Case] = &[
    case("abcde", "?b?d*?", true),
    case("Hi", "Hi*", true),
    case("abc", "ab*d", false),
    case("abcccd", "*ccd", true),
    case("mississipissippi", "*issip*ss*", true),
    case("xxxx*zzzzzzzzy*f", "xxxx*zzy*fffff", false),
    case("xxxx*zzzzzzzzy*f", "xxx*zzy*f", true),
    case("xxxxzzzzzzzzyf", "xxxx*zzy*fffff", false),
    case("xxxxzzzzzzzzyf", "xxxx*zzy*f", true),
    case("xyxyxyzyxyz", "xy*z*xyz", true),
    case("mississippi", "*sip*", true),
    case("xyxyxyxyz", "xy*xyz", true),
    case("mississippi", "mi*sip*", true),
    case("ababac", "*abac*", true),
    case("aaazz", "a*zz*", true),
    case("a12b12", "*12*23", false),
    case("a12b12", "a12b", false),
    case("a12b12", "*12*12*", true),
    case("caaab", "*a?b", true),
    case("*", "*", true),
    case("a*abab", "a*b", true),
    case("a*r", "a*", true),
    case("a*ar", "a*aar", false),
    case("XYXYXYZYXYz", "XY*Z*XYz", true),
    case("missisSIPpi", "*SIP*", true),
    case("mississipPI", "*issip*PI", true),
    case("miSsissippi", "mi*sip*", true),
    case("miSsissippi", "mi*Sip*", false),
    case("abAbac", "*Abac*", true),
    case("aAazz", "a*zz*", true),
    case("A12b12", "*12*23", false),
    case("a12B12", "*12*12*", true),
    case("oWn", "*oWn*", true),
    case("bLah", "bLah", true),
    case("bLah", "bLaH", false),
    case("a", "*?", true),
    case("ab", "*?", true),
    case("abc", "*?", true),
    case("a", "??", false),
    case("ab", "?*?", true),
    case("ab", "*?*?*", true),
    case("abc", "?**?*?", true),
    case("abc", "?**?*&?", false),
    case("abcd", "?b*??", true),
    case("abcd", "?a*??", false),
    case("abcd", "?**?c?", true),
    case("abcd", "?**?d?", false),
    case("abcde", "?*b*?*d*?", true),
    case("bLah", "bL?h", true),
    case("bLaaa", "bLa?", false),
    case("bLah", "bLa?", true),
    case("bLaH", "?Lah", false),
    case("bLaH", "?LaH", true),
    case(
        concat!(
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab",
        ),
        "a*a*a*a*a*a*aa*aaa*a*a*b",
        true,
    ),
    case(
        concat!(
            "abababababababababababababababababababaacacacacaca",
            "cacadaeafagahaiajakalaaaaaaaaaaaaaaaaaffafagaaggga",
            "gaaaaaaaab",
        ),
        "*a*b*ba*ca*a*aa*aaa*fa*ga*b*",
        true,
    ),
    case(
        concat!(
            "abababababababababababababababababababaacacacacaca",
            "cacadaeafagahaiajakalaaaaaaaaaaaaaaaaaffafagaaggga",
            "gaaaaaaaab",
        ),
        "*a*b*ba*ca*a*x*aaa*fa*ga*b*",
        false,
    ),
    case(
        concat!(
            "abababababababababababababababababababaacacacacaca",
            "cacadaeafagahaiajakalaaaaaaaaaaaaaaaaaffafagaaggga",
            "gaaaaaaaab",
        ),
        "*a*b*ba*ca*aaaa*fa*ga*gggg*b*",
        false,
    ),
    case(
        concat!(
            "abababababababababababababababababababaacacacacaca",
            "cacadaeafagahaiajakalaaaaaaaaaaaaaaaaaffafagaaggga",
            "gaaaaaaaab",
        ),
        "*a*b*ba*ca*aaaa*fa*ga*ggg*b*",
        true,
    ),
    case("aaabbaabbaab", "*aabbaa*a*", true),
    case("a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*", "a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*", true),
    case("aaaaaaaaaaaaaaaaa", "*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*", true),
    case("aaaaaaaaaaaaaaaa", "*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*a*", false),
    case(
        concat!(
            "abc*abcd*abcde*abcdef*abcdefg*abcdefgh*abcdefghi*a",
            "bcdefghij*abcdefghijk*abcdefghijkl*abcdefghijklm*a",
            "bcdefghijklmn",
        ),
        concat!(
            "abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*ab",
            "c*abc*abc*abc*abc*",
        ),
        false,
    ),
    case(
        concat!(
            "abc*abcd*abcde*abcdef*abcdefg*abcdefgh*abcdefghi*a",
            "bcdefghij*abcdefghijk*abcdefghijkl*abcdefghijklm*a",
            "bcdefghijklmn",
        ),
        "abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*",
        true,
    ),
    case("abc*abcd*abcd*abc*abcd", "abc*abc*abc*abc*abc", false),
    case(
        "abc*abcd*abcd*abc*abcd*abcd*abc*abcd*abc*abc*abcd",
        "abc*abc*abc*abc*abc*abc*abc*abc*abc*abc*abcd",
        true,
    ),
    case("abc", "********a********b********c********", true),
    case("********a********b********c********", "abc", false),
    case("abc", "********a********b********b********", false),
    case("*abc*", "***a*b*c***", true),
    case("", "?", false),
    case("", "*?", false),
    case("", "", true),
    case("a", "", false),
];

/// Multi-byte content. Comparison is exact, there is no case folding.
///
/// Every case gives the same answer for code points and for grapheme clusters.
pub(super) const UTF8: &[Case] = &[
    case("🐂🚀♥🍀貔貅🦁★□√🚦€¥☯🐴😊🍓🐕🎺🧊☀☂🐉", "*☂🐉", true),
    case("▲●🐍✗🤣🐶♫🌻ॐ", "▲●☂*", false),
    case("𓋍𓋔𓎍", "𓋍𓋔?", true),
    case("𓋍𓋔𓎍", "𓋍?𓋔𓎍", false),
    case("♅☌♇", "♅☌♇", true),
    case("⚛⚖☁", "⚛🍄☁", false),
    case("⚛⚖☁o", "⚛⚖☁O", false),
    case("⚛⚖☁O", "⚛⚖☁0", false),
    case("🦀🎉", "??", true),
    case("🦀🎉", "?", false),
    case("🦀🎉🌟", "*?🌟", true),
    case("गते गते पारगते पारसंगते बोधि स्वाहा", "गते गते * बोधि स्वाहा", true),
    case("गते गते पारगते पारसंगते बोधि स्वाहा", "गते गते * बोधि", false),
    case(
        "Мне нужно выучить русский язык, чтобы лучше оценить Пушкина.",
        "Мне нужно выучить * язык, чтобы лучше оценить *.",
        true,
    ),
    case(
        "Мне нужно выучить русский язык, чтобы лучше оценить Пушкина.",
        "Мне нужно выучить ??????? язык, чтобы лучше оценить ???????.",
        true,
    ),
    case(
        "אני צריך ללמוד אנגלית כדי להעריך את גינסברג",
        " אני צריך ללמוד אנגלית כדי להעריך את ???????",
        false,
    ),
    case(
        "אני צריך ללמוד אנגלית כדי להעריך את גינסברג",
        "אני צריך ללמוד * כדי להעריך את ???????",
        true,
    ),
    case(
        "ગિન્સબર્ગની શ્રેષ્ઠ પ્રશંસા કરવા માટે મારે અંગ્રેજી શીખવું પડશે.",
        "* શ્રેષ્ઠ પ્રશંસા કરવા માટે મારે * શીખવું પડશે.",
        true,
    ),
    case(
        "ગિન્સબર્ગની શ્રેષ્ઠ પ્રશંસા કરવા માટે મારે અંગ્રેજી શીખવું પડશે.",
        "ગિન્સબર્ગની શ્રેષ્ઠ પ્રશંસા કરવા માટે મારે હિબ્રુ ભાષા શીખવી પડશે.",
        false,
    ),
    // Code points whose UTF-16 low byte is `*` or `?`.
    case("ḪؿꜪἪꜿ", "ḪؿꜪἪꜿ", true),
    case("ḪؿUἪꜿ", "ḪؿꜪἪꜿ", false),
    case("ḪؿꜪἪꜿ", "ḪؿꜪἪꜿЖ", false),
    case("ḪؿꜪἪꜿ", "ЬḪؿꜪἪꜿ", false),
    case("ḪؿꜪἪꜿ", "?ؿꜪ*ꜿ", true),
];
