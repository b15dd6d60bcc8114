// std imports
use std::hint::black_box;
use std::time::{Duration, Instant};

// third-party imports
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use wildcard::{cursor, index, matches_bytes, matches_graphemes, matches_str};

// private modules
mod cases;

// ---

/// A single conformance check: `pattern` applied to `text` must give `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub text: &'static str,
    pub pattern: &'static str,
    pub expected: bool,
}

const fn case(text: &'static str, pattern: &'static str, expected: bool) -> Case {
    Case {
        text,
        pattern,
        expected,
    }
}

// ---

/// Group of related cases, reported together.
#[derive(ValueEnum, Clone, Copy, Debug, Deserialize, Serialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(rename_all = "kebab-case")]
pub enum Group {
    /// Patterns without `*`.
    Tame,
    /// Empty text or empty pattern.
    Empty,
    /// Patterns with `*` and `?` in various combinations.
    Wild,
    /// Multi-byte content.
    Utf8,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::Tame, Group::Empty, Group::Wild, Group::Utf8];

    pub fn title(self) -> &'static str {
        match self {
            Self::Tame => "tame string tests",
            Self::Empty => "empty string tests",
            Self::Wild => "wildcard tests",
            Self::Utf8 => "UTF-8 tests",
        }
    }

    pub fn cases(self) -> &'static [Case] {
        match self {
            Self::Tame => cases::TAME,
            Self::Empty => cases::EMPTY,
            Self::Wild => cases::WILD,
            Self::Utf8 => cases::UTF8,
        }
    }
}

// ---

/// Matcher entry point a case is run through.
#[derive(
    ValueEnum,
    Clone,
    Copy,
    Debug,
    Deserialize,
    Serialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum Engine {
    /// Index-based matcher over code points.
    Index,
    /// Pointer-style matcher over code points.
    Cursor,
    /// String matcher with code point semantics.
    Str,
    /// Byte matcher, applicable to ASCII cases only.
    Bytes,
    /// Grapheme cluster matcher.
    Grapheme,
}

impl Engine {
    /// Runs the case and returns the match result, or `None` if the engine cannot represent it.
    #[inline]
    pub fn run(self, input: &Input) -> Option<bool> {
        let (pattern, text) = (input.case.pattern, input.case.text);
        let result = match self {
            Self::Index => index::matches(&input.pattern, &input.text),
            Self::Cursor => cursor::matches(&input.pattern, &input.text),
            Self::Str => matches_str(pattern, text),
            Self::Bytes => {
                if !pattern.is_ascii() || !text.is_ascii() {
                    return None;
                }
                matches_bytes(pattern.as_bytes(), text.as_bytes())
            }
            Self::Grapheme => matches_graphemes(pattern, text),
        };
        Some(result)
    }
}

/// A case with its pattern and text decoded into code points ahead of timing.
#[derive(Debug, Clone)]
pub struct Input {
    pub case: Case,
    pattern: Vec<char>,
    text: Vec<char>,
}

impl Input {
    pub fn new(case: Case) -> Self {
        Self {
            case,
            pattern: case.pattern.chars().collect(),
            text: case.text.chars().collect(),
        }
    }
}

// ---

/// Conformance suite runner.
#[derive(Debug, Clone)]
pub struct Suite {
    groups: Vec<Group>,
    engines: Vec<Engine>,
    repetitions: usize,
}

impl Suite {
    pub fn new(groups: impl IntoIterator<Item = Group>, engines: impl IntoIterator<Item = Engine>) -> Self {
        Self {
            groups: groups.into_iter().collect(),
            engines: engines.into_iter().collect(),
            repetitions: 1,
        }
    }

    /// Sets how many times each group is run, at least once.
    pub fn repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions.max(1);
        self
    }

    /// Runs all groups through all engines.
    ///
    /// Results are deterministic, so failures are collected during the first repetition only,
    /// further repetitions just add to the timing.
    pub fn run(&self) -> Report {
        let mut timings: Vec<Timing> = self
            .engines
            .iter()
            .map(|&engine| Timing {
                engine,
                elapsed: Duration::ZERO,
            })
            .collect();

        let groups = self
            .groups
            .iter()
            .map(|&group| {
                log::debug!("running {} ({} repetitions)", group.title(), self.repetitions);

                let mut report = GroupReport {
                    group,
                    checked: 0,
                    skipped: 0,
                    failures: Vec::new(),
                };

                let inputs: Vec<Input> = group.cases().iter().copied().map(Input::new).collect();

                for repetition in 0..self.repetitions {
                    for input in &inputs {
                        let case = &input.case;
                        for timing in &mut timings {
                            let start = Instant::now();
                            let actual = timing.engine.run(black_box(input));
                            timing.elapsed += start.elapsed();

                            if repetition != 0 {
                                continue;
                            }
                            match actual {
                                None => report.skipped += 1,
                                Some(actual) => {
                                    report.checked += 1;
                                    if actual != case.expected {
                                        report.failures.push(Failure {
                                            engine: timing.engine,
                                            case: *case,
                                            actual,
                                        });
                                    }
                                }
                            }
                        }
                    }
                }

                log::debug!("finished {}: {} failures", group.title(), report.failures.len());
                report
            })
            .collect();

        Report { groups, timings }
    }
}

// ---

/// Outcome of a suite run.
#[derive(Debug, Clone)]
pub struct Report {
    pub groups: Vec<GroupReport>,
    pub timings: Vec<Timing>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.groups.iter().all(|group| group.passed())
    }

    pub fn failures(&self) -> impl Iterator<Item = &Failure> {
        self.groups.iter().flat_map(|group| group.failures.iter())
    }
}

#[derive(Debug, Clone)]
pub struct GroupReport {
    pub group: Group,
    /// Number of case and engine combinations checked.
    pub checked: usize,
    /// Number of case and engine combinations the engine could not represent.
    pub skipped: usize,
    pub failures: Vec<Failure>,
}

impl GroupReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub engine: Engine,
    pub case: Case,
    pub actual: bool,
}

/// Cumulative time spent in an engine across all groups and repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub engine: Engine,
    pub elapsed: Duration,
}
