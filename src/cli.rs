// std imports
use std::num::NonZeroUsize;

// third-party imports
use clap::Parser;

// local imports
use crate::{
    settings::{Settings, SymbolUnit},
    suite::{Engine, Group},
};

// ---

/// Non-recursive wildcard matching with `*` and `?`.
///
/// Runs the conformance suite by default and prints "Passed" or "Failed" for each group.
/// With --match, prints the texts matching the pattern instead.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, an empty value or "-" discards all previous ones including the default one.
    #[arg(long, value_name = "FILE", env = "FASTWILD_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Suite group to run, can be repeated [default: from settings].
    #[arg(short, long = "group", value_name = "GROUP", value_enum)]
    pub groups: Vec<Group>,

    /// Matcher entry point to run each case through, can be repeated [default: from settings].
    #[arg(short, long = "engine", value_name = "ENGINE", value_enum)]
    pub engines: Vec<Engine>,

    /// Number of times each group is run.
    #[arg(short = 'n', long, env = "FASTWILD_REPETITIONS", overrides_with = "repetitions")]
    pub repetitions: Option<NonZeroUsize>,

    /// Print cumulative time per engine.
    #[arg(long, overrides_with = "no_timing")]
    pub timing: bool,

    /// Do not print timing, overrides --timing option.
    #[arg(long, overrides_with = "timing")]
    pub no_timing: bool,

    /// Print each failed case.
    #[arg(short, long)]
    pub verbose: bool,

    /// Pattern to filter texts with instead of running the suite.
    #[arg(short = 'm', long = "match", value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// Symbol unit used with --match [default: from settings].
    #[arg(short, long, value_enum)]
    pub unit: Option<SymbolUnit>,

    /// Texts to filter with --match, lines of the standard input are used if none are given.
    #[arg(requires = "pattern")]
    pub texts: Vec<String>,
}

impl Opt {
    /// Splits the --config values into the files to load and whether the default user
    /// settings file is skipped.
    pub fn config_files(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();
        (&self.config[offset..], no_default)
    }

    pub fn groups(&self, settings: &Settings) -> Vec<Group> {
        if self.groups.is_empty() {
            settings.groups.clone()
        } else {
            self.groups.clone()
        }
    }

    pub fn engines(&self, settings: &Settings) -> Vec<Engine> {
        if self.engines.is_empty() {
            settings.engines.clone()
        } else {
            self.engines.clone()
        }
    }

    pub fn repetitions(&self, settings: &Settings) -> usize {
        self.repetitions.map(NonZeroUsize::get).unwrap_or(settings.repetitions).max(1)
    }

    pub fn timing(&self, settings: &Settings) -> bool {
        !self.no_timing && (self.timing || settings.timing)
    }

    pub fn unit(&self, settings: &Settings) -> SymbolUnit {
        self.unit.unwrap_or(settings.unit)
    }
}

#[cfg(test)]
mod tests;
