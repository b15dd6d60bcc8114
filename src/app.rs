// std imports
use std::io::Write;

// third-party imports
use humantime::format_duration;

// local imports
use crate::{
    error::Result,
    suite::{Report, Suite},
};

// ---

pub struct Options {
    pub suite: Suite,
    pub timing: bool,
    pub verbose: bool,
}

/// Runs the conformance suite and writes the report.
pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Runs the suite and writes one line per group followed by the overall outcome.
    ///
    /// Failing cases are part of the returned report, not an error.
    pub fn run(&self, output: &mut dyn Write) -> Result<Report> {
        let report = self.options.suite.run();
        self.write_report(&report, output)?;
        Ok(report)
    }

    fn write_report(&self, report: &Report, output: &mut dyn Write) -> Result<()> {
        for group in &report.groups {
            let outcome = if group.passed() { "Passed" } else { "Failed" };
            writeln!(output, "{} {}", outcome, group.group.title())?;

            if self.options.verbose {
                for failure in &group.failures {
                    writeln!(
                        output,
                        "  {}: pattern {:?} text {:?}: expected {}, got {}",
                        failure.engine.as_ref(),
                        failure.case.pattern,
                        failure.case.text,
                        failure.case.expected,
                        failure.actual,
                    )?;
                }
            }
        }

        writeln!(output, "{}", if report.passed() { "Passed" } else { "Failed" })?;

        if self.options.timing {
            for timing in &report.timings {
                writeln!(output, "{}: {}", timing.engine.as_ref(), format_duration(timing.elapsed))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
