// std imports
use std::io::{BufRead, Write};

// third-party imports
use wildcard::Unit;

// local imports
use crate::error::Result;

// ---

/// Prints the texts matching a wildcard pattern.
pub struct Filter {
    pattern: String,
    unit: Unit,
}

impl Filter {
    pub fn new(pattern: impl Into<String>, unit: Unit) -> Self {
        Self {
            pattern: pattern.into(),
            unit,
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.unit.matches(&self.pattern, text)
    }

    /// Writes each matching text on its own line and returns the number of matches.
    pub fn run_texts<S: AsRef<str>>(&self, texts: &[S], output: &mut dyn Write) -> Result<usize> {
        let mut count = 0;
        for text in texts {
            let text = text.as_ref();
            if self.matches(text) {
                writeln!(output, "{}", text)?;
                count += 1;
            }
        }
        log::debug!("{} of {} texts matched {:?}", count, texts.len(), self.pattern);
        Ok(count)
    }

    /// Same as [`Filter::run_texts`] for each line of the input.
    ///
    /// With the byte unit, lines are matched as they are, otherwise they must be valid UTF-8.
    /// Line terminators are not part of the matched text.
    pub fn run_reader<R: BufRead>(&self, mut input: R, output: &mut dyn Write) -> Result<usize> {
        let mut count = 0;
        let mut total = 0;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            total += 1;

            let line = trim_eol(&buf);
            let matched = match self.unit {
                Unit::Byte => wildcard::matches_bytes(self.pattern.as_bytes(), line),
                _ => self.matches(std::str::from_utf8(line)?),
            };
            if matched {
                output.write_all(line)?;
                output.write_all(b"\n")?;
                count += 1;
            }
        }
        log::debug!("{} of {} lines matched {:?}", count, total, self.pattern);
        Ok(count)
    }
}

fn trim_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
