//! Console over arbitrary byte streams.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::error::QuizError;
use crate::traits::Console;

/// A [`Console`] reading lines from `R` and writing to `W`.
///
/// The CLI wraps locked stdin/stdout in one of these.
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn display(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write to console")?;
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").context("failed to write to console")?;
        self.output.flush().context("failed to flush console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if read == 0 {
            return Err(QuizError::InputClosed.into());
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
