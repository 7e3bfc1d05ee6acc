//! Core trait definitions.
//!
//! The quiz never talks to a terminal directly. Everything it shows or asks
//! goes through a [`Console`], implemented over real streams by
//! [`StreamConsole`](crate::console::StreamConsole) and over canned input by
//! [`ScriptedConsole`](crate::mock::ScriptedConsole).

use anyhow::Result;

/// Line-oriented user interaction.
pub trait Console {
    /// Show one line of text.
    fn display(&mut self, text: &str) -> Result<()>;

    /// Show `prompt` and read one line of input, without its terminator.
    ///
    /// Returns [`QuizError::InputClosed`](crate::error::QuizError::InputClosed)
    /// once input is exhausted.
    fn prompt_line(&mut self, prompt: &str) -> Result<String>;

    /// Show `prompt` and read an integer.
    ///
    /// `Ok(None)` means a line was read but it was not a number; the caller
    /// decides whether to ask again.
    fn prompt_int(&mut self, prompt: &str) -> Result<Option<i64>> {
        let line = self.prompt_line(prompt)?;
        Ok(line.trim().parse().ok())
    }
}

/// Ask for a yes/no answer. Only `yes` (any case) counts as yes.
pub fn prompt_yes(console: &mut dyn Console, prompt: &str) -> Result<bool> {
    let answer = console.prompt_line(prompt)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
