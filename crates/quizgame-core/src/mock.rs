//! Scripted console for testing.

use std::collections::VecDeque;

use anyhow::Result;

use crate::error::QuizError;
use crate::traits::Console;

/// A [`Console`] fed from a fixed list of input lines.
///
/// Everything displayed, prompts included, is recorded in order so tests can
/// assert on what a player would have seen.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
    prompt_count: usize,
}

impl ScriptedConsole {
    /// Create a console that answers prompts with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            prompt_count: 0,
        }
    }

    /// Every prompt and displayed line so far.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// The transcript joined with newlines.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    /// Number of prompts issued.
    pub fn prompt_count(&self) -> usize {
        self.prompt_count
    }

    /// Input lines not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn display(&mut self, text: &str) -> Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        self.prompt_count += 1;
        self.transcript.push(prompt.to_string());
        self.inputs
            .pop_front()
            .ok_or_else(|| QuizError::InputClosed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_inputs_in_order() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.prompt_line("a: ").unwrap(), "first");
        assert_eq!(console.prompt_line("b: ").unwrap(), "second");
        assert!(console.prompt_line("c: ").is_err());
        assert_eq!(console.prompt_count(), 3);
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn records_transcript() {
        let mut console = ScriptedConsole::new(["x"]);
        console.display("hello").unwrap();
        console.prompt_line("name? ").unwrap();
        assert_eq!(console.transcript(), ["hello", "name? "]);
        assert_eq!(console.output(), "hello\nname? ");
    }
}
