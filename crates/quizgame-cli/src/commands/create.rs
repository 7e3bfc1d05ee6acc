//! The `quizgame create` command.

use anyhow::{Context, Result};

use quizgame_core::authoring::add_questions;
use quizgame_core::config::QuizConfig;
use quizgame_core::traits::prompt_yes;
use quizgame_core::Console;

pub fn execute(
    config: &QuizConfig,
    console: &mut dyn Console,
    count: Option<usize>,
) -> Result<()> {
    let store = config.store();
    let mut bank = store.load()?.bank;

    let count = match count {
        Some(n) => n,
        None => loop {
            match console.prompt_int("How many questions do you want to add? ")? {
                Some(n) if n >= 0 => break n as usize,
                _ => console.display("Please enter a whole number.")?,
            }
        },
    };

    let added = add_questions(console, &mut bank, count)?;
    tracing::info!("added {added} of {count} question(s)");

    loop {
        match store.save(&bank) {
            Ok(()) => {
                console.display(&format!(
                    "Questions saved successfully to {}",
                    store.path().display()
                ))?;
                return Ok(());
            }
            Err(e) => {
                console.display(&format!("Error saving questions: {e}"))?;
                if !prompt_yes(console, "Retry saving? (yes/no): ")? {
                    return Err(e).context("questions were not saved");
                }
            }
        }
    }
}
