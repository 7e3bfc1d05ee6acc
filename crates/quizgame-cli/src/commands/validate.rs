//! The `quizgame validate` command.

use anyhow::Result;

use quizgame_core::config::QuizConfig;
use quizgame_core::QuizError;

pub fn execute(config: &QuizConfig) -> Result<()> {
    let store = config.store();
    let outcome = store.load()?;

    if outcome
        .warnings
        .iter()
        .any(|w| matches!(w.error, QuizError::StoreNotFound(_)))
    {
        anyhow::bail!("question file not found: {}", store.path().display());
    }

    println!(
        "Question file: {} ({} questions, capacity {})",
        store.path().display(),
        outcome.bank.len(),
        store.capacity()
    );

    for w in &outcome.warnings {
        println!("  WARNING: {w}");
    }

    if outcome.warnings.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} warning(s) found.", outcome.warnings.len());
    }

    Ok(())
}
