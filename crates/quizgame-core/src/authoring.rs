//! Interactive question authoring.

use anyhow::Result;

use crate::model::{QuestionBank, QuestionRecord, OPTION_COUNT};
use crate::traits::Console;

/// Ask for a question text, four options and the correct option number.
///
/// The option number is asked again until it is between 1 and 4, so the
/// returned record is always valid.
pub fn create_question(console: &mut dyn Console) -> Result<QuestionRecord> {
    let text = console.prompt_line("Enter the question text: ")?;

    let mut options: [String; OPTION_COUNT] = Default::default();
    for (i, option) in options.iter_mut().enumerate() {
        *option = console.prompt_line(&format!("Enter option {}: ", i + 1))?;
    }

    let correct_index = loop {
        match console.prompt_int("Enter the correct option number (1-4): ")? {
            Some(n) if (1..=OPTION_COUNT as i64).contains(&n) => break (n - 1) as usize,
            _ => console.display("Please enter a number between 1 and 4.")?,
        }
    };

    Ok(QuestionRecord::new(text, options, correct_index)?)
}

/// Author `count` questions and append them to `bank`.
///
/// Questions that no longer fit are reported and dropped; authoring carries
/// on. Returns how many were added.
pub fn add_questions(
    console: &mut dyn Console,
    bank: &mut QuestionBank,
    count: usize,
) -> Result<usize> {
    let mut added = 0;
    for _ in 0..count {
        let question = create_question(console)?;
        match bank.push(question) {
            Ok(()) => added += 1,
            Err(e) => console.display(&format!("Cannot add more questions: {e}"))?,
        }
    }
    Ok(added)
}
