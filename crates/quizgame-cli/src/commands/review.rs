//! The `quizgame review` command.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use quizgame_core::config::QuizConfig;
use quizgame_core::{Console, QuestionBank};

pub fn execute(config: &QuizConfig, console: &mut dyn Console, format: &str) -> Result<()> {
    let bank = config.store().load()?.bank;

    if bank.is_empty() {
        console.display("No questions found. Please create questions first.")?;
        return Ok(());
    }

    match format {
        "json" => console.display(&serde_json::to_string_pretty(bank.questions())?)?,
        "table" => console.display(&render_table(&bank).to_string())?,
        _ => {
            console.display("--- Loaded Questions ---")?;
            for line in render_text(&bank) {
                console.display(&line)?;
            }
        }
    }

    Ok(())
}

fn render_text(bank: &QuestionBank) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, question) in bank.iter().enumerate() {
        lines.push(format!("Question {}: {}", i + 1, question.text()));
        for (j, option) in question.options().iter().enumerate() {
            lines.push(format!("  {}. {}", j + 1, option));
        }
        lines.push(format!(
            "  Correct Option: {}",
            question.correct_option_number()
        ));
        lines.push(String::new());
    }
    lines
}

fn render_table(bank: &QuestionBank) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Question", "1", "2", "3", "4", "Correct"]);

    for (i, question) in bank.iter().enumerate() {
        let mut row = vec![(i + 1).to_string(), question.text().to_string()];
        row.extend(question.options().iter().cloned());
        row.push(question.correct_option_number().to_string());
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizgame_core::QuestionRecord;

    fn bank() -> QuestionBank {
        let mut bank = QuestionBank::default();
        bank.push(
            QuestionRecord::new("2+2?", ["3", "4", "5", "6"].map(String::from), 1).unwrap(),
        )
        .unwrap();
        bank
    }

    #[test]
    fn text_lists_options_and_answer() {
        let lines = render_text(&bank());
        assert_eq!(lines[0], "Question 1: 2+2?");
        assert_eq!(lines[2], "  2. 4");
        assert_eq!(lines[5], "  Correct Option: 2");
    }

    #[test]
    fn table_has_one_row_per_question() {
        let table = render_table(&bank());
        assert_eq!(table.row_iter().count(), 1);
        assert!(table.to_string().contains("2+2?"));
    }
}
