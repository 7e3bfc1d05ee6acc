//! The `quizgame init` command.

use std::path::Path;

use anyhow::Result;

use quizgame_core::config::{QuizConfig, CONFIG_FILE_NAME};

pub fn execute(config: &QuizConfig) -> Result<()> {
    // Create quizgame.toml
    if Path::new(CONFIG_FILE_NAME).exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_FILE_NAME, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE_NAME}");
    }

    // Create sample question file
    let questions = &config.questions_file;
    if questions.exists() {
        println!("{} already exists, skipping.", questions.display());
    } else {
        std::fs::write(questions, SAMPLE_QUESTIONS)?;
        println!("Created {}", questions.display());
    }

    println!("\nNext steps:");
    println!("  1. Run: quizgame review");
    println!("  2. Run: quizgame create --count 3");
    println!("  3. Run: quizgame play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizgame configuration

questions_file = "quiz_questions.txt"
capacity = 100
"#;

const SAMPLE_QUESTIONS: &str = "\
What is 2 + 2?;3;4;5;6;1
Which planet is known as the Red Planet?;Venus;Jupiter;Mars;Mercury;2
What is the chemical symbol for water?;H2O;CO2;O2;NaCl;0
How many continents are there?;5;6;8;7;3
";
