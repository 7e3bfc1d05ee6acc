//! The interactive menu, run when no subcommand is given.

use anyhow::Result;

use quizgame_core::config::QuizConfig;
use quizgame_core::Console;

use super::{create, is_input_closed, play, review};

pub fn execute(config: &QuizConfig, console: &mut dyn Console) -> Result<()> {
    loop {
        console.display("")?;
        console.display("--- Quiz Game Menu ---")?;
        console.display("1. Create New Questions")?;
        console.display("2. Load Existing Questions")?;
        console.display("3. Play Quiz")?;
        console.display("4. Exit")?;

        let choice = match console.prompt_int("Enter your choice: ") {
            Ok(choice) => choice,
            // end of input at the menu is a normal way out
            Err(e) if is_input_closed(&e) => return say_goodbye(console),
            Err(e) => return Err(e),
        };

        let result = match choice {
            Some(1) => create::execute(config, console, None),
            Some(2) => review::execute(config, console, "text"),
            Some(3) => play::execute(config, console, [None, None]),
            Some(4) => return say_goodbye(console),
            _ => {
                console.display("Invalid choice. Please try again.")?;
                continue;
            }
        };

        match result {
            Ok(()) => {}
            Err(e) if is_input_closed(&e) => return Err(e),
            Err(e) => console.display(&format!("Error: {e:#}"))?,
        }
    }
}

fn say_goodbye(console: &mut dyn Console) -> Result<()> {
    console.display("Exiting Quiz Game. Goodbye!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizgame_core::mock::ScriptedConsole;

    fn config_in(dir: &tempfile::TempDir) -> QuizConfig {
        QuizConfig {
            questions_file: dir.path().join("quiz_questions.txt"),
            ..QuizConfig::default()
        }
    }

    #[test]
    fn exit_choice_says_goodbye() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(["4"]);
        execute(&config_in(&dir), &mut console).unwrap();
        assert!(console.output().contains("Goodbye"));
    }

    #[test]
    fn invalid_choice_shows_menu_again() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(["9", "menu", "4"]);
        execute(&config_in(&dir), &mut console).unwrap();
        assert_eq!(console.output().matches("Invalid choice").count(), 2);
        assert_eq!(console.output().matches("--- Quiz Game Menu ---").count(), 3);
    }

    #[test]
    fn play_without_questions_returns_to_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(["3", "2", "4"]);
        execute(&config_in(&dir), &mut console).unwrap();
        let output = console.output();
        assert!(output.contains("No questions available"));
        assert!(output.contains("No questions found"));
    }

    #[test]
    fn create_then_play_full_round() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let mut console = ScriptedConsole::new([
            // create one question
            "1", "1", "2+2?", "3", "4", "5", "6", "2",
            // play it
            "3", "A", "no", "B", "yes", "2", "1",
            "4",
        ]);

        execute(&config, &mut console).unwrap();

        let output = console.output();
        assert!(output.contains("Questions saved successfully"));
        assert!(output.contains("A's score: 10"));
        assert!(output.contains("B's score: -10"));
        assert_eq!(
            std::fs::read_to_string(&config.questions_file).unwrap(),
            "2+2?;3;4;5;6;1\n"
        );
    }

    #[test]
    fn input_closed_mid_action_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(["1", "1", "half a question"]);
        assert!(execute(&config_in(&dir), &mut console).is_err());
    }
}
