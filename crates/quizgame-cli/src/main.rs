//! quizgame CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use quizgame_core::config::load_config_from;
use quizgame_core::console::StreamConsole;
use quizgame_core::ScoringPolicy;

mod commands;

#[derive(Parser)]
#[command(name = "quizgame", version, about = "Two-player multiple-choice quiz game")]
struct Cli {
    /// Question file (overrides config and QUIZGAME_QUESTIONS_FILE)
    #[arg(long, global = true)]
    questions: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Author new questions and append them to the question file
    Create {
        /// Number of questions to add (asked interactively if omitted)
        #[arg(long)]
        count: Option<usize>,
    },

    /// Show every stored question with its correct option
    Review {
        /// Output format: text, table, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Play a two-player quiz over the stored questions
    Play {
        /// Scoring policy for player 1 (basic, advanced); asked if omitted
        #[arg(long)]
        player1_policy: Option<ScoringPolicy>,

        /// Scoring policy for player 2 (basic, advanced); asked if omitted
        #[arg(long)]
        player2_policy: Option<ScoringPolicy>,
    },

    /// Check the question file for lines that would be skipped
    Validate,

    /// Create a starter config and sample question file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizgame=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = load_config_from(cli.config.as_deref()).and_then(|mut config| {
        if let Some(questions) = cli.questions {
            config.questions_file = questions;
        }

        let stdin = std::io::stdin();
        let mut console = StreamConsole::new(stdin.lock(), std::io::stdout());

        match cli.command.unwrap_or(Commands::Menu) {
            Commands::Menu => commands::menu::execute(&config, &mut console),
            Commands::Create { count } => {
                commands::create::execute(&config, &mut console, count)
            }
            Commands::Review { format } => {
                commands::review::execute(&config, &mut console, &format)
            }
            Commands::Play {
                player1_policy,
                player2_policy,
            } => commands::play::execute(
                &config,
                &mut console,
                [player1_policy, player2_policy],
            ),
            Commands::Validate => commands::validate::execute(&config),
            Commands::Init => commands::init::execute(&config),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
