//! The `quizgame play` command.

use anyhow::Result;

use quizgame_core::config::QuizConfig;
use quizgame_core::session::PLAYER_COUNT;
use quizgame_core::traits::prompt_yes;
use quizgame_core::{Console, Player, QuizSession, ScoringPolicy};

/// Run a game. A policy given in `policies` replaces the "advanced?" prompt
/// for that player.
pub fn execute(
    config: &QuizConfig,
    console: &mut dyn Console,
    policies: [Option<ScoringPolicy>; PLAYER_COUNT],
) -> Result<()> {
    let bank = config.store().load()?.bank;

    if bank.is_empty() {
        console.display("No questions available. Please create questions first.")?;
        return Ok(());
    }

    let [first, second] = policies;
    let players = [
        prompt_player(console, 1, first)?,
        prompt_player(console, 2, second)?,
    ];
    let mut session = QuizSession::new(&bank, players)?;
    session.run(console)?;

    for line in final_score_lines(session.players()) {
        console.display(&line)?;
    }
    Ok(())
}

fn prompt_player(
    console: &mut dyn Console,
    number: usize,
    policy: Option<ScoringPolicy>,
) -> Result<Player> {
    let name = console.prompt_line(&format!("Enter name for Player {number}: "))?;
    let policy = match policy {
        Some(policy) => policy,
        None => {
            let advanced = prompt_yes(
                console,
                &format!("Is Player {number} advanced? (yes/no): "),
            )?;
            if advanced {
                ScoringPolicy::Advanced
            } else {
                ScoringPolicy::Basic
            }
        }
    };
    Ok(Player::new(name, policy))
}

fn final_score_lines(players: &[Player; PLAYER_COUNT]) -> Vec<String> {
    let mut lines = vec!["--- Final Scores ---".to_string()];
    for player in players {
        lines.push(format!("{}'s score: {}", player.name(), player.score()));
    }

    let [first, second] = players;
    lines.push(match first.score().cmp(&second.score()) {
        std::cmp::Ordering::Greater => format!("{} wins!", first.name()),
        std::cmp::Ordering::Less => format!("{} wins!", second.name()),
        std::cmp::Ordering::Equal => "It's a tie!".to_string(),
    });
    lines
}
