//! Two-player quiz session.
//!
//! A session walks every question in bank order. For each question both
//! players answer, player 1 first. An out-of-range answer leaves the session
//! exactly where it was so the same player can be asked again.
//!
//! ```text
//! NotStarted -> Presenting(0) -> AwaitingAnswer(0, 0) -> AwaitingAnswer(0, 1)
//!            -> Presenting(1) -> ... -> Complete
//! ```

use anyhow::Result;

use crate::error::QuizError;
use crate::model::{QuestionBank, QuestionRecord, OPTION_COUNT};
use crate::scoring::Player;
use crate::traits::Console;

/// Players per session.
pub const PLAYER_COUNT: usize = 2;

/// Shown before re-asking a player who gave an unusable answer.
pub const INVALID_ANSWER_MESSAGE: &str = "Invalid option. Please select an option between 1 and 4.";

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    /// Question `question` is about to be shown.
    Presenting { question: usize },
    /// Waiting for `player` to answer `question`.
    AwaitingAnswer { question: usize, player: usize },
    /// Every player has answered every question.
    Complete,
}

/// Validate `answer` (1-based) against `question`.
///
/// Answers outside 1-4 are rejected with [`QuizError::OutOfRangeAnswer`];
/// otherwise returns whether the answer is the correct option.
pub fn check_answer(question: &QuestionRecord, answer: i64) -> Result<bool, QuizError> {
    if !(1..=OPTION_COUNT as i64).contains(&answer) {
        return Err(QuizError::OutOfRangeAnswer(answer));
    }
    Ok((answer - 1) as usize == question.correct_index())
}

/// Question text followed by its options numbered from 1.
pub fn render_question(question: &QuestionRecord) -> Vec<String> {
    let mut lines = Vec::with_capacity(OPTION_COUNT + 1);
    lines.push(question.text().to_string());
    for (i, option) in question.options().iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, option));
    }
    lines
}

/// One playthrough of a question bank by two players.
#[derive(Debug)]
pub struct QuizSession<'a> {
    bank: &'a QuestionBank,
    players: [Player; PLAYER_COUNT],
    state: SessionState,
}

impl<'a> QuizSession<'a> {
    /// Start a session over `bank`.
    ///
    /// Fails with [`QuizError::EmptyBank`] when there is nothing to ask.
    pub fn new(
        bank: &'a QuestionBank,
        players: [Player; PLAYER_COUNT],
    ) -> Result<Self, QuizError> {
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        Ok(Self {
            bank,
            players,
            state: SessionState::NotStarted,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// Both players, once every answer is in.
    pub fn final_scores(&self) -> Option<&[Player; PLAYER_COUNT]> {
        self.is_complete().then_some(&self.players)
    }

    pub fn into_players(self) -> [Player; PLAYER_COUNT] {
        self.players
    }

    /// The question being shown or answered, if any.
    pub fn current_question(&self) -> Option<&'a QuestionRecord> {
        match self.state {
            SessionState::Presenting { question }
            | SessionState::AwaitingAnswer { question, .. } => self.bank.get(question),
            SessionState::NotStarted | SessionState::Complete => None,
        }
    }

    /// The player who has to answer next, if any.
    pub fn current_player(&self) -> Option<&Player> {
        match self.state {
            SessionState::AwaitingAnswer { player, .. } => self.players.get(player),
            _ => None,
        }
    }

    /// Show the next question: moves from `NotStarted` or `Presenting` to
    /// awaiting player 1's answer and returns the question.
    ///
    /// Returns `None` in any other state.
    pub fn present(&mut self) -> Option<&'a QuestionRecord> {
        let question = match self.state {
            SessionState::NotStarted => 0,
            SessionState::Presenting { question } => question,
            _ => return None,
        };
        self.state = SessionState::AwaitingAnswer {
            question,
            player: 0,
        };
        tracing::debug!(question, "presenting question");
        self.bank.get(question)
    }

    /// Record the current player's answer.
    ///
    /// On a valid answer the player's score is updated and the session moves
    /// to the next player, the next question or `Complete`. An out-of-range
    /// answer returns the error and changes nothing.
    pub fn submit_answer(&mut self, answer: i64) -> Result<bool, QuizError> {
        let SessionState::AwaitingAnswer { question, player } = self.state else {
            return Err(QuizError::NotAwaitingAnswer);
        };
        let record = self
            .bank
            .get(question)
            .ok_or(QuizError::NotAwaitingAnswer)?;

        let correct = check_answer(record, answer)?;
        self.players[player].record_answer(correct);
        tracing::debug!(
            question,
            player = self.players[player].name(),
            correct,
            score = self.players[player].score(),
            "answer scored"
        );

        self.state = if player + 1 < PLAYER_COUNT {
            SessionState::AwaitingAnswer {
                question,
                player: player + 1,
            }
        } else if question + 1 < self.bank.len() {
            SessionState::Presenting {
                question: question + 1,
            }
        } else {
            SessionState::Complete
        };
        Ok(correct)
    }

    /// Play the session to completion through `console`.
    ///
    /// Invalid answers (out of range or not a number) are reported and the
    /// same player is asked again, as often as it takes.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        loop {
            match self.state {
                SessionState::Complete => return Ok(()),
                SessionState::NotStarted | SessionState::Presenting { .. } => {
                    if let Some(question) = self.present() {
                        console.display("---")?;
                        for line in render_question(question) {
                            console.display(&line)?;
                        }
                    }
                }
                SessionState::AwaitingAnswer { player, .. } => {
                    let prompt = format!(
                        "{}, enter your answer (1-{OPTION_COUNT}): ",
                        self.players[player].name()
                    );
                    let Some(answer) = console.prompt_int(&prompt)? else {
                        console.display(INVALID_ANSWER_MESSAGE)?;
                        continue;
                    };
                    match self.submit_answer(answer) {
                        Ok(_) => {}
                        Err(e) if e.is_input_error() => {
                            console.display(INVALID_ANSWER_MESSAGE)?;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
            }
        }
    }
}
