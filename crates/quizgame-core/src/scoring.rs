//! Scoring policies and players.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Point deltas applied to a player's score after each answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringPolicy {
    /// +10 for a correct answer, -5 for a wrong one.
    #[default]
    Basic,
    /// +15 for a correct answer, -10 for a wrong one.
    Advanced,
}

impl ScoringPolicy {
    pub fn correct_delta(self) -> i64 {
        match self {
            ScoringPolicy::Basic => 10,
            ScoringPolicy::Advanced => 15,
        }
    }

    pub fn incorrect_delta(self) -> i64 {
        match self {
            ScoringPolicy::Basic => -5,
            ScoringPolicy::Advanced => -10,
        }
    }

    /// Score after a correct answer. No clamping.
    pub fn on_correct(self, score: i64) -> i64 {
        score.saturating_add(self.correct_delta())
    }

    /// Score after an incorrect answer. May go negative.
    pub fn on_incorrect(self, score: i64) -> i64 {
        score.saturating_add(self.incorrect_delta())
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringPolicy::Basic => write!(f, "basic"),
            ScoringPolicy::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(ScoringPolicy::Basic),
            "advanced" => Ok(ScoringPolicy::Advanced),
            other => Err(format!("unknown scoring policy: {other}")),
        }
    }
}

/// A quiz participant and their running score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    score: i64,
    policy: ScoringPolicy,
}

impl Player {
    /// A new player starting at zero.
    pub fn new(name: impl Into<String>, policy: ScoringPolicy) -> Self {
        Self {
            name: name.into(),
            score: 0,
            policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Apply this player's policy for one answer.
    pub fn record_answer(&mut self, correct: bool) {
        self.score = if correct {
            self.policy.on_correct(self.score)
        } else {
            self.policy.on_incorrect(self.score)
        };
    }
}
