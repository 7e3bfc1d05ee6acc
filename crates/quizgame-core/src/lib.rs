//! quizgame-core: question storage, scoring and quiz sessions.
//!
//! This crate holds everything the quiz needs apart from the terminal: the
//! question data model, the flat-file store, the two scoring policies and
//! the two-player session state machine. All user interaction goes through
//! the [`traits::Console`] trait so it can be scripted in tests.

pub mod authoring;
pub mod config;
pub mod console;
pub mod error;
pub mod mock;
pub mod model;
pub mod scoring;
pub mod session;
pub mod store;
pub mod traits;

pub use error::QuizError;
pub use model::{QuestionBank, QuestionRecord};
pub use scoring::{Player, ScoringPolicy};
pub use session::{check_answer, QuizSession, SessionState};
pub use store::{LoadOutcome, QuestionStore, StoreWarning};
pub use traits::Console;
