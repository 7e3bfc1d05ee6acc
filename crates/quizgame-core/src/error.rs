//! Quiz error types.
//!
//! Every condition here is recoverable. Store-side conditions are usually
//! collected as [`StoreWarning`](crate::store::StoreWarning)s rather than
//! returned, so a load never aborts on bad input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the question store, the question bank and quiz sessions.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A stored line could not be turned into a question record.
    #[error("malformed record on line {line_number}: {reason}")]
    MalformedRecordLine { line_number: usize, reason: String },

    /// The question file does not exist yet.
    #[error("question file not found: {}", .0.display())]
    StoreNotFound(PathBuf),

    /// The question file exists but could not be read.
    #[error("failed to read question file {}: {source}", .path.display())]
    StoreReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the question file failed (disk full, permissions, ...).
    #[error("failed to write question file {}: {source}", .path.display())]
    StoreWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An answer outside the 1-4 option range.
    #[error("invalid option {0}, please select an option between 1 and 4")]
    OutOfRangeAnswer(i64),

    /// The bank is full and the record was dropped.
    #[error("question bank is full ({capacity} questions), cannot add more questions")]
    CapacityExceeded { capacity: usize },

    /// A correct-option index outside 0-3.
    #[error("correct option index {0} is out of range 0-3")]
    InvalidCorrectIndex(i64),

    /// A session was requested for a bank with no questions.
    #[error("no questions available, please create questions first")]
    EmptyBank,

    /// An answer was submitted while no player was being asked.
    #[error("session is not waiting for an answer")]
    NotAwaitingAnswer,

    /// The console ran out of input.
    #[error("input closed")]
    InputClosed,
}

impl QuizError {
    /// Returns `true` if the error was caused by bad user input and the
    /// caller should simply prompt again.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            QuizError::OutOfRangeAnswer(_) | QuizError::InvalidCorrectIndex(_)
        )
    }

    /// Returns `true` if this is a load-time condition that skips a record
    /// (or the whole missing file) instead of failing the load.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            QuizError::MalformedRecordLine { .. }
                | QuizError::StoreNotFound(_)
                | QuizError::CapacityExceeded { .. }
        )
    }
}
