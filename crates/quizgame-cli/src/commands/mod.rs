//! Subcommand implementations.
//!
//! Interactive commands take a [`Console`](quizgame_core::Console) so the
//! menu can chain them over one terminal.

pub mod create;
pub mod init;
pub mod menu;
pub mod play;
pub mod review;
pub mod validate;

use quizgame_core::QuizError;

/// Whether `err` means the user's input ran out.
pub fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<QuizError>(), Some(QuizError::InputClosed))
}
