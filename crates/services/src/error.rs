//! Shared error types for the services crate.

use thiserror::Error;

use vocab_core::QuizResultError;

/// Errors emitted by the quiz engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("catalog has no entries to quiz on")]
    EmptyCatalog,

    #[error("current question was already answered")]
    AlreadyAnswered,

    #[error("quiz session already completed")]
    Completed,

    #[error("quiz session is not complete yet")]
    NotComplete,

    #[error(transparent)]
    Result(#[from] QuizResultError),
}
