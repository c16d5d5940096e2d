//! Shared error types for the services crate.

use thiserror::Error;

use kanji_core::DatasetError;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no entries available for session")]
    Empty,
    #[error("no question at position {position}: session has {total} questions")]
    OutOfRange { position: usize, total: usize },
    #[error("session is not finished yet")]
    InvalidState,
    #[error("question {position} was already answered")]
    AlreadyAnswered { position: usize },
}

/// Errors emitted while planning the question order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlanError {
    #[error("question count must be > 0")]
    ZeroQuestions,
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
