//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{BankError, SourceError};

/// Errors emitted while loading a question bank. Terminal for the attempt.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("question bank unavailable: {reason}")]
    Unavailable {
        status: Option<reqwest::StatusCode>,
        reason: String,
    },
    #[error("question bank is malformed: {0}")]
    Malformed(#[from] MalformedBank),
}

impl LoadError {
    /// HTTP status behind an `Unavailable` error, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            LoadError::Unavailable { status, .. } => *status,
            LoadError::Malformed(_) => None,
        }
    }
}

/// Why a fetched document could not become a `QuestionBank`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MalformedBank {
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] BankError),
}

/// Errors emitted while configuring or starting a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot sample {requested} questions from a bank of {available}")]
    SampleTooLarge { requested: usize, available: usize },
    #[error("sample size must be > 0")]
    EmptySample,
    #[error("invalid sample size: {raw}")]
    InvalidSampleSize { raw: String },
    #[error("invalid seed: {raw}")]
    InvalidSeed { raw: String },
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Session operation called in the wrong state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateError {
    #[error("quiz has not started")]
    NotStarted,
    #[error("quiz already started")]
    AlreadyStarted,
    #[error("quiz already finished")]
    Finished,
    #[error("current question already graded")]
    AlreadyGraded,
    #[error("current question has not been graded")]
    NotGraded,
    #[error("quiz is not finished")]
    NotFinished,
}

/// Caller input rejected before touching session state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("option {index} is out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },
}

/// Errors emitted by quiz sessions and the runner.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("quiz abandoned before the last question")]
    Abandoned,
}
