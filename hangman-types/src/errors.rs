use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Every failure surfaced to callers. None of these are retried internally;
/// a failed mutation leaves previously persisted state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
pub enum ApiError {
    #[error("{resource} not found")]
    NotFound { resource: String },
    #[error("a user named {name} already exists")]
    Conflict { name: String },
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("invalid guess: {token}")]
    InvalidGuess { token: String },
    #[error("letter '{letter}' was already guessed")]
    RepeatedGuess { letter: char },
    #[error("game is already over")]
    TerminalGame,
    #[error("{reason}")]
    InvalidOperation { reason: String },
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(err: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            message: err.to_string(),
        }
    }
}
