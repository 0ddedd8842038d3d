//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from setup validation, the rules engine and repositories so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use sandlot_core::{ErrorSeverity, ExecuteError, GameError, SetupError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid game setup: {0}")]
    Setup(#[from] SetupError),

    #[error("play rejected: {0}")]
    Play(#[from] ExecuteError),

    #[error("the game is over; no further plays can be recorded")]
    GameOver,

    #[error("the game is still in progress")]
    GameInProgress,

    #[error("stored snapshots do not form a game: {0}")]
    CorruptSnapshots(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Severity of errors raised by the rules engine; `None` for I/O and
    /// lifecycle errors.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        match self {
            Self::Setup(err) => Some(err.severity()),
            Self::Play(err) => Some(err.severity()),
            _ => None,
        }
    }
}
