//! Error types for scoring plays.
//!
//! Plays fail for two reasons only: the scorer asked for something the game
//! state does not allow (the UI should have disabled the button), or an
//! invariant broke, which is a bug in the engine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Base, Team};

/// A state invariant that failed after a play was applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("{outs} outs recorded without ending the half-inning")]
    TooManyOuts { outs: u8 },

    #[error("count {balls}-{strikes} is out of range")]
    InvalidCount { balls: u8, strikes: u8 },

    #[error("inning number must start at 1")]
    InningNotStarted,

    #[error("{team} player {player:?} has inconsistent counting stats")]
    InconsistentStats { team: Team, player: String },

    #[error("{team} scored {score} runs but players were credited {credited}")]
    UnbalancedRuns {
        team: Team,
        score: u32,
        credited: u32,
    },

    #[error("runner {runner:?} on {base} is not on the batting roster")]
    RunnerNotOnRoster { base: Base, runner: String },

    #[error("runner {runner:?} occupies more than one base")]
    DuplicateRunner { runner: String },

    #[error("lineup points at {expected:?} but {found:?} is batting")]
    BatterMismatch { expected: String, found: String },
}

/// Errors raised by hits, strikes and outs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("the game has already ended")]
    GameEnded,

    #[error("{team} player {name:?} has no box score entry")]
    UnknownPlayer { team: Team, name: String },

    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl GameError for PlayError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GameEnded => ErrorSeverity::Rejected,
            Self::UnknownPlayer { .. } | Self::Invariant(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameEnded => "PLAY_GAME_ENDED",
            Self::UnknownPlayer { .. } => "PLAY_UNKNOWN_PLAYER",
            Self::Invariant(_) => "PLAY_INVARIANT_VIOLATED",
        }
    }
}

/// Errors raised by a double play.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DoublePlayError {
    #[error("a double play needs at least one runner on base")]
    NoRunners,

    #[error("a double play cannot be turned with {outs} outs")]
    TooManyOuts { outs: u8 },

    #[error("several runners are on base; choose which one was retired")]
    BaseRequired,

    #[error("no runner on {0}")]
    EmptyBase(Base),

    #[error(transparent)]
    Play(#[from] PlayError),
}

impl From<InvariantViolation> for DoublePlayError {
    fn from(violation: InvariantViolation) -> Self {
        Self::Play(PlayError::Invariant(violation))
    }
}

impl GameError for DoublePlayError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Play(inner) => inner.severity(),
            _ => ErrorSeverity::Rejected,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoRunners => "DOUBLE_PLAY_NO_RUNNERS",
            Self::TooManyOuts { .. } => "DOUBLE_PLAY_TOO_MANY_OUTS",
            Self::BaseRequired => "DOUBLE_PLAY_BASE_REQUIRED",
            Self::EmptyBase(_) => "DOUBLE_PLAY_EMPTY_BASE",
            Self::Play(inner) => inner.error_code(),
        }
    }
}
