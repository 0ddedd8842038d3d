//! Error types for the play execution pipeline.

use crate::action::{ActionTransition, DoublePlayAction, HitAction, OutAction, StrikeAction};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a play through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("hit failed: {0}")]
    Hit(TransitionPhaseError<<HitAction as ActionTransition>::Error>),

    #[error("strike failed: {0}")]
    Strike(TransitionPhaseError<<StrikeAction as ActionTransition>::Error>),

    #[error("out failed: {0}")]
    Out(TransitionPhaseError<<OutAction as ActionTransition>::Error>),

    #[error("double play failed: {0}")]
    DoublePlay(TransitionPhaseError<<DoublePlayAction as ActionTransition>::Error>),
}

impl ExecuteError {
    /// Pipeline stage that rejected the play.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Hit(err) | Self::Strike(err) | Self::Out(err) => err.phase,
            Self::DoublePlay(err) => err.phase,
        }
    }

    fn inner(&self) -> &dyn GameError {
        match self {
            Self::Hit(err) | Self::Strike(err) | Self::Out(err) => &err.error,
            Self::DoublePlay(err) => &err.error,
        }
    }
}

impl GameError for ExecuteError {
    /// A failure after `pre_validate` always indicates an engine bug, whatever
    /// the underlying error says.
    fn severity(&self) -> ErrorSeverity {
        match self.phase() {
            TransitionPhase::PreValidate => self.inner().severity(),
            TransitionPhase::Apply | TransitionPhase::PostValidate => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        self.inner().error_code()
    }
}
