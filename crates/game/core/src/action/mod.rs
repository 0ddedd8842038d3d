//! Scoring plays and the transition contract they implement.
//!
//! Every play the scorer can record is a [`PlayEvent`]. The engine routes each
//! event to a concrete transition type ([`HitAction`], [`StrikeAction`],
//! [`OutAction`], [`DoublePlayAction`]) and drives it through the
//! pre-validate / apply / post-validate pipeline defined by
//! [`ActionTransition`].
mod double_play;
mod error;
mod hit;
pub mod invariants;
mod out;
mod strike;
mod types;

pub use double_play::DoublePlayAction;
pub use error::{DoublePlayError, InvariantViolation, PlayError};
pub use hit::HitAction;
pub use invariants::check_invariants;
pub use out::OutAction;
pub use strike::StrikeAction;
pub use types::PlayOutcome;

use crate::env::GameEnv;
use crate::state::{Base, GameState, HitKind};

/// Defines how a play mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks receive
/// read-only access to the matchup via [`GameEnv`] and must stay side-effect
/// free.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the play by mutating the game state directly. Implementations
    /// should assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A play recorded by the scorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum PlayEvent {
    Single,
    Double,
    Triple,
    HomeRun,
    /// One strike; the third retires the batter.
    Strike,
    /// Batter retired on a ball in play. Runners hold.
    Out,
    /// Batter and one runner retired on the same play.
    ///
    /// `base` names the retired runner. It may be omitted when only one
    /// runner is on base or when the play ends the half-inning anyway.
    DoublePlay {
        #[cfg_attr(feature = "serde", serde(default))]
        base: Option<Base>,
    },
}

impl PlayEvent {
    /// Hit classification for the four hit events.
    pub fn hit_kind(&self) -> Option<HitKind> {
        match self {
            Self::Single => Some(HitKind::Single),
            Self::Double => Some(HitKind::Double),
            Self::Triple => Some(HitKind::Triple),
            Self::HomeRun => Some(HitKind::HomeRun),
            Self::Strike | Self::Out | Self::DoublePlay { .. } => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.hit_kind().is_some()
    }
}

impl From<HitKind> for PlayEvent {
    fn from(kind: HitKind) -> Self {
        match kind {
            HitKind::Single => Self::Single,
            HitKind::Double => Self::Double,
            HitKind::Triple => Self::Triple,
            HitKind::HomeRun => Self::HomeRun,
        }
    }
}

/// Shared pre-condition: nothing is recorded once the game is decided.
pub(crate) fn ensure_in_progress(state: &GameState) -> Result<(), PlayError> {
    if state.game_ended {
        Err(PlayError::GameEnded)
    } else {
        Ok(())
    }
}
