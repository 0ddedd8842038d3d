//! Play execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! routes each [`PlayEvent`] through the transition phases and surfaces rich
//! error information to the caller. Plays are atomic: a rejected play leaves
//! the state exactly as it was.

mod errors;
pub(crate) mod innings;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{PlayEvent, PlayOutcome};
use crate::env::GameEnv;
use crate::state::GameState;

/// Game engine that applies scoring plays to a borrowed state.
///
/// All state mutations flow through the three-phase pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Read access to the state the engine is driving.
    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Applies `event` to the state.
    ///
    /// The transition runs against a scratch copy which replaces the borrowed
    /// state only when every phase succeeds.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        event: &PlayEvent,
    ) -> Result<PlayOutcome, ExecuteError> {
        let mut next = self.state.clone();
        let outcome = transition::execute_transition(event, &mut next, &env)?;
        *self.state = next;
        Ok(outcome)
    }
}

/// Pure reducer: returns the state after `event`.
///
/// Plays the state does not allow (anything after the game ended, a double
/// play with the bases empty or two outs) leave the state unchanged.
pub fn apply_event(state: &GameState, event: &PlayEvent, env: &GameEnv<'_>) -> GameState {
    try_apply_event(state, event, env)
        .map(|(next, _)| next)
        .unwrap_or_else(|_| state.clone())
}

/// Like [`apply_event`] but reports the outcome or the reason for rejection.
pub fn try_apply_event(
    state: &GameState,
    event: &PlayEvent,
    env: &GameEnv<'_>,
) -> Result<(GameState, PlayOutcome), ExecuteError> {
    let mut next = state.clone();
    let outcome = transition::execute_transition(event, &mut next, env)?;
    Ok((next, outcome))
}
