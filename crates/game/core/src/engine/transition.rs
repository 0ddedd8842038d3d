//! Play transition dispatch and execution logic.

use crate::action::{
    ActionTransition, DoublePlayAction, HitAction, OutAction, PlayEvent, PlayOutcome,
    StrikeAction,
};
use crate::env::GameEnv;
use crate::state::{GameState, HitKind};

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes a play to its transition.
///
/// `state` may be partially mutated when this returns an error; callers run it
/// against a scratch copy.
pub(super) fn execute_transition(
    event: &PlayEvent,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<PlayOutcome, ExecuteError> {
    match *event {
        PlayEvent::Single => execute_hit(HitKind::Single, state, env),
        PlayEvent::Double => execute_hit(HitKind::Double, state, env),
        PlayEvent::Triple => execute_hit(HitKind::Triple, state, env),
        PlayEvent::HomeRun => execute_hit(HitKind::HomeRun, state, env),
        PlayEvent::Strike => {
            drive_transition(&StrikeAction, state, env).map_err(ExecuteError::Strike)
        }
        PlayEvent::Out => drive_transition(&OutAction, state, env).map_err(ExecuteError::Out),
        PlayEvent::DoublePlay { base } => {
            drive_transition(&DoublePlayAction::new(base), state, env)
                .map_err(ExecuteError::DoublePlay)
        }
    }
}

fn execute_hit(
    kind: HitKind,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<PlayOutcome, ExecuteError> {
    drive_transition(&HitAction::new(kind), state, env).map_err(ExecuteError::Hit)
}
