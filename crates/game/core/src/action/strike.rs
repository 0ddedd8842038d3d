use crate::action::{ActionTransition, PlayError, PlayOutcome, check_invariants, ensure_in_progress};
use crate::engine::innings::record_out;
use crate::env::GameEnv;
use crate::state::GameState;

/// A called or swinging strike on the current batter.
///
/// The third strike is a strikeout: the batter is charged an at-bat and an
/// out is recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeAction;

impl ActionTransition for StrikeAction {
    type Error = PlayError;
    type Result = PlayOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_in_progress(state)
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayOutcome, Self::Error> {
        if !state.count.add_strike() {
            return Ok(PlayOutcome::default());
        }

        let team = state.batting_team();
        let batter = state.current_batter.clone();
        state.teams[team]
            .player_mut(&batter)
            .ok_or(PlayError::UnknownPlayer { team, name: batter })?
            .record_out();

        let half_ended = record_out(state, env);
        let mut outcome = PlayOutcome::outs(1, half_ended);
        outcome.game_ended = state.game_ended;
        Ok(outcome)
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(check_invariants(state, env)?)
    }
}
