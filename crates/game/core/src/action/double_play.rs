use crate::action::{
    ActionTransition, DoublePlayError, PlayError, PlayOutcome, check_invariants, ensure_in_progress,
};
use crate::config::GameConfig;
use crate::engine::innings::record_out;
use crate::env::GameEnv;
use crate::state::{Base, GameState};

/// Batter and one baserunner retired on the same play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoublePlayAction {
    /// Base of the retired runner, when the scorer chose one.
    pub base: Option<Base>,
}

impl DoublePlayAction {
    pub fn new(base: Option<Base>) -> Self {
        Self { base }
    }

    /// Resolves which runner is retired.
    ///
    /// With one out already recorded the play ends the half-inning and clears
    /// the bases, so the lead runner stands in for an unspecified choice.
    fn retired_base(&self, state: &GameState) -> Result<Base, DoublePlayError> {
        if let Some(base) = self.base {
            return if state.bases.is_occupied(base) {
                Ok(base)
            } else {
                Err(DoublePlayError::EmptyBase(base))
            };
        }

        if let Some(base) = state.bases.lone_runner() {
            return Ok(base);
        }
        if state.outs == 0 {
            return Err(DoublePlayError::BaseRequired);
        }

        Base::ALL
            .into_iter()
            .rev()
            .find(|base| state.bases.is_occupied(*base))
            .ok_or(DoublePlayError::NoRunners)
    }
}

impl ActionTransition for DoublePlayAction {
    type Error = DoublePlayError;
    type Result = PlayOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_in_progress(state)?;

        if state.bases.is_empty() {
            return Err(DoublePlayError::NoRunners);
        }
        if state.outs >= GameConfig::OUTS_PER_HALF_INNING - 1 {
            return Err(DoublePlayError::TooManyOuts { outs: state.outs });
        }

        self.retired_base(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayOutcome, Self::Error> {
        let base = self.retired_base(state)?;
        state.bases.take(base);

        let team = state.batting_team();
        let batter = state.current_batter.clone();
        state.teams[team]
            .player_mut(&batter)
            .ok_or(PlayError::UnknownPlayer { team, name: batter })?
            .record_out();

        // The first out never ends the half-inning; the second goes through
        // the regular out transition.
        state.outs += 1;
        let half_ended = record_out(state, env);

        let mut outcome = PlayOutcome::outs(2, half_ended);
        outcome.game_ended = state.game_ended;
        Ok(outcome)
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(check_invariants(state, env)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::{GameSetup, Matchup};

    fn matchup() -> Matchup {
        GameSetup {
            home_team: "Home".into(),
            away_team: "Away".into(),
            home_abbreviation: "HOM".into(),
            away_abbreviation: "AWY".into(),
            home_players: vec!["hana".into()],
            away_players: vec!["ana".into(), "ben".into(), "cy".into()],
            max_innings: 3,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn lone_runner_is_picked_automatically() {
        let matchup = matchup();
        let mut state = GameState::new(&matchup);
        state.bases.place(Base::Second, "cy");

        assert_eq!(
            DoublePlayAction::new(None).retired_base(&state),
            Ok(Base::Second)
        );
    }

    #[test]
    fn two_runners_with_no_outs_need_a_choice() {
        let matchup = matchup();
        let env = GameEnv::new(&matchup);
        let mut state = GameState::new(&matchup);
        state.bases.place(Base::First, "ben");
        state.bases.place(Base::Second, "cy");

        assert_eq!(
            DoublePlayAction::new(None).pre_validate(&state, &env),
            Err(DoublePlayError::BaseRequired)
        );

        state.outs = 1;
        assert_eq!(
            DoublePlayAction::new(None).retired_base(&state),
            Ok(Base::Second)
        );
    }

    #[test]
    fn chosen_base_must_hold_a_runner() {
        let matchup = matchup();
        let env = GameEnv::new(&matchup);
        let mut state = GameState::new(&matchup);
        state.bases.place(Base::First, "ben");

        assert_eq!(
            DoublePlayAction::new(Some(Base::Third)).pre_validate(&state, &env),
            Err(DoublePlayError::EmptyBase(Base::Third))
        );
    }

    #[test]
    fn rejected_with_two_outs_or_empty_bases() {
        let matchup = matchup();
        let env = GameEnv::new(&matchup);
        let mut state = GameState::new(&matchup);
        let action = DoublePlayAction::default();

        assert_eq!(
            action.pre_validate(&state, &env),
            Err(DoublePlayError::NoRunners)
        );

        state.bases.place(Base::First, "ben");
        state.outs = 2;
        assert_eq!(
            action.pre_validate(&state, &env),
            Err(DoublePlayError::TooManyOuts { outs: 2 })
        );
    }
}
