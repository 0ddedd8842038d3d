use crate::action::{ActionTransition, PlayError, PlayOutcome, check_invariants, ensure_in_progress};
use crate::engine::innings::advance_batter;
use crate::env::GameEnv;
use crate::rules::check_walk_off;
use crate::state::{Base, BaseState, GameState, HitKind};

/// Single, double, triple or home run by the current batter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitAction {
    pub kind: HitKind,
}

impl HitAction {
    pub fn new(kind: HitKind) -> Self {
        Self { kind }
    }
}

/// Runners who crossed the plate on a hit.
#[derive(Debug, Default)]
struct Advance {
    scored: Vec<String>,
    batter_scored: bool,
}

/// Moves every runner and the batter `bases` bases forward.
///
/// Lead runners move first so nobody is overwritten on the way.
fn advance_runners(bases: &mut BaseState, batter: &str, gained: u8) -> Advance {
    let mut advance = Advance::default();

    for base in Base::ALL.into_iter().rev() {
        let Some(runner) = bases.take(base) else {
            continue;
        };
        match base.advanced_by(gained) {
            Some(target) => {
                bases.place(target, runner);
            }
            None => advance.scored.push(runner),
        }
    }

    match Base::from_number(gained) {
        Some(target) => {
            bases.place(target, batter);
        }
        None => advance.batter_scored = true,
    }

    advance
}

impl ActionTransition for HitAction {
    type Error = PlayError;
    type Result = PlayOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_in_progress(state)
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayOutcome, Self::Error> {
        let team = state.batting_team();
        let batter = state.current_batter.clone();
        let advance = advance_runners(&mut state.bases, &batter, self.kind.bases());

        let team_state = &mut state.teams[team];
        for runner in &advance.scored {
            team_state
                .player_mut(runner)
                .ok_or_else(|| PlayError::UnknownPlayer {
                    team,
                    name: runner.clone(),
                })?
                .runs += 1;
        }

        let runs = advance.scored.len() as u32 + u32::from(advance.batter_scored);
        let batter_stats =
            team_state
                .player_mut(&batter)
                .ok_or_else(|| PlayError::UnknownPlayer {
                    team,
                    name: batter.clone(),
                })?;
        batter_stats.record_hit(self.kind);
        batter_stats.rbis += runs;
        if advance.batter_scored {
            batter_stats.runs += 1;
        }
        team_state.score += runs;

        state.count.reset();
        advance_batter(state, env);

        let mut outcome = PlayOutcome::runs(runs);
        if check_walk_off(
            state.inning,
            state.half,
            state.home_score(),
            state.away_score(),
            env.max_innings(),
        ) {
            state.game_ended = true;
            outcome.walk_off = true;
        }
        outcome.game_ended = state.game_ended;

        Ok(outcome)
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(check_invariants(state, env)?)
    }
}
