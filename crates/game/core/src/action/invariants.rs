//! Post-conditions every play must leave intact.

use std::collections::HashSet;

use super::error::InvariantViolation;
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{GameState, Team};

/// Verifies the structural invariants of `state`.
///
/// Runs as the `post_validate` phase of every play. A failure here means the
/// reducer produced a state it should never reach.
pub fn check_invariants(state: &GameState, env: &GameEnv<'_>) -> Result<(), InvariantViolation> {
    if state.inning == 0 {
        return Err(InvariantViolation::InningNotStarted);
    }
    if state.outs >= GameConfig::OUTS_PER_HALF_INNING {
        return Err(InvariantViolation::TooManyOuts { outs: state.outs });
    }
    if !state.count.is_valid() {
        return Err(InvariantViolation::InvalidCount {
            balls: state.count.balls,
            strikes: state.count.strikes,
        });
    }

    for team in Team::ALL {
        let team_state = &state.teams[team];
        if let Some((player, _)) = team_state
            .stats
            .iter()
            .find(|(_, stats)| !stats.is_consistent())
        {
            return Err(InvariantViolation::InconsistentStats {
                team,
                player: player.clone(),
            });
        }

        let credited = team_state.credited_runs();
        if credited != team_state.score {
            return Err(InvariantViolation::UnbalancedRuns {
                team,
                score: team_state.score,
                credited,
            });
        }
    }

    let batting = state.batting_team();
    let roster = env.roster(batting);
    let mut runners = HashSet::new();
    for (base, runner) in state.bases.occupied() {
        if !roster.iter().any(|name| name == runner) {
            return Err(InvariantViolation::RunnerNotOnRoster {
                base,
                runner: runner.to_string(),
            });
        }
        if !runners.insert(runner) {
            return Err(InvariantViolation::DuplicateRunner {
                runner: runner.to_string(),
            });
        }
    }

    let expected_index = state.teams[batting].lineup_index(roster.len());
    let expected = roster.get(expected_index).cloned().unwrap_or_default();
    if state.current_batter_index != expected_index || state.current_batter != expected {
        return Err(InvariantViolation::BatterMismatch {
            expected,
            found: state.current_batter.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::GameSetup;
    use crate::state::Base;

    fn matchup() -> crate::setup::Matchup {
        GameSetup {
            home_team: "Home".into(),
            away_team: "Away".into(),
            home_abbreviation: "HOM".into(),
            away_abbreviation: "AWY".into(),
            home_players: vec!["hana".into(), "hugo".into()],
            away_players: vec!["ana".into(), "ben".into()],
            max_innings: 3,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn fresh_state_satisfies_invariants() {
        let matchup = matchup();
        let state = GameState::new(&matchup);
        assert_eq!(check_invariants(&state, &GameEnv::new(&matchup)), Ok(()));
    }

    #[test]
    fn detects_runner_from_fielding_team() {
        let matchup = matchup();
        let mut state = GameState::new(&matchup);
        state.bases.place(Base::First, "hana");

        assert!(matches!(
            check_invariants(&state, &GameEnv::new(&matchup)),
            Err(InvariantViolation::RunnerNotOnRoster { base: Base::First, .. })
        ));
    }

    #[test]
    fn detects_runs_without_a_scorer() {
        let matchup = matchup();
        let mut state = GameState::new(&matchup);
        state.teams[Team::Away].score = 1;

        assert_eq!(
            check_invariants(&state, &GameEnv::new(&matchup)),
            Err(InvariantViolation::UnbalancedRuns {
                team: Team::Away,
                score: 1,
                credited: 0
            })
        );
    }

    #[test]
    fn detects_same_runner_on_two_bases() {
        let matchup = matchup();
        let mut state = GameState::new(&matchup);
        state.bases.place(Base::First, "ben");
        state.bases.place(Base::Third, "ben");

        assert!(matches!(
            check_invariants(&state, &GameEnv::new(&matchup)),
            Err(InvariantViolation::DuplicateRunner { .. })
        ));
    }
}
