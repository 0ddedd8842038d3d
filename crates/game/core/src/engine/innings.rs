//! Lineup rotation and half-inning bookkeeping shared by every play.

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::rules::check_game_end;
use crate::state::{GameState, HalfInning, Team};

/// Moves the batting team to its next hitter.
pub(crate) fn advance_batter(state: &mut GameState, env: &GameEnv<'_>) {
    let team = state.batting_team();
    state.teams[team].next_slot += 1;
    load_batter(state, team, env);
}

/// Puts the hitter at `team`'s current lineup slot at the plate.
fn load_batter(state: &mut GameState, team: Team, env: &GameEnv<'_>) {
    let roster = env.roster(team);
    let index = state.teams[team].lineup_index(roster.len());
    state.current_batter_index = index;
    state.current_batter = roster.get(index).cloned().unwrap_or_default();
}

/// Records one out on the current batter's turn and returns `true` when it
/// was the third out of the half-inning.
///
/// The caller charges the batter's at-bat; this only moves the game along.
pub(crate) fn record_out(state: &mut GameState, env: &GameEnv<'_>) -> bool {
    state.count.reset();
    state.outs += 1;

    if state.outs < GameConfig::OUTS_PER_HALF_INNING {
        advance_batter(state, env);
        return false;
    }

    end_half_inning(state, env);
    true
}

/// Switches sides after the third out.
///
/// The retiring team's lineup moves past the hitter who made the last out so
/// it resumes with the following hitter next time up.
fn end_half_inning(state: &mut GameState, env: &GameEnv<'_>) {
    let retiring = state.batting_team();
    state.outs = 0;
    state.count.reset();
    state.bases.clear();
    state.teams[retiring].next_slot += 1;

    match state.half {
        HalfInning::Top => state.half = HalfInning::Bottom,
        HalfInning::Bottom => {
            state.inning += 1;
            state.half = HalfInning::Top;
        }
    }

    load_batter(state, state.batting_team(), env);

    if check_game_end(
        state.inning,
        state.half,
        state.home_score(),
        state.away_score(),
        env.max_innings(),
    ) {
        state.game_ended = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::{GameSetup, Matchup};
    use crate::state::Base;

    fn matchup(max_innings: u32) -> Matchup {
        GameSetup {
            home_team: "Home".into(),
            away_team: "Away".into(),
            home_abbreviation: "HOM".into(),
            away_abbreviation: "AWY".into(),
            home_players: vec!["hana".into(), "hugo".into(), "hilde".into()],
            away_players: vec!["ana".into(), "ben".into()],
            max_innings,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn lineup_wraps_around_short_roster() {
        let matchup = matchup(9);
        let env = GameEnv::new(&matchup);
        let mut state = GameState::new(&matchup);

        advance_batter(&mut state, &env);
        assert_eq!(state.current_batter, "ben");
        advance_batter(&mut state, &env);
        assert_eq!(state.current_batter, "ana");
        assert_eq!(state.current_batter_index, 0);
    }

    #[test]
    fn third_out_switches_sides_and_clears_bases() {
        let matchup = matchup(9);
        let env = GameEnv::new(&matchup);
        let mut state = GameState::new(&matchup);
        state.bases.place(Base::Second, "ben");

        assert!(!record_out(&mut state, &env));
        assert!(!record_out(&mut state, &env));
        assert!(record_out(&mut state, &env));

        assert_eq!(state.half, HalfInning::Bottom);
        assert_eq!(state.inning, 1);
        assert_eq!(state.outs, 0);
        assert!(state.bases.is_empty());
        assert_eq!(state.current_batter, "hana");
        // Three outs from slots 1..=3, so the away team resumes at slot 4.
        assert_eq!(state.teams[Team::Away].next_slot, 4);
    }

    #[test]
    fn leaving_the_bottom_half_starts_next_inning_with_saved_slot() {
        let matchup = matchup(9);
        let env = GameEnv::new(&matchup);
        let mut state = GameState::new(&matchup);
        for _ in 0..6 {
            record_out(&mut state, &env);
        }

        assert_eq!(state.inning, 2);
        assert_eq!(state.half, HalfInning::Top);
        // Away slot 4 on a two-player roster is the second hitter.
        assert_eq!(state.current_batter, "ben");
        assert!(!state.game_ended);
    }

    #[test]
    fn home_lead_ends_game_before_final_bottom_half() {
        let matchup = matchup(1);
        let env = GameEnv::new(&matchup);
        let mut state = GameState::new(&matchup);
        state.teams[Team::Home].score = 1;
        state.teams[Team::Home].player_mut("hana").unwrap().runs = 1;

        for _ in 0..3 {
            record_out(&mut state, &env);
        }
        assert!(state.game_ended);
        assert_eq!(state.half, HalfInning::Bottom);
    }
}
