//! Game-flow predicates shared by the reducer and the UI layer.

use crate::config::GameConfig;
use crate::state::{GameState, HalfInning};

/// Decides whether the game is over right after a half-inning change.
///
/// `inning`/`half` describe the half that is about to start.
/// - Starting the top of an inning past the limit ends the game unless tied.
/// - Starting the bottom of the final inning with the home team ahead ends it,
///   since the home team does not need to bat.
pub fn check_game_end(
    inning: u32,
    half: HalfInning,
    home_score: u32,
    away_score: u32,
    max_innings: u32,
) -> bool {
    match half {
        HalfInning::Top => inning > max_innings && home_score != away_score,
        HalfInning::Bottom => inning == max_innings && home_score > away_score,
    }
}

/// True when the home team has just taken the lead in the bottom of the final
/// inning or later.
pub fn check_walk_off(
    inning: u32,
    half: HalfInning,
    home_score: u32,
    away_score: u32,
    max_innings: u32,
) -> bool {
    half == HalfInning::Bottom && home_score > away_score && inning >= max_innings
}

/// A double play needs a runner to retire and must leave room for two outs.
pub fn can_double_play(state: &GameState) -> bool {
    !state.game_ended && !state.bases.is_empty() && state.outs < GameConfig::OUTS_PER_HALF_INNING - 1
}

/// True when the scorer has to say which runner was retired.
///
/// The runner is picked automatically when only one base is occupied, and it
/// does not matter when the play ends the half-inning anyway.
pub fn double_play_needs_base(state: &GameState) -> bool {
    can_double_play(state) && state.outs == 0 && state.bases.runner_count() > 1
}
