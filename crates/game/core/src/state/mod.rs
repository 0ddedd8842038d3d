//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the scoreboard, the
//! diamond and each team's box score. Runtime layers clone or query this state
//! but replace it exclusively through the engine.
pub mod types;

pub use types::{
    Base, BaseState, Count, HalfInning, HitKind, PerTeam, PlayerGameStats, Team, TeamState,
};

use crate::setup::Matchup;

/// Canonical snapshot of one game in progress.
///
/// Snapshots are plain values: the engine produces a new one for every play
/// and never shares nested data between them, so a stored snapshot is never
/// affected by later plays.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameState {
    /// Current inning, starting at 1.
    pub inning: u32,
    pub half: HalfInning,
    /// Outs in the current half-inning, `0..=2`.
    pub outs: u8,
    pub count: Count,
    pub bases: BaseState,
    pub teams: PerTeam<TeamState>,

    /// Name of the player at the plate.
    pub current_batter: String,
    /// Index of `current_batter` in the batting team's roster.
    pub current_batter_index: usize,

    /// Set once the game is decided; no further plays are applied.
    pub game_ended: bool,
}

impl GameState {
    /// Opening state: top of the first, leadoff hitter of the away team at bat.
    pub fn new(matchup: &Matchup) -> Self {
        let teams = PerTeam::from_fn(|team| TeamState::new(matchup.roster(team)));
        let leadoff = matchup
            .roster(Team::Away)
            .first()
            .cloned()
            .unwrap_or_default();

        Self {
            inning: 1,
            half: HalfInning::Top,
            outs: 0,
            count: Count::new(),
            bases: BaseState::empty(),
            teams,
            current_batter: leadoff,
            current_batter_index: 0,
            game_ended: false,
        }
    }

    #[inline]
    pub fn batting_team(&self) -> Team {
        self.half.batting_team()
    }

    #[inline]
    pub fn is_top(&self) -> bool {
        self.half.is_top()
    }

    pub fn score(&self, team: Team) -> u32 {
        self.teams[team].score
    }

    pub fn home_score(&self) -> u32 {
        self.score(Team::Home)
    }

    pub fn away_score(&self) -> u32 {
        self.score(Team::Away)
    }

    /// Box score line of `player` on `team`.
    pub fn player_stats(&self, team: Team, player: &str) -> Option<&PlayerGameStats> {
        self.teams[team].player(player)
    }
}
