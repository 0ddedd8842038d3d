//! Per-game increments to career batting records.

use std::collections::BTreeSet;

use crate::setup::{Matchup, normalize_name};
use crate::state::{PlayerGameStats, Team};
use crate::summary::{GameSummary, round3};

/// Counters one finished game adds to a player's career record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CareerDelta {
    /// Normalized player key.
    pub player: String,
    /// Team name the player batted for in this game.
    pub team: String,
    pub games_played: u32,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stats: PlayerGameStats,
}

/// Deltas for every rostered player of a finished game, home team first and
/// each team in batting order.
///
/// Players without a box score line still played the game and get a zeroed
/// delta with `games_played = 1`.
pub fn career_deltas(summary: &GameSummary, matchup: &Matchup) -> Vec<CareerDelta> {
    [Team::Home, Team::Away]
        .into_iter()
        .flat_map(|team| {
            let info = matchup.team(team);
            let lines = summary.player_stats(team);
            info.players.iter().map(move |player| CareerDelta {
                player: normalize_name(player),
                team: info.name.clone(),
                games_played: 1,
                stats: lines.get(player).map(|line| line.stats).unwrap_or_default(),
            })
        })
        .collect()
}

/// Aggregate batting record of one player across games.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CareerStats {
    pub name: String,
    /// Every team the player has batted for.
    pub teams: BTreeSet<String>,
    pub games_played: u32,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub totals: PlayerGameStats,
}

impl CareerStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Folds one game's delta into the record.
    pub fn apply(&mut self, delta: &CareerDelta) {
        self.teams.insert(delta.team.clone());
        self.games_played += delta.games_played;

        let totals = &mut self.totals;
        let stats = &delta.stats;
        totals.at_bats += stats.at_bats;
        totals.hits += stats.hits;
        totals.runs += stats.runs;
        totals.rbis += stats.rbis;
        totals.singles += stats.singles;
        totals.doubles += stats.doubles;
        totals.triples += stats.triples;
        totals.homers += stats.homers;
        totals.total_bases += stats.total_bases;
    }

    pub fn batting_average(&self) -> f64 {
        round3(self.totals.batting_average())
    }

    pub fn slugging_percentage(&self) -> f64 {
        round3(self.totals.slugging_percentage())
    }

    pub fn played_for(&self, team: &str) -> bool {
        self.teams.contains(team)
    }
}
