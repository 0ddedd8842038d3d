//! Final box score and result of a completed game.
//!
//! [`GameSummary::reduce`] folds the final [`GameState`] into the persisted
//! summary: innings played, per-player lines with rate stats, scores, winner
//! and how the game ended.

use std::collections::BTreeMap;

use crate::setup::Matchup;
use crate::state::{GameState, HalfInning, PlayerGameStats, Team, TeamState};

/// Which side won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Winner {
    Home,
    Away,
    Tie,
}

impl Winner {
    pub fn team(self) -> Option<Team> {
        match self {
            Winner::Home => Some(Team::Home),
            Winner::Away => Some(Team::Away),
            Winner::Tie => None,
        }
    }
}

/// How the game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEndReason {
    #[strum(serialize = "regulation")]
    #[cfg_attr(feature = "serde", serde(rename = "regulation"))]
    Regulation,
    #[strum(serialize = "extra innings")]
    #[cfg_attr(feature = "serde", serde(rename = "extra innings"))]
    ExtraInnings,
    #[strum(serialize = "walk-off")]
    #[cfg_attr(feature = "serde", serde(rename = "walk-off"))]
    WalkOff,
    #[strum(serialize = "tie game")]
    #[cfg_attr(feature = "serde", serde(rename = "tie game"))]
    TieGame,
}

/// One player's counting stats plus rate stats rounded to three places.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SummaryLine {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stats: PlayerGameStats,
    pub batting_average: f64,
    pub slugging_percentage: f64,
}

impl From<&PlayerGameStats> for SummaryLine {
    fn from(stats: &PlayerGameStats) -> Self {
        Self {
            stats: *stats,
            batting_average: round3(stats.batting_average()),
            slugging_percentage: round3(stats.slugging_percentage()),
        }
    }
}

/// Persisted summary of a finished game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameSummary {
    pub total_innings: u32,
    pub home_player_stats: BTreeMap<String, SummaryLine>,
    pub away_player_stats: BTreeMap<String, SummaryLine>,
    pub home_score: u32,
    pub away_score: u32,
    pub winner: Winner,
    pub game_end_reason: GameEndReason,
    /// Wall-clock length of the game in minutes; 0 when unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: u32,
}

impl GameSummary {
    pub fn reduce(state: &GameState, matchup: &Matchup) -> Self {
        let total_innings = innings_played(state);
        let home_score = state.home_score();
        let away_score = state.away_score();

        let winner = match home_score.cmp(&away_score) {
            std::cmp::Ordering::Greater => Winner::Home,
            std::cmp::Ordering::Less => Winner::Away,
            std::cmp::Ordering::Equal => Winner::Tie,
        };

        let max_innings = matchup.max_innings();
        let game_end_reason = if winner == Winner::Tie {
            GameEndReason::TieGame
        } else if total_innings > max_innings {
            GameEndReason::ExtraInnings
        } else if winner == Winner::Home
            && state.half == HalfInning::Bottom
            && total_innings == max_innings
        {
            GameEndReason::WalkOff
        } else {
            GameEndReason::Regulation
        };

        Self {
            total_innings,
            home_player_stats: summary_lines(&state.teams[Team::Home]),
            away_player_stats: summary_lines(&state.teams[Team::Away]),
            home_score,
            away_score,
            winner,
            game_end_reason,
            duration: 0,
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::Home => self.home_score,
            Team::Away => self.away_score,
        }
    }

    pub fn player_stats(&self, team: Team) -> &BTreeMap<String, SummaryLine> {
        match team {
            Team::Home => &self.home_player_stats,
            Team::Away => &self.away_player_stats,
        }
    }
}

/// Innings completed: the current inning counts once its bottom half began.
fn innings_played(state: &GameState) -> u32 {
    match state.half {
        HalfInning::Top => state.inning.saturating_sub(1),
        HalfInning::Bottom => state.inning,
    }
}

fn summary_lines(team: &TeamState) -> BTreeMap<String, SummaryLine> {
    team.stats
        .iter()
        .map(|(name, stats)| (name.clone(), SummaryLine::from(stats)))
        .collect()
}

/// Rounds half away from zero to three decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
