//! Persisted shape of a finished game.
//!
//! [`GameRecord`] is the document handed to the game store once a game ends.
//! Field names follow the store's camelCase schema, and every state in the
//! record is flattened to a [`StateDocument`] so readers do not depend on the
//! engine's internal layout.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sandlot_core::{
    Base, GameState, GameSummary, HalfInning, Matchup, PlayerGameStats, Team,
};
use serde::{Deserialize, Serialize};

/// Flat, store-facing view of one [`GameState`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDocument {
    pub inning: u32,
    pub is_top_inning: bool,
    pub outs: u8,
    pub home_score: u32,
    pub away_score: u32,
    pub home_player_stats: BTreeMap<String, PlayerGameStats>,
    pub away_player_stats: BTreeMap<String, PlayerGameStats>,
    pub balls: u8,
    pub strikes: u8,
    pub first_base: Option<String>,
    pub second_base: Option<String>,
    pub third_base: Option<String>,
    pub current_batter: String,
    pub current_batter_index: usize,
    pub current_batter_is_home: bool,
    pub next_home_batter: u32,
    pub next_away_batter: u32,
    pub game_ended: bool,
}

impl From<&GameState> for StateDocument {
    fn from(state: &GameState) -> Self {
        let runner = |base| state.bases.runner(base).map(str::to_string);
        let home = &state.teams[Team::Home];
        let away = &state.teams[Team::Away];

        Self {
            inning: state.inning,
            is_top_inning: state.half == HalfInning::Top,
            outs: state.outs,
            home_score: home.score,
            away_score: away.score,
            home_player_stats: home.stats.clone(),
            away_player_stats: away.stats.clone(),
            balls: state.count.balls,
            strikes: state.count.strikes,
            first_base: runner(Base::First),
            second_base: runner(Base::Second),
            third_base: runner(Base::Third),
            current_batter: state.current_batter.clone(),
            current_batter_index: state.current_batter_index,
            current_batter_is_home: state.batting_team() == Team::Home,
            next_home_batter: home.next_slot,
            next_away_batter: away.next_slot,
            game_ended: state.game_ended,
        }
    }
}

/// Document persisted for one completed game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_abbreviation: String,
    pub away_abbreviation: String,
    pub home_players: Vec<String>,
    pub away_players: Vec<String>,
    pub max_innings: u32,

    /// Every state from the opening state through the final one.
    pub game_history: Vec<StateDocument>,
    #[serde(default)]
    pub game_history_count: usize,

    pub final_game_state: StateDocument,
    pub game_summary: GameSummary,

    pub game_date: DateTime<Utc>,

    /// Id of the session that scored the game. Stores treat a second record
    /// from the same session as the same game.
    #[serde(default)]
    pub session_id: String,
}

impl GameRecord {
    pub fn new<'a>(
        matchup: &Matchup,
        history: impl IntoIterator<Item = &'a GameState>,
        final_state: &GameState,
        summary: GameSummary,
        game_date: DateTime<Utc>,
    ) -> Self {
        let home = matchup.team(Team::Home);
        let away = matchup.team(Team::Away);
        let game_history: Vec<StateDocument> =
            history.into_iter().map(StateDocument::from).collect();

        Self {
            home_team: home.name.clone(),
            away_team: away.name.clone(),
            home_abbreviation: home.abbreviation.clone(),
            away_abbreviation: away.abbreviation.clone(),
            home_players: home.players.clone(),
            away_players: away.players.clone(),
            max_innings: matchup.max_innings(),
            game_history_count: game_history.len(),
            game_history,
            final_game_state: StateDocument::from(final_state),
            game_summary: summary,
            game_date,
            session_id: String::new(),
        }
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Whether both records were scored by the same session.
    pub fn same_game(&self, other: &GameRecord) -> bool {
        !self.session_id.is_empty() && self.session_id == other.session_id
    }

    /// Headline like `JET 3, SHK 5`.
    pub fn headline(&self) -> String {
        format!(
            "{} {}, {} {}",
            self.away_abbreviation,
            self.game_summary.away_score,
            self.home_abbreviation,
            self.game_summary.home_score
        )
    }
}
