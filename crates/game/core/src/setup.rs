//! Game setup input and its validation.
//!
//! [`GameSetup`] is the raw form handed over by the roster-entry screen. It is
//! turned into a [`Matchup`] by [`GameSetup::validate`], and every other part
//! of the engine works only with validated matchups.

use std::collections::HashSet;

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{PerTeam, Team};

/// Raw setup as entered by the scorer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameSetup {
    pub home_team: String,
    pub away_team: String,
    pub home_abbreviation: String,
    pub away_abbreviation: String,
    pub home_players: Vec<String>,
    pub away_players: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_max_innings"))]
    pub max_innings: u32,
}

#[cfg(feature = "serde")]
fn default_max_innings() -> u32 {
    GameConfig::DEFAULT_MAX_INNINGS
}

/// Reasons a setup cannot start a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("{0} team name is missing")]
    MissingTeamName(Team),

    #[error("{team} team name {name:?} must be at most {max} letters, digits or spaces", max = GameConfig::MAX_TEAM_NAME_LEN)]
    InvalidTeamName { team: Team, name: String },

    #[error("{0} team abbreviation is missing")]
    MissingAbbreviation(Team),

    #[error("{team} abbreviation {abbreviation:?} must be at most {max} letters", max = GameConfig::MAX_ABBREVIATION_LEN)]
    InvalidAbbreviation { team: Team, abbreviation: String },

    #[error("{0} roster needs at least one player")]
    EmptyRoster(Team),

    #[error("{team} roster has {count} players, the limit is {max}", max = GameConfig::MAX_PLAYERS_PER_TEAM)]
    RosterTooLarge { team: Team, count: usize },

    #[error("{0} roster contains a blank player name")]
    BlankPlayerName(Team),

    #[error("player {name:?} appears more than once across both rosters")]
    DuplicatePlayer { name: String },

    #[error("inning limit {0} must be between {min} and {max}", min = GameConfig::MIN_INNINGS, max = GameConfig::MAX_INNINGS)]
    InvalidInningLimit(u32),
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTeamName(_) => "SETUP_MISSING_TEAM_NAME",
            Self::InvalidTeamName { .. } => "SETUP_INVALID_TEAM_NAME",
            Self::MissingAbbreviation(_) => "SETUP_MISSING_ABBREVIATION",
            Self::InvalidAbbreviation { .. } => "SETUP_INVALID_ABBREVIATION",
            Self::EmptyRoster(_) => "SETUP_EMPTY_ROSTER",
            Self::RosterTooLarge { .. } => "SETUP_ROSTER_TOO_LARGE",
            Self::BlankPlayerName(_) => "SETUP_BLANK_PLAYER_NAME",
            Self::DuplicatePlayer { .. } => "SETUP_DUPLICATE_PLAYER",
            Self::InvalidInningLimit(_) => "SETUP_INVALID_INNING_LIMIT",
        }
    }
}

/// Validated identity and batting order of one team.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamInfo {
    pub name: String,
    pub abbreviation: String,
    /// Batting order; names are trimmed with internal whitespace collapsed.
    pub players: Vec<String>,
}

/// Validated setup: both teams plus the game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub teams: PerTeam<TeamInfo>,
    pub config: GameConfig,
}

impl Matchup {
    pub fn team(&self, team: Team) -> &TeamInfo {
        &self.teams[team]
    }

    pub fn roster(&self, team: Team) -> &[String] {
        &self.teams[team].players
    }

    pub fn max_innings(&self) -> u32 {
        self.config.max_innings
    }

    /// Team whose roster contains `player`, compared by normalized name.
    pub fn team_of(&self, player: &str) -> Option<Team> {
        let key = normalize_name(player);
        Team::ALL.into_iter().find(|&team| {
            self.roster(team)
                .iter()
                .any(|name| normalize_name(name) == key)
        })
    }
}

impl GameSetup {
    /// Checks the setup and produces a [`Matchup`].
    ///
    /// Away-side problems are reported before home-side ones, and team fields
    /// before rosters, so the first error matches the order of the setup form.
    pub fn validate(&self) -> Result<Matchup, SetupError> {
        let config = GameConfig::with_max_innings(self.max_innings);
        if !config.has_valid_innings() {
            return Err(SetupError::InvalidInningLimit(self.max_innings));
        }

        let away = validate_team(
            Team::Away,
            &self.away_team,
            &self.away_abbreviation,
            &self.away_players,
        )?;
        let home = validate_team(
            Team::Home,
            &self.home_team,
            &self.home_abbreviation,
            &self.home_players,
        )?;

        let mut seen = HashSet::new();
        for name in away.players.iter().chain(&home.players) {
            if !seen.insert(normalize_name(name)) {
                return Err(SetupError::DuplicatePlayer { name: name.clone() });
            }
        }

        Ok(Matchup {
            teams: PerTeam::new(away, home),
            config,
        })
    }
}

fn validate_team(
    team: Team,
    name: &str,
    abbreviation: &str,
    players: &[String],
) -> Result<TeamInfo, SetupError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SetupError::MissingTeamName(team));
    }
    if name.chars().count() > GameConfig::MAX_TEAM_NAME_LEN
        || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
    {
        return Err(SetupError::InvalidTeamName {
            team,
            name: name.to_string(),
        });
    }

    let abbreviation = abbreviation.trim().to_ascii_uppercase();
    if abbreviation.is_empty() {
        return Err(SetupError::MissingAbbreviation(team));
    }
    if abbreviation.len() > GameConfig::MAX_ABBREVIATION_LEN
        || !abbreviation.chars().all(|c| c.is_ascii_alphabetic())
    {
        return Err(SetupError::InvalidAbbreviation { team, abbreviation });
    }

    if players.is_empty() {
        return Err(SetupError::EmptyRoster(team));
    }
    if players.len() > GameConfig::MAX_PLAYERS_PER_TEAM {
        return Err(SetupError::RosterTooLarge {
            team,
            count: players.len(),
        });
    }

    let players = players
        .iter()
        .map(|player| {
            let cleaned = collapse_whitespace(player);
            if cleaned.is_empty() {
                Err(SetupError::BlankPlayerName(team))
            } else {
                Ok(cleaned)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TeamInfo {
        name: name.to_string(),
        abbreviation,
        players,
    })
}

fn collapse_whitespace(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Storage key for a player: trimmed, whitespace collapsed, lowercase.
///
/// Two roster entries with the same key are the same person.
pub fn normalize_name(name: &str) -> String {
    collapse_whitespace(name).to_lowercase()
}

/// Display form of a stored name: each word capitalized.
pub fn display_name(name: &str) -> String {
    normalize_name(name)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
