//! Read-only game facts consulted by the reducer.
//!
//! The rosters, team identities and inning limit never change during a game,
//! so they are kept out of [`GameState`](crate::GameState) and handed to every
//! transition through [`GameEnv`] instead.

use crate::config::GameConfig;
use crate::setup::{Matchup, TeamInfo};
use crate::state::Team;

/// Borrowed view of the static data a play transition may read.
#[derive(Clone, Copy, Debug)]
pub struct GameEnv<'a> {
    matchup: &'a Matchup,
}

impl<'a> GameEnv<'a> {
    pub fn new(matchup: &'a Matchup) -> Self {
        Self { matchup }
    }

    pub fn matchup(&self) -> &'a Matchup {
        self.matchup
    }

    pub fn config(&self) -> &'a GameConfig {
        &self.matchup.config
    }

    pub fn team(&self, team: Team) -> &'a TeamInfo {
        self.matchup.team(team)
    }

    /// Batting order of `team`.
    pub fn roster(&self, team: Team) -> &'a [String] {
        self.matchup.roster(team)
    }

    pub fn max_innings(&self) -> u32 {
        self.matchup.max_innings()
    }
}

impl<'a> From<&'a Matchup> for GameEnv<'a> {
    fn from(matchup: &'a Matchup) -> Self {
        Self::new(matchup)
    }
}
