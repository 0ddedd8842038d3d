//! Repository contracts for finished games, career records and in-progress
//! snapshots.

use sandlot_core::{CareerDelta, CareerStats, GameState};

use super::error::Result;
use super::types::StoredGame;
use crate::record::GameRecord;

/// Repository for completed game documents.
pub trait GameRecordRepository: Send + Sync {
    /// Stores `record` and returns the id it was stored under.
    ///
    /// A record from a session that already has a stored game is not written
    /// again; the existing id is returned instead.
    fn save(&self, record: &GameRecord) -> Result<String>;

    fn load(&self, id: &str) -> Result<Option<GameRecord>>;

    /// Every stored game, newest first.
    fn list(&self) -> Result<Vec<StoredGame>>;

    /// Removes a game. Deleting an unknown id is an error.
    fn delete(&self, id: &str) -> Result<()>;
}

/// Repository for per-player career records.
///
/// Deltas are applied per game id: applying the same game twice leaves the
/// records untouched.
pub trait CareerStatsRepository: Send + Sync {
    /// Folds one game's deltas into the career records.
    ///
    /// Returns `false` if `game_id` was already applied.
    fn apply_game(&self, game_id: &str, deltas: &[CareerDelta]) -> Result<bool>;

    /// Career record for a normalized player key.
    fn get(&self, player: &str) -> Result<Option<CareerStats>>;

    /// All career records ordered by player key.
    fn list(&self) -> Result<Vec<CareerStats>>;

    /// Players who have batted for `team`, best batting average first.
    fn by_team(&self, team: &str) -> Result<Vec<CareerStats>> {
        let mut players: Vec<_> = self
            .list()?
            .into_iter()
            .filter(|player| player.played_for(team))
            .collect();
        players.sort_by(|a, b| b.batting_average().total_cmp(&a.batting_average()));
        Ok(players)
    }
}

/// Repository for in-progress game states.
///
/// States are indexed by play number: 0 is the opening state and `n` the
/// state after the n-th recorded play.
pub trait StateRepository: Send + Sync {
    /// Save a game state indexed by play number
    fn save(&self, play: u64, state: &GameState) -> Result<()>;

    /// Load a game state by play number
    fn load(&self, play: u64) -> Result<Option<GameState>>;

    /// Check if a state exists
    fn exists(&self, play: u64) -> bool;

    /// Delete a state
    fn delete(&self, play: u64) -> Result<()>;

    /// List all stored play numbers in ascending order
    fn list_plays(&self) -> Result<Vec<u64>>;

    /// Most recent stored state, if any.
    fn latest(&self) -> Result<Option<(u64, GameState)>> {
        let Some(play) = self.list_plays()?.last().copied() else {
            return Ok(None);
        };
        Ok(self.load(play)?.map(|state| (play, state)))
    }

    /// Delete every stored state.
    fn clear(&self) -> Result<usize> {
        let plays = self.list_plays()?;
        for play in &plays {
            self.delete(*play)?;
        }
        Ok(plays.len())
    }
}
