//! In-memory GameRecordRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::record::GameRecord;
use crate::repository::types::{StoredGame, game_id};
use crate::repository::{GameRecordRepository, RepositoryError, Result};

/// Keeps finished games in a map keyed by game id.
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<String, GameRecord>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameRecordRepository for InMemoryGameRepository {
    fn save(&self, record: &GameRecord) -> Result<String> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if let Some((id, _)) = games.iter().find(|(_, stored)| stored.same_game(record)) {
            return Ok(id.clone());
        }

        let id = (0..)
            .map(|attempt| game_id(record, attempt))
            .find(|id| !games.contains_key(id))
            .unwrap_or_default();
        games.insert(id.clone(), record.clone());
        Ok(id)
    }

    fn load(&self, id: &str) -> Result<Option<GameRecord>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<StoredGame>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut stored: Vec<StoredGame> = games
            .iter()
            .map(|(id, record)| StoredGame {
                id: id.clone(),
                record: record.clone(),
            })
            .collect();
        StoredGame::sort_newest_first(&mut stored);
        Ok(stored)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        games
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound {
                kind: "game",
                id: id.to_string(),
            })
    }
}
