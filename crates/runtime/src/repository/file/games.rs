//! File-based GameRecordRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::write_atomic;
use crate::record::GameRecord;
use crate::repository::types::{StoredGame, game_id};
use crate::repository::{GameRecordRepository, RepositoryError, Result};

/// Stores each finished game as `game_{id}.json` (pretty-printed).
pub struct FileGameRepository {
    base_dir: PathBuf,
}

impl FileGameRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    fn game_path(&self, id: &str) -> PathBuf {
        self.base_dir.join(format!("game_{}.json", id))
    }

    fn stored_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();

        for entry in fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)? {
            let path = entry.map_err(RepositoryError::Io)?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename
                    .strip_prefix("game_")
                    .and_then(|s| s.strip_suffix(".json"))
            {
                ids.push(id.to_string());
            }
        }

        Ok(ids)
    }
}

impl GameRecordRepository for FileGameRepository {
    fn save(&self, record: &GameRecord) -> Result<String> {
        if let Some(stored) = self
            .list()?
            .into_iter()
            .find(|stored| stored.record.same_game(record))
        {
            tracing::info!("Game {} already stored", stored.id);
            return Ok(stored.id);
        }

        let id = (0..)
            .map(|attempt| game_id(record, attempt))
            .find(|id| !self.game_path(id).exists())
            .unwrap_or_default();
        let path = self.game_path(&id);

        let json = serde_json::to_string_pretty(record)?;
        write_atomic(&path, "json.tmp", json.as_bytes())?;

        tracing::info!("Saved game {} to {}", id, path.display());

        Ok(id)
    }

    fn load(&self, id: &str) -> Result<Option<GameRecord>> {
        let path = self.game_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        let record: GameRecord = serde_json::from_str(&json)?;

        tracing::debug!("Loaded game {} from {}", id, path.display());

        Ok(Some(record))
    }

    fn list(&self) -> Result<Vec<StoredGame>> {
        let mut games = Vec::new();
        for id in self.stored_ids()? {
            if let Some(record) = self.load(&id)? {
                games.push(StoredGame { id, record });
            }
        }
        StoredGame::sort_newest_first(&mut games);
        Ok(games)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let path = self.game_path(id);

        if !path.exists() {
            return Err(RepositoryError::NotFound {
                kind: "game",
                id: id.to_string(),
            });
        }

        fs::remove_file(&path).map_err(RepositoryError::Io)?;
        tracing::info!("Deleted game {}", id);
        Ok(())
    }
}
