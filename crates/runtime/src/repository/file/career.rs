//! File-based CareerStatsRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sandlot_core::{CareerDelta, CareerStats};

use super::write_atomic;
use crate::repository::types::CareerLedger;
use crate::repository::{CareerStatsRepository, RepositoryError, Result};

const LEDGER_FILE: &str = "career.json";

/// Keeps every career record in a single `career.json` ledger.
///
/// Writes are read-modify-write under a process-local lock; the ledger file
/// is replaced atomically.
pub struct FileCareerRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCareerRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(LEDGER_FILE),
            write_lock: Mutex::new(()),
        })
    }

    fn read_ledger(&self) -> Result<CareerLedger> {
        if !self.path.exists() {
            return Ok(CareerLedger::default());
        }
        let json = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl CareerStatsRepository for FileCareerRepository {
    fn apply_game(&self, game_id: &str, deltas: &[CareerDelta]) -> Result<bool> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let mut ledger = self.read_ledger()?;
        if !ledger.apply_game(game_id, deltas) {
            tracing::debug!("Career stats for game {} already applied", game_id);
            return Ok(false);
        }

        let json = serde_json::to_string_pretty(&ledger)?;
        write_atomic(&self.path, "json.tmp", json.as_bytes())?;

        tracing::info!(
            "Applied career stats for game {} ({} players)",
            game_id,
            deltas.len()
        );
        Ok(true)
    }

    fn get(&self, player: &str) -> Result<Option<CareerStats>> {
        Ok(self.read_ledger()?.players.remove(player))
    }

    fn list(&self) -> Result<Vec<CareerStats>> {
        Ok(self.read_ledger()?.players.into_values().collect())
    }
}
