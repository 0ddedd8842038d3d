//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use sandlot_core::GameState;

use super::write_atomic;
use crate::repository::{RepositoryError, Result, StateRepository};

/// File-based implementation of StateRepository.
///
/// Stores game states as individual bincode files indexed by play number.
///
/// # File Format
///
/// States are stored as `state_{play}.bin` in bincode format for:
/// - Compact size
/// - Fast serialization/deserialization
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    /// Create a new file-based state repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a state file.
    fn state_path(&self, play: u64) -> PathBuf {
        self.base_dir.join(format!("state_{}.bin", play))
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, play: u64, state: &GameState) -> Result<()> {
        let path = self.state_path(play);
        let bytes = bincode::serialize(state)?;
        write_atomic(&path, "bin.tmp", &bytes)?;

        tracing::debug!("Saved state[{}] to {}", play, path.display());

        Ok(())
    }

    fn load(&self, play: u64) -> Result<Option<GameState>> {
        let path = self.state_path(play);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let state: GameState = bincode::deserialize(&bytes)?;

        tracing::debug!("Loaded state[{}] from {}", play, path.display());

        Ok(Some(state))
    }

    fn exists(&self, play: u64) -> bool {
        self.state_path(play).exists()
    }

    fn delete(&self, play: u64) -> Result<()> {
        let path = self.state_path(play);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted state[{}]", play);
        }

        Ok(())
    }

    fn list_plays(&self) -> Result<Vec<u64>> {
        let mut plays = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(play_str) = filename
                    .strip_prefix("state_")
                    .and_then(|s| s.strip_suffix(".bin"))
                && let Ok(play) = play_str.parse::<u64>()
            {
                plays.push(play);
            }
        }

        plays.sort_unstable();
        Ok(plays)
    }
}
