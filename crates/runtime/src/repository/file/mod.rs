//! File-based repository implementations.

mod career;
mod games;
mod state;

pub use career::FileCareerRepository;
pub use games::FileGameRepository;
pub use state::FileStateRepository;

use std::fs;
use std::path::Path;

use crate::repository::{RepositoryError, Result};

/// Writes `bytes` next to `path` and renames the temp file into place.
pub(crate) fn write_atomic(path: &Path, temp_extension: &str, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension(temp_extension);
    fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
    fs::rename(&temp_path, path).map_err(RepositoryError::Io)?;
    Ok(())
}
