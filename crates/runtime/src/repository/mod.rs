//! Repository layer for game data.
//!
//! Repositories handle everything that outlives a single play:
//! - Finished game documents
//! - Career batting records
//! - In-progress states (for crash recovery)

mod error;
pub mod file;
pub mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::{FileCareerRepository, FileGameRepository, FileStateRepository};
pub use memory::{InMemoryCareerRepository, InMemoryGameRepository, InMemoryStateRepo};
pub use traits::{CareerStatsRepository, GameRecordRepository, StateRepository};
pub use types::{CareerLedger, StoredGame, game_id};
