//! In-memory CareerStatsRepository implementation.

use std::sync::RwLock;

use sandlot_core::{CareerDelta, CareerStats};

use crate::repository::types::CareerLedger;
use crate::repository::{CareerStatsRepository, RepositoryError, Result};

#[derive(Default)]
pub struct InMemoryCareerRepository {
    ledger: RwLock<CareerLedger>,
}

impl InMemoryCareerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CareerStatsRepository for InMemoryCareerRepository {
    fn apply_game(&self, game_id: &str, deltas: &[CareerDelta]) -> Result<bool> {
        let mut ledger = self
            .ledger
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(ledger.apply_game(game_id, deltas))
    }

    fn get(&self, player: &str) -> Result<Option<CareerStats>> {
        let ledger = self
            .ledger
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(ledger.players.get(player).cloned())
    }

    fn list(&self) -> Result<Vec<CareerStats>> {
        let ledger = self
            .ledger
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(ledger.players.values().cloned().collect())
    }
}
