//! In-memory StateRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use sandlot_core::GameState;

use crate::repository::{RepositoryError, Result, StateRepository};

/// In-memory implementation of StateRepository.
///
/// Stores states indexed by play number for testing and local development.
#[derive(Default)]
pub struct InMemoryStateRepo {
    states: RwLock<BTreeMap<u64, GameState>>,
}

impl InMemoryStateRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an opening state at play 0.
    pub fn with_initial_state(initial_state: GameState) -> Self {
        let mut states = BTreeMap::new();
        states.insert(0, initial_state);
        Self {
            states: RwLock::new(states),
        }
    }
}

impl StateRepository for InMemoryStateRepo {
    fn save(&self, play: u64, state: &GameState) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.insert(play, state.clone());
        Ok(())
    }

    fn load(&self, play: u64) -> Result<Option<GameState>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.get(&play).cloned())
    }

    fn exists(&self, play: u64) -> bool {
        self.states
            .read()
            .map(|states| states.contains_key(&play))
            .unwrap_or(false)
    }

    fn delete(&self, play: u64) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.remove(&play);
        Ok(())
    }

    fn list_plays(&self) -> Result<Vec<u64>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.keys().copied().collect())
    }
}
