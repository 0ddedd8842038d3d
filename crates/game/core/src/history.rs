//! Snapshot stack backing single-step undo.

use crate::state::GameState;

/// Prior game states, most recent last.
///
/// The session pushes the pre-play snapshot before committing each play and
/// pops it to undo. Snapshots are owned values, so a popped state is exactly
/// the state that was pushed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HistoryStack {
    snapshots: Vec<GameState>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: GameState) {
        self.snapshots.push(state);
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop()
    }

    pub fn peek(&self) -> Option<&GameState> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Snapshots in the order they were pushed.
    pub fn snapshots(&self) -> &[GameState] {
        &self.snapshots
    }
}
