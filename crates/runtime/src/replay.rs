//! Step-by-step cursor over a finished game's timeline.

use crate::record::{GameRecord, StateDocument};

/// Cursor over the states of a [`GameRecord`], starting at the opening state.
#[derive(Clone, Debug)]
pub struct ReplayCursor<'a> {
    states: &'a [StateDocument],
    position: usize,
}

impl<'a> ReplayCursor<'a> {
    pub fn new(record: &'a GameRecord) -> Self {
        Self::over(&record.game_history)
    }

    pub fn over(states: &'a [StateDocument]) -> Self {
        Self {
            states,
            position: 0,
        }
    }

    /// State under the cursor; `None` only for an empty timeline.
    pub fn current(&self) -> Option<&'a StateDocument> {
        self.states.get(self.position)
    }

    /// Moves forward one state. Stays put at the end.
    pub fn next(&mut self) -> Option<&'a StateDocument> {
        if !self.can_go_forward() {
            return None;
        }
        self.position += 1;
        self.current()
    }

    /// Moves back one state. Stays put at the start.
    pub fn prev(&mut self) -> Option<&'a StateDocument> {
        if !self.can_go_back() {
            return None;
        }
        self.position -= 1;
        self.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.position > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.states.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
