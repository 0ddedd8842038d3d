use crate::config::GameConfig;

/// Ball/strike count for the current plate appearance.
///
/// The third strike is a transition, never a stored value, so `strikes` stays
/// within `0..=2`. `balls` is carried for display but no play currently
/// advances it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Count {
    pub balls: u8,
    pub strikes: u8,
}

impl Count {
    pub const fn new() -> Self {
        Self {
            balls: 0,
            strikes: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Adds a strike. Returns true when this is the strike that retires the
    /// batter; the count itself is left for the caller to reset.
    pub fn add_strike(&mut self) -> bool {
        if self.strikes + 1 >= GameConfig::STRIKES_PER_OUT {
            true
        } else {
            self.strikes += 1;
            false
        }
    }

    pub fn is_valid(&self) -> bool {
        self.strikes < GameConfig::STRIKES_PER_OUT && self.balls <= GameConfig::MAX_TRACKED_BALLS
    }
}
