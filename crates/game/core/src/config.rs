/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameConfig {
    /// Number of regulation innings. Ties after this many innings continue
    /// into extra innings.
    pub max_innings: u32,
}

impl GameConfig {
    // ===== setup limits =====
    pub const MIN_INNINGS: u32 = 1;
    pub const MAX_INNINGS: u32 = 9;
    pub const MAX_PLAYERS_PER_TEAM: usize = 9;
    pub const MAX_TEAM_NAME_LEN: usize = 13;
    pub const MAX_ABBREVIATION_LEN: usize = 3;

    // ===== rules of play =====
    pub const OUTS_PER_HALF_INNING: u8 = 3;
    pub const STRIKES_PER_OUT: u8 = 3;
    /// Balls are tracked for display only; no walk is ever awarded.
    pub const MAX_TRACKED_BALLS: u8 = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_INNINGS: u32 = 9;

    pub fn new() -> Self {
        Self {
            max_innings: Self::DEFAULT_MAX_INNINGS,
        }
    }

    pub fn with_max_innings(max_innings: u32) -> Self {
        Self { max_innings }
    }

    /// Returns true if the inning limit is within the supported range.
    pub fn has_valid_innings(&self) -> bool {
        (Self::MIN_INNINGS..=Self::MAX_INNINGS).contains(&self.max_innings)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
