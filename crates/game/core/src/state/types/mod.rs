pub mod bases;
pub mod common;
pub mod count;
pub mod stats;
pub mod team;

// Re-export identity types
pub use common::{HalfInning, PerTeam, Team};

// Re-export diamond state
pub use bases::{Base, BaseState};
pub use count::Count;

// Re-export box score types
pub use stats::{HitKind, PlayerGameStats};
pub use team::TeamState;
