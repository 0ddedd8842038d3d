//! Shared types for repository layer.

mod career;
mod game;

pub use career::CareerLedger;
pub use game::{StoredGame, game_id};
