//! Terminal scorer for sandlot games.
//!
//! The binary reads a setup file, builds a [`sandlot_runtime::GameSession`]
//! and hands it to [`ScorerApp`], which turns typed commands into plays and
//! prints the scoreboard. Finished games are stored through the runtime's
//! file repositories.
pub mod app;
pub mod input;
pub mod logging;
pub mod scoreboard;

pub use app::{Flow, ScorerApp};
pub use input::{Command, InputError, parse_command};
