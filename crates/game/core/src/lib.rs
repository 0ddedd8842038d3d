//! Deterministic scorekeeping rules shared by the runtime and the client.
//!
//! `sandlot-core` defines the canonical rules (setup validation, plays,
//! innings, game end) and exposes pure APIs with no I/O. All state mutation
//! flows through [`engine::GameEngine`] or the total reducer
//! [`engine::apply_event`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod career;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod history;
pub mod rules;
pub mod setup;
pub mod state;
pub mod summary;

pub use action::{
    ActionTransition, DoublePlayAction, DoublePlayError, HitAction, InvariantViolation,
    OutAction, PlayError, PlayEvent, PlayOutcome, StrikeAction, check_invariants,
};
pub use career::{CareerDelta, CareerStats, career_deltas};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError, apply_event, try_apply_event,
};
pub use env::GameEnv;
pub use error::{ErrorSeverity, GameError};
pub use history::HistoryStack;
pub use rules::{can_double_play, check_game_end, check_walk_off, double_play_needs_base};
pub use setup::{GameSetup, Matchup, SetupError, TeamInfo, display_name, normalize_name};
pub use state::{
    Base, BaseState, Count, GameState, HalfInning, HitKind, PerTeam, PlayerGameStats, Team,
    TeamState,
};
pub use summary::{GameEndReason, GameSummary, SummaryLine, Winner, round3};
