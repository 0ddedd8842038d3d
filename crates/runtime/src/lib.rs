//! Runtime orchestration for scorekeeping sessions.
//!
//! This crate wraps the pure rules in `sandlot-core` with everything that
//! touches the outside world: the session that owns the current state and its
//! undo history, the persisted game document, repositories for finished games,
//! career records and in-progress snapshots, and read-side helpers for the
//! timeline and leaderboards.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session controller
//! - [`record`] defines the persisted game document
//! - [`repository`] provides in-memory and file-backed stores
//! - [`leaders`] and [`replay`] read finished games and career records
//! - [`api`] exposes the error types downstream clients interact with
//! - [`config`] resolves runtime settings from the environment
pub mod api;
pub mod config;
pub mod leaders;
pub mod record;
pub mod replay;
pub mod repository;
pub mod session;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use leaders::{LeaderStat, leaders};
pub use record::{GameRecord, StateDocument};
pub use replay::ReplayCursor;
pub use repository::{
    CareerLedger, CareerStatsRepository, FileCareerRepository, FileGameRepository,
    FileStateRepository, GameRecordRepository, InMemoryCareerRepository,
    InMemoryGameRepository, InMemoryStateRepo, RepositoryError, StateRepository, StoredGame,
};
pub use session::GameSession;
