//! `sandlot` binary entry point.
//!
//! Usage: `sandlot <setup.json>`
//!
//! The setup file holds the two team names, their abbreviations, both batting
//! orders and optionally `maxInnings`. Configuration comes from the
//! environment (see [`RuntimeConfig::from_env`]); a `.env` file is honored.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use sandlot_client::{ScorerApp, logging};
use sandlot_core::GameSetup;
use sandlot_runtime::{
    FileCareerRepository, FileGameRepository, FileStateRepository, GameSession, RuntimeConfig,
    StateRepository,
};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let Some(setup_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: sandlot <setup.json>");
    };

    let config = RuntimeConfig::from_env();
    let session_id = config
        .session_id
        .clone()
        .unwrap_or_else(|| format!("session_{}", Utc::now().timestamp()));
    logging::setup_logging(&config.log_dir, &session_id)?;

    tracing::info!("Starting sandlot scorer");
    tracing::info!("Session ID: {}", session_id);
    tracing::info!("Save directory: {}", config.save_data_dir.display());
    tracing::info!("Autosave: {}", config.enable_autosave);

    let setup = read_setup(&setup_path)?;
    let session = open_session(&config, &setup, &session_id)?;

    let games = Arc::new(
        FileGameRepository::new(config.games_dir()).context("failed to open game store")?,
    );
    let careers = Arc::new(
        FileCareerRepository::new(config.career_dir()).context("failed to open career store")?,
    );

    let mut app = ScorerApp::new(session, games, careers);
    let stdin = io::stdin();
    app.run(stdin.lock(), io::stdout())?;

    tracing::info!("Scorer shutdown complete");
    Ok(())
}

fn read_setup(path: &Path) -> Result<GameSetup> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read setup file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("setup file {} is not valid JSON", path.display()))
}

/// Starts the game, or picks it up from autosaved snapshots of the same
/// session id.
fn open_session(config: &RuntimeConfig, setup: &GameSetup, session_id: &str) -> Result<GameSession> {
    let matchup = setup.validate().context("invalid game setup")?;

    if !config.enable_autosave {
        return Ok(GameSession::from_matchup(matchup).with_id(session_id));
    }

    let states: Arc<dyn StateRepository> = Arc::new(
        FileStateRepository::new(config.states_dir(session_id))
            .context("failed to open snapshot store")?,
    );
    let session = GameSession::resume(matchup, states).context("failed to resume game")?;
    Ok(session.with_id(session_id))
}
