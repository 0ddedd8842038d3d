//! Runtime configuration and platform directories.

use std::env;
use std::path::PathBuf;

const APP_NAME: &str = "sandlot";

/// Runtime configuration.
///
/// Compile-time game limits live in [`sandlot_core::GameConfig`]; this holds
/// the settings that vary per machine or per run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Root directory for finished games, career records and snapshots.
    pub save_data_dir: PathBuf,
    /// Write every in-progress state to disk after each play.
    pub enable_autosave: bool,
    /// Fixed session id; a timestamp-based id is generated when unset.
    pub session_id: Option<String>,
    /// Directory for per-session log files.
    pub log_dir: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_data_dir: data_dir(),
            enable_autosave: false,
            session_id: None,
            log_dir: log_dir(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SAVE_DATA_DIR` - Save directory (default: platform data dir)
    /// - `ENABLE_AUTOSAVE` - Snapshot every play (default: false)
    /// - `GAME_SESSION_ID` - Session id (default: generated)
    /// - `SANDLOT_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("SAVE_DATA_DIR") {
            config.save_data_dir = dir;
        }
        if let Some(enabled) = read_env_bool("ENABLE_AUTOSAVE") {
            config.enable_autosave = enabled;
        }
        if let Some(id) = read_env::<String>("GAME_SESSION_ID").filter(|id| !id.trim().is_empty()) {
            config.session_id = Some(id);
        }
        if let Some(dir) = read_env::<PathBuf>("SANDLOT_LOG_DIR") {
            config.log_dir = dir;
        }

        config
    }

    pub fn games_dir(&self) -> PathBuf {
        self.save_data_dir.join("games")
    }

    pub fn career_dir(&self) -> PathBuf {
        self.save_data_dir.join("players")
    }

    /// Snapshot directory for one session.
    pub fn states_dir(&self, session_id: &str) -> PathBuf {
        self.save_data_dir.join("sessions").join(session_id)
    }
}

/// Platform data directory, e.g. `~/.local/share/sandlot` on Linux.
///
/// Falls back to `./save_data` when no home directory is known.
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform log directory, e.g. `~/.cache/sandlot/logs` on Linux.
///
/// Falls back to `/tmp/sandlot/logs`.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| env::temp_dir().join(APP_NAME))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
