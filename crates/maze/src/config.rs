//! Loading [`GameConfig`] overrides from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use maze_engine::GameConfig;
use tracing::info;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "MAZE_CONFIG";

/// Errors from reading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid config document.
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the config at `path`, or the defaults when `path` is `None`.
///
/// Fields missing from the file keep their defaults. Values that would
/// stall a round are replaced (see [`GameConfig::validated`]).
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };

    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: GameConfig = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), ?config, "config loaded");
    Ok(config.validated())
}
