//! Unified error type for the maze game.

use std::path::PathBuf;

use maze_terminal::TerminalError;
use maze_world::MapError;

use crate::ConfigError;

/// Top-level error that wraps all crate-specific errors.
///
/// Every variant is fatal: they all happen during setup, before any round
/// task has started.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    /// The map file could not be loaded.
    #[error(transparent)]
    Map(#[from] MapError),

    /// The configuration file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The terminal could not be prepared.
    #[error(transparent)]
    Terminal(#[from] TerminalError),

    /// The log file could not be opened.
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: tracing_appender::rolling::InitError,
    },

    /// The log path does not end in a file name.
    #[error("log path {} does not name a file", .0.display())]
    LogPath(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_from_map_error() {
        let err = MapError::Read {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let maze_err: MazeError = err.into();
        assert!(matches!(maze_err, MazeError::Map(_)));
        assert!(maze_err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_from_config_error() {
        let source = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("maze.json"),
            source,
        };
        let maze_err: MazeError = err.into();
        assert!(matches!(maze_err, MazeError::Config(_)));
        assert!(maze_err.to_string().contains("maze.json"));
    }

    #[test]
    fn test_from_terminal_error() {
        let err = TerminalError::SetupFailed(io::Error::other("not a tty"));
        let maze_err: MazeError = err.into();
        assert!(matches!(maze_err, MazeError::Terminal(_)));
        assert!(maze_err.to_string().contains("not a tty"));
    }
}
