//! Log bootstrap.
//!
//! The game owns the terminal, so logs only ever go to a file. Without
//! one, logging stays off.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::MazeError;

/// Environment variable naming an optional log file.
pub const LOG_ENV: &str = "MAZE_LOG";

/// Installs a global subscriber that appends to the file at `path`.
///
/// Records are written by a background worker, so logging never blocks a
/// game task. Keep the returned guard alive until exit; dropping it
/// flushes what is still buffered.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Installing is
/// skipped if a global subscriber already exists.
pub fn init_logging(path: &Path) -> Result<WorkerGuard, MazeError> {
    let Some(file_name) = path.file_name() else {
        return Err(MazeError::LogPath(path.to_path_buf()));
    };
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(|source| MazeError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_under_a_file_is_reported() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = init_logging(&file.path().join("maze.log")).unwrap_err();
        assert!(matches!(err, MazeError::LogFile { .. }));
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        let err = init_logging(Path::new("..")).unwrap_err();
        assert!(matches!(err, MazeError::LogPath(_)));
    }

    #[test]
    fn test_log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.log");

        let guard = init_logging(&path).unwrap();
        drop(guard);
        assert!(path.is_file());
    }
}
