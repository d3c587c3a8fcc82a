//! Error types for the world layer.

use std::path::PathBuf;

/// Errors that can occur while loading a map.
///
/// Unrecognized symbols are not errors; they load as empty cells.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("cannot read map {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
