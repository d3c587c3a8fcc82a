/// Errors that can occur while driving the terminal.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Entering raw mode or the alternate screen failed.
    #[error("terminal setup failed: {0}")]
    SetupFailed(#[source] std::io::Error),

    /// Writing a frame failed.
    #[error("draw failed: {0}")]
    DrawFailed(#[source] std::io::Error),

    /// Starting the keyboard reader failed.
    #[error("input reader failed: {0}")]
    InputFailed(#[source] std::io::Error),
}
