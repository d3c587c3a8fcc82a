//! Terminal adapters for the maze game.
//!
//! Implements the engine's [`Renderer`](maze_engine::Renderer) and
//! [`InputSource`](maze_engine::InputSource) seams on top of a raw-mode
//! terminal.
//!
//! # Feature Flags
//!
//! - `crossterm` (default): terminal backend via `crossterm`

mod error;
#[cfg(feature = "crossterm")]
mod input;
#[cfg(feature = "crossterm")]
mod renderer;
#[cfg(feature = "crossterm")]
mod session;

pub use error::TerminalError;
#[cfg(feature = "crossterm")]
pub use input::{TerminalInput, map_key};
#[cfg(feature = "crossterm")]
pub use renderer::{HELP_LINE, TerminalRenderer};
#[cfg(feature = "crossterm")]
pub use session::TerminalSession;
