//! Seams to the outside world: drawing and player input.
//!
//! The engine never touches a terminal directly. It consumes a
//! [`Renderer`] (owned by the dispatcher) and an [`InputSource`] (owned by
//! the input actor), so the whole round can run against test doubles.

use std::future::Future;
use std::time::Duration;

use maze_world::{Direction, WorldState};
use tokio::sync::mpsc;

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Everything needed to draw one frame.
///
/// `state` is borrowed from the locked world, so a renderer can read it
/// but never mutate it.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub state: &'a WorldState,
    /// Time left before the countdown fires.
    pub remaining: Duration,
}

/// Draws frames. Called only by the dispatcher, one frame at a time.
pub trait Renderer {
    /// The error type for drawing operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Draws the grid, the player, live projectiles, the status line and
    /// the remaining time.
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;

    /// Releases the drawing surface once the round is over. Default: no-op.
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// An abstract player action, already decoded from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step one cell (and face that way).
    Move(Direction),
    /// Shoot along the current facing.
    Fire,
    /// Interact with the current cell.
    Interact,
    /// Leave the round.
    Quit,
}

/// A stream of player actions.
pub trait InputSource: Send + 'static {
    /// Waits for the next action. Returns `None` once the source is
    /// exhausted; no further actions will follow.
    fn next_action(&mut self) -> impl Future<Output = Option<Action>> + Send;
}

/// A channel of actions is an input source; handy for scripted input.
impl InputSource for mpsc::Receiver<Action> {
    fn next_action(&mut self) -> impl Future<Output = Option<Action>> + Send {
        self.recv()
    }
}
