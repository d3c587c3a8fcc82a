//! # Maze
//!
//! A terminal maze shooter. The player walks a grid map, shoots the
//! enemies that chase them, and has to clear the map before the clock
//! runs out.
//!
//! The game is split across crates; this one ties them together:
//!
//! - `maze-world`: map loading and the shared world state
//! - `maze-tick`: fixed-cadence scheduling for the timed tasks
//! - `maze-engine`: the concurrent round (actors, events, dispatcher)
//! - `maze-terminal`: crossterm renderer and keyboard input
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use maze::prelude::*;
//!
//! # async fn demo() -> Result<(), MazeError> {
//! let config = GameConfig::default();
//! let outcome = maze::play("mapa.txt".as_ref(), &config).await?;
//! if let Some(message) = outcome.message() {
//!     println!("{message}");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod logging;

pub use config::{CONFIG_ENV, ConfigError, load_config};
pub use error::MazeError;
pub use logging::{LOG_ENV, init_logging};

use std::path::Path;

use maze_engine::{GameConfig, run_round};
use maze_terminal::{TerminalInput, TerminalRenderer, TerminalSession};
use maze_world::{MapLayout, Outcome, World};
use tracing::info;

/// Re-exports for game front ends.
pub mod prelude {
    pub use crate::{ConfigError, MazeError, load_config, play};
    pub use maze_engine::{Action, GameConfig, InputSource, Renderer, run_round};
    pub use maze_world::{DefeatCause, MapLayout, Outcome, World};
}

/// Plays one round on the map at `map_path` in the current terminal.
///
/// The map is loaded before the terminal is touched, so a bad path fails
/// without flickering the screen. The terminal is restored before this
/// returns, whatever the outcome.
pub async fn play(map_path: &Path, config: &GameConfig) -> Result<Outcome, MazeError> {
    let layout = MapLayout::load(map_path)?;
    info!(
        map = %map_path.display(),
        rows = layout.grid.height(),
        enemies = layout.grid.enemies().len(),
        "map loaded"
    );

    let session = TerminalSession::enter()?;
    let input = TerminalInput::spawn()?;
    // The clock starts once the screen is ready.
    let world = World::from_layout(layout, config.time_limit());

    let outcome = run_round(world, config, TerminalRenderer::stdout(), input).await;
    drop(session);

    Ok(outcome)
}
