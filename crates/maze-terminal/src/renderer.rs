//! Full-frame terminal renderer.
//!
//! Layout, top to bottom:
//!
//! ```text
//! row 0..h     the grid, with the player and live projectiles on top
//! row h + 1    status message
//! row h + 2    remaining time
//! row h + 3    key help
//! ```
//!
//! All commands for a frame are batched with `queue!` and flushed once.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use maze_engine::{Frame, Renderer};
use maze_world::{Cell, CellKind, Position};

use crate::TerminalError;

/// Fixed instructions shown under the timer.
pub const HELP_LINE: &str = "Use WASD to move, E to interact, Space or F to fire. ESC to quit.";

const PROJECTILE_SYMBOL: char = '*';
const TEXT: Color = Color::DarkGrey;

/// Draws frames onto a terminal (or any writer).
#[derive(Debug)]
pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
}

impl TerminalRenderer<Stdout> {
    /// Renders to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let state = frame.state;
        let out = &mut self.out;

        queue!(out, ResetColor, Clear(ClearType::All))?;

        for (y, row) in state.grid().rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                put_cell(out, Position::new(x, y), *cell)?;
            }
        }

        for projectile in state.live_projectiles() {
            put(out, projectile.position, PROJECTILE_SYMBOL, TEXT, Color::Reset)?;
        }
        put(out, state.player().position, Cell::PLAYER_SYMBOL, TEXT, Color::Reset)?;

        let below = state.grid().height();
        let timer = format!(
            "You have {} seconds to finish the game!",
            frame.remaining.as_secs()
        );
        for (offset, text) in [(1, state.status()), (2, timer.as_str()), (3, HELP_LINE)] {
            let Some(row) = screen_coord(below + offset) else {
                break;
            };
            queue!(out, MoveTo(0, row), SetForegroundColor(TEXT), Print(text), ResetColor)?;
        }

        out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    type Error = TerminalError;

    fn render(&mut self, frame: &Frame<'_>) -> Result<(), TerminalError> {
        self.draw(frame).map_err(TerminalError::DrawFailed)
    }

    fn close(&mut self) -> Result<(), TerminalError> {
        queue!(self.out, ResetColor)
            .and_then(|()| self.out.flush())
            .map_err(TerminalError::DrawFailed)
    }
}

fn put_cell(out: &mut impl Write, pos: Position, cell: Cell) -> io::Result<()> {
    match cell.kind() {
        CellKind::Empty => Ok(()),
        CellKind::Wall => {
            let Some((x, y)) = screen_pos(pos) else {
                return Ok(());
            };
            queue!(
                out,
                MoveTo(x, y),
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Black),
                SetBackgroundColor(Color::DarkGrey),
                Print(cell.symbol()),
                SetAttribute(Attribute::Reset),
                ResetColor
            )
        }
        CellKind::Enemy(_) => put(out, pos, cell.symbol(), Color::Red, Color::Reset),
        CellKind::Vegetation => put(out, pos, cell.symbol(), Color::Green, Color::Reset),
    }
}

fn put(out: &mut impl Write, pos: Position, symbol: char, fg: Color, bg: Color) -> io::Result<()> {
    // Cells beyond the terminal's coordinate range are not drawn.
    let Some((x, y)) = screen_pos(pos) else {
        return Ok(());
    };
    queue!(
        out,
        MoveTo(x, y),
        SetForegroundColor(fg),
        SetBackgroundColor(bg),
        Print(symbol),
        ResetColor
    )
}

fn screen_pos(pos: Position) -> Option<(u16, u16)> {
    Some((screen_coord(pos.x)?, screen_coord(pos.y)?))
}

fn screen_coord(v: usize) -> Option<u16> {
    u16::try_from(v).ok()
}
