//! Map description loading.
//!
//! One line per row, top to bottom, one symbol per cell:
//!
//! | Symbol | Meaning        |
//! |--------|----------------|
//! | `▤`    | wall           |
//! | `☠`    | enemy          |
//! | `♣`    | vegetation     |
//! | `☺`    | player start   |
//! | other  | empty          |
//!
//! Columns count characters, not bytes, so multi-byte glyphs occupy a
//! single cell.

use std::path::Path;

use crate::{Cell, EnemyId, Grid, MapError, Position};

/// A parsed map: the initial grid and where the player starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLayout {
    pub grid: Grid,
    /// `(0, 0)` when the map has no player-start symbol.
    pub player_start: Position,
}

impl MapLayout {
    /// Parses a map description. Never fails: unknown symbols are empty.
    pub fn parse(text: &str) -> Self {
        let mut next_enemy = 1u32;
        let mut player_start = None;
        let mut rows = Vec::new();

        for (y, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    Cell::WALL_SYMBOL => Cell::WALL,
                    Cell::VEGETATION_SYMBOL => Cell::VEGETATION,
                    Cell::ENEMY_SYMBOL => {
                        let id = EnemyId(next_enemy);
                        next_enemy += 1;
                        Cell::enemy(id)
                    }
                    Cell::PLAYER_SYMBOL => {
                        // The last start symbol wins.
                        player_start = Some(Position::new(x, y));
                        Cell::EMPTY
                    }
                    _ => Cell::EMPTY,
                };
                row.push(cell);
            }
            rows.push(row);
        }

        let player_start = player_start.unwrap_or_default();
        tracing::debug!(
            rows = rows.len(),
            enemies = next_enemy - 1,
            %player_start,
            "map parsed"
        );

        Self {
            grid: Grid::new(rows),
            player_start,
        }
    }

    /// Reads and parses a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loading map");
        Ok(Self::parse(&text))
    }
}
