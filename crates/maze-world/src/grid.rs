//! The fixed-size cell grid.

use crate::{Cell, EnemyId, Position};

/// A two-dimensional array of cells, addressed as `(x, y)`.
///
/// Rows may have different lengths. Every accessor is bounds-checked and
/// returns `None` outside the grid instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.rows.get(pos.y)?.get(pos.x)
    }

    pub(crate) fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.rows.get_mut(pos.y)?.get_mut(pos.x)
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Every enemy marker with its position, in reading order.
    pub fn enemies(&self) -> Vec<(EnemyId, Position)> {
        let mut found = Vec::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(id) = cell.enemy_id() {
                    found.push((id, Position::new(x, y)));
                }
            }
        }
        found
    }
}
