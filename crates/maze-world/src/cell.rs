//! Grid cells.

use crate::EnemyId;

/// What occupies a grid cell.
///
/// The player is never stored here; its position is tracked separately
/// by [`Player`](crate::Player).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Wall,
    Vegetation,
    /// An enemy marker, tagged with the enemy's stable id.
    Enemy(EnemyId),
}

/// A single grid cell.
///
/// `tangible` means "blocks entry". It is fixed when the cell is created;
/// moving content around copies whole cells, never flips the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    tangible: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell { kind: CellKind::Empty, tangible: false };
    pub const WALL: Cell = Cell { kind: CellKind::Wall, tangible: true };
    pub const VEGETATION: Cell = Cell { kind: CellKind::Vegetation, tangible: true };

    pub const WALL_SYMBOL: char = '▤';
    pub const ENEMY_SYMBOL: char = '☠';
    pub const VEGETATION_SYMBOL: char = '♣';
    pub const PLAYER_SYMBOL: char = '☺';

    pub const fn enemy(id: EnemyId) -> Self {
        Self { kind: CellKind::Enemy(id), tangible: true }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn is_tangible(&self) -> bool {
        self.tangible
    }

    /// The enemy whose marker sits in this cell, if any.
    pub fn enemy_id(&self) -> Option<EnemyId> {
        match self.kind {
            CellKind::Enemy(id) => Some(id),
            _ => None,
        }
    }

    /// Display glyph for this cell.
    pub fn symbol(&self) -> char {
        match self.kind {
            CellKind::Empty => ' ',
            CellKind::Wall => Self::WALL_SYMBOL,
            CellKind::Vegetation => Self::VEGETATION_SYMBOL,
            CellKind::Enemy(_) => Self::ENEMY_SYMBOL,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}
