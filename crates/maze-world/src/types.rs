//! Core value types: positions, directions, and enemy identities.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid coordinate. `y` is the row index, `x` the column within that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent position one cell toward `dir`.
    ///
    /// Returns `None` when the step would leave the grid through row 0 or
    /// column 0. Steps past the far edges are caught by [`Grid::get`].
    ///
    /// [`Grid::get`]: crate::Grid::get
    pub fn step(self, dir: Direction) -> Option<Self> {
        let Self { x, y } = self;
        Some(match dir {
            Direction::Up => Self::new(x, y.checked_sub(1)?),
            Direction::Down => Self::new(x, y.checked_add(1)?),
            Direction::Left => Self::new(x.checked_sub(1)?, y),
            Direction::Right => Self::new(x.checked_add(1)?, y),
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four axis-aligned headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    const fn bit(self) -> u8 {
        match self {
            Self::Up => 0b0001,
            Self::Down => 0b0010,
            Self::Left => 0b0100,
            Self::Right => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A set of directions, stored as four bits.
///
/// Enemy tasks use this to remember which headings they already tried
/// during the current period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    const FULL: u8 = 0b1111;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Adds `dir`. Returns `false` if it was already present.
    pub fn insert(&mut self, dir: Direction) -> bool {
        let fresh = !self.contains(dir);
        self.0 |= dir.bit();
        fresh
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn is_full(&self) -> bool {
        self.0 == Self::FULL
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

// ---------------------------------------------------------------------------
// EnemyId
// ---------------------------------------------------------------------------

/// Stable identity of an enemy, assigned at map load in reading order.
///
/// The grid stores the id inside the enemy cell, so an enemy task can tell
/// its own marker apart from any other enemy's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_moves_one_cell() {
        let p = Position::new(2, 3);
        assert_eq!(p.step(Direction::Up), Some(Position::new(2, 2)));
        assert_eq!(p.step(Direction::Down), Some(Position::new(2, 4)));
        assert_eq!(p.step(Direction::Left), Some(Position::new(1, 3)));
        assert_eq!(p.step(Direction::Right), Some(Position::new(3, 3)));
    }

    #[test]
    fn test_step_past_origin_is_none() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert!(origin.step(Direction::Down).is_some());
    }

    #[test]
    fn test_direction_set_tracks_insertions() {
        let mut set = DirectionSet::empty();
        assert!(set.is_empty());
        assert!(set.insert(Direction::Left));
        assert!(!set.insert(Direction::Left));
        assert!(set.contains(Direction::Left));
        assert!(!set.contains(Direction::Right));
        assert_eq!(set.len(), 1);

        for dir in Direction::ALL {
            set.insert(dir);
        }
        assert!(set.is_full());

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Position::new(4, 0).to_string(), "(4, 0)");
        assert_eq!(EnemyId(7).to_string(), "E-7");
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(Direction::default(), Direction::Right);
    }
}
