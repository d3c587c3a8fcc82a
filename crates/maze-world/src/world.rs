//! The shared world: grid, player, and projectiles behind a single lock.
//!
//! [`World`] is a cheap-to-clone handle. The state itself, [`WorldState`],
//! can only be reached through [`World::lock`], so every read used for a
//! movement decision and every mutation happens inside one critical
//! section. Operations on `WorldState` are short, synchronous
//! check-and-mutate steps; none of them await.
//!
//! One lock covers the whole grid *and* the player, rather than per-cell
//! locks, so that the swap performed by a move is never half-visible.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;

use crate::{Cell, Direction, EnemyId, Grid, MapLayout, Outcome, Position};

// ---------------------------------------------------------------------------
// Actors
// ---------------------------------------------------------------------------

/// The player: position, facing, and what it is standing on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub position: Position,
    pub facing: Direction,
    /// The cell content displaced by the player's current position,
    /// restored to the grid when the player moves away.
    pub last_occupied: Cell,
}

/// A shot travelling in a fixed direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projectile {
    pub position: Position,
    pub direction: Direction,
    /// Once `false`, the projectile is inert: not drawn, never advanced.
    pub enabled: bool,
}

/// Handle to a projectile registered with [`WorldState::fire`].
///
/// Slots of disabled projectiles are reused; the generation tells a
/// handle to the old shot apart from one to the new shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectileHandle {
    slot: usize,
    generation: u32,
}

#[derive(Debug)]
struct ProjectileSlot {
    generation: u32,
    projectile: Projectile,
}

/// Result of advancing a projectile by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileStep {
    /// The projectile now occupies this cell.
    Moved(Position),
    /// Hit an obstacle or the edge of the grid. Now disabled.
    Blocked,
    /// Hit an enemy, whose marker was cleared. Now disabled.
    Killed(EnemyId, Position),
    /// The projectile was already disabled (or unknown).
    Inert,
}

// ---------------------------------------------------------------------------
// WorldState
// ---------------------------------------------------------------------------

/// Everything the tasks of a round share.
#[derive(Debug)]
pub struct WorldState {
    grid: Grid,
    player: Player,
    projectiles: Vec<ProjectileSlot>,
    status: String,
    deadline: Instant,
    outcome: Outcome,
}

impl WorldState {
    /// Builds the initial state from a parsed map. The round must end by
    /// `deadline`.
    pub fn new(layout: MapLayout, deadline: Instant) -> Self {
        // The player is never stored in the grid; it stands on top of
        // whatever the start cell holds.
        let last_occupied = layout.grid.get(layout.player_start).copied().unwrap_or_default();
        Self {
            grid: layout.grid,
            player: Player {
                position: layout.player_start,
                facing: Direction::default(),
                last_occupied,
            },
            projectiles: Vec::new(),
            status: String::new(),
            deadline,
            outcome: Outcome::Pending,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Read-only snapshot of a cell. `None` outside the grid.
    pub fn query_cell(&self, pos: Position) -> Option<Cell> {
        self.grid.get(pos).copied()
    }

    /// The cell one step from `from` toward `dir`, if it exists and does
    /// not block entry.
    fn open_neighbor(&self, from: Position, dir: Direction) -> Option<Position> {
        let to = from.step(dir)?;
        match self.grid.get(to) {
            Some(cell) if !cell.is_tangible() => Some(to),
            _ => None,
        }
    }

    // -- player ------------------------------------------------------------

    pub fn set_facing(&mut self, dir: Direction) {
        self.player.facing = dir;
    }

    /// Turns the player toward `dir` and moves one cell if the destination
    /// is inside the grid and not tangible.
    ///
    /// On success the vacated cell gets back whatever the player displaced
    /// when it arrived, and the destination's content becomes the new
    /// displaced value. The destination cell itself is left as is. On
    /// failure nothing but the facing changes.
    pub fn try_move_player(&mut self, dir: Direction) -> bool {
        self.player.facing = dir;
        let from = self.player.position;
        let Some(to) = self.open_neighbor(from, dir) else {
            return false;
        };
        let Some(there) = self.query_cell(to) else {
            return false;
        };

        self.set_cell(from, self.player.last_occupied);
        self.player.last_occupied = there;
        self.player.position = to;
        true
    }

    // -- enemies -----------------------------------------------------------

    /// Whether `id`'s marker currently sits at `pos`.
    pub fn enemy_at(&self, id: EnemyId, pos: Position) -> bool {
        self.grid.get(pos).and_then(Cell::enemy_id) == Some(id)
    }

    /// All enemy markers with their positions, in reading order.
    pub fn enemies(&self) -> Vec<(EnemyId, Position)> {
        self.grid.enemies()
    }

    /// Moves `id`'s marker from `from` one cell toward `dir`.
    ///
    /// Fails without mutation if the marker is not at `from`, or the
    /// destination is outside the grid or tangible. On success the marker
    /// and the destination's content trade places; returns the new
    /// position.
    pub fn try_move_enemy(&mut self, id: EnemyId, from: Position, dir: Direction) -> Option<Position> {
        if !self.enemy_at(id, from) {
            return None;
        }
        let to = self.open_neighbor(from, dir)?;
        let marker = self.query_cell(from)?;
        let displaced = self.query_cell(to)?;
        self.set_cell(to, marker);
        self.set_cell(from, displaced);
        Some(to)
    }

    /// Clears the enemy marker at `pos`. Returns the id that was removed,
    /// or `None` (and no change) if no enemy was there.
    pub fn remove_enemy_at(&mut self, pos: Position) -> Option<EnemyId> {
        let id = self.grid.get(pos)?.enemy_id()?;
        self.set_cell(pos, Cell::EMPTY);
        Some(id)
    }

    // -- projectiles -------------------------------------------------------

    /// Registers a new, enabled projectile at `origin` heading `direction`.
    /// Reuses the slot of a disabled projectile when there is one.
    pub fn fire(&mut self, origin: Position, direction: Direction) -> ProjectileHandle {
        let projectile = Projectile {
            position: origin,
            direction,
            enabled: true,
        };

        if let Some((slot, entry)) = self
            .projectiles
            .iter_mut()
            .enumerate()
            .find(|(_, entry)| !entry.projectile.enabled)
        {
            entry.generation = entry.generation.wrapping_add(1);
            entry.projectile = projectile;
            return ProjectileHandle {
                slot,
                generation: entry.generation,
            };
        }

        self.projectiles.push(ProjectileSlot {
            generation: 0,
            projectile,
        });
        ProjectileHandle {
            slot: self.projectiles.len() - 1,
            generation: 0,
        }
    }

    /// The projectile behind `handle`, or `None` once its slot was reused.
    pub fn projectile(&self, handle: ProjectileHandle) -> Option<&Projectile> {
        self.projectiles
            .get(handle.slot)
            .filter(|entry| entry.generation == handle.generation)
            .map(|entry| &entry.projectile)
    }

    fn projectile_mut(&mut self, handle: ProjectileHandle) -> Option<&mut Projectile> {
        self.projectiles
            .get_mut(handle.slot)
            .filter(|entry| entry.generation == handle.generation)
            .map(|entry| &mut entry.projectile)
    }

    /// Projectiles that are still travelling.
    pub fn live_projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles
            .iter()
            .map(|entry| &entry.projectile)
            .filter(|p| p.enabled)
    }

    /// Advances a projectile by exactly one cell along its heading.
    ///
    /// Leaving the grid counts as hitting an obstacle.
    pub fn advance_projectile(&mut self, handle: ProjectileHandle) -> ProjectileStep {
        let Some(projectile) = self.projectile(handle) else {
            return ProjectileStep::Inert;
        };
        if !projectile.enabled {
            return ProjectileStep::Inert;
        }

        let next = projectile.position.step(projectile.direction);
        let target = next.and_then(|pos| self.grid.get(pos).map(|cell| (pos, *cell)));

        let step = match target {
            None => ProjectileStep::Blocked,
            Some((pos, cell)) if cell.is_tangible() => match self.remove_enemy_at(pos) {
                Some(id) => ProjectileStep::Killed(id, pos),
                None => ProjectileStep::Blocked,
            },
            Some((pos, _)) => ProjectileStep::Moved(pos),
        };

        if let Some(projectile) = self.projectile_mut(handle) {
            match step {
                ProjectileStep::Moved(pos) => projectile.position = pos,
                _ => projectile.enabled = false,
            }
        }
        step
    }

    // -- round -------------------------------------------------------------

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the round has already been decided.
    pub fn is_concluded(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Records the final outcome. Only the first terminal outcome sticks;
    /// returns `false` if the round was already concluded or `outcome` is
    /// `Pending`.
    pub fn conclude(&mut self, outcome: Outcome) -> bool {
        if self.is_concluded() || !outcome.is_terminal() {
            return false;
        }
        self.outcome = outcome;
        true
    }

    fn set_cell(&mut self, pos: Position, cell: Cell) {
        if let Some(slot) = self.grid.get_mut(pos) {
            *slot = cell;
        }
    }
}

// ---------------------------------------------------------------------------
// World handle
// ---------------------------------------------------------------------------

/// Shared handle to the world. Clone it into every task.
#[derive(Debug, Clone)]
pub struct World {
    inner: Arc<Mutex<WorldState>>,
}

impl World {
    pub fn new(state: WorldState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Builds a world whose deadline is `time_limit` from now.
    pub fn from_layout(layout: MapLayout, time_limit: Duration) -> Self {
        Self::new(WorldState::new(layout, Instant::now() + time_limit))
    }

    /// Acquires the world lock.
    ///
    /// Hold the guard only for a bounded check-and-mutate step; never
    /// across a sleep or a channel send.
    pub async fn lock(&self) -> MutexGuard<'_, WorldState> {
        self.inner.lock().await
    }
}
