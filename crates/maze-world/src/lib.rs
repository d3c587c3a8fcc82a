//! Shared world state for the maze game.
//!
//! This crate defines everything the concurrent tasks of a round agree on:
//!
//! - **Types** ([`Position`], [`Direction`], [`EnemyId`], [`Cell`]):
//!   the vocabulary of the grid.
//! - **Grid** ([`Grid`]): a bounds-checked, fixed-size 2D array of cells.
//! - **World** ([`World`], [`WorldState`]): the single source of truth,
//!   guarded by one lock. Every check-and-mutate operation lives on
//!   `WorldState`, which is only reachable through [`World::lock`].
//! - **Map** ([`MapLayout`]): turns a map description into a grid plus
//!   the player start and enemy roster.
//!
//! ```text
//! map file → MapLayout → World ←(lock)→ input / enemy / projectile tasks
//! ```

mod cell;
mod error;
mod grid;
mod map;
mod outcome;
mod types;
mod world;

pub use cell::{Cell, CellKind};
pub use error::MapError;
pub use grid::Grid;
pub use map::MapLayout;
pub use outcome::{DefeatCause, Outcome};
pub use types::{Direction, DirectionSet, EnemyId, Position};
pub use world::{
    Player, Projectile, ProjectileHandle, ProjectileStep, World, WorldState,
};
