//! Concurrent round engine for the maze game.
//!
//! A round is a set of independent Tokio tasks sharing one
//! [`World`](maze_world::World) and one outbound event channel:
//!
//! - the **input actor** turns [`Action`]s into world mutations,
//! - one **enemy task** per enemy chases the player every period,
//! - one **projectile task** per shot advances it every tick,
//! - the **countdown** raises a time-out defeat at the deadline.
//!
//! Each task mutates the world under its lock, releases it, and then emits
//! a [`GameEvent`]. The [`Dispatcher`] is the only consumer of those events,
//! the only caller of the [`Renderer`], and the only component that
//! decides the round [`Outcome`](maze_world::Outcome).
//!
//! # Cancellation
//!
//! There are no cancel tokens. Each task polls for its own end:
//! an enemy stops once its marker is gone, a projectile once it is
//! disabled, and every task stops when it observes a concluded round on
//! its next lock acquisition or when an event send fails because the
//! dispatcher is gone.
//!
//! # Key types
//!
//! - [`run_round`]: wires everything together and returns the outcome
//! - [`GameConfig`]: cadences, time limit, channel size
//! - [`Renderer`] / [`InputSource`]: the seams to the terminal

mod config;
mod countdown;
mod dispatcher;
mod enemy;
mod event;
mod input;
mod projectile;
mod round;
mod surface;

pub use config::GameConfig;
pub use countdown::run_countdown;
pub use dispatcher::Dispatcher;
pub use enemy::{greedy_step, run_enemy, spawn_enemies};
pub use event::{EventSender, GameEvent};
pub use input::run_input;
pub use projectile::run_projectile;
pub use round::run_round;
pub use surface::{Action, Frame, InputSource, Renderer};
