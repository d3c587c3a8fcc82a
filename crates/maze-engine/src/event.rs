//! Events flowing from the actors to the dispatcher.

use maze_world::{DefeatCause, EnemyId};
use tokio::sync::mpsc;

/// An event emitted by an actor after it has released the world lock.
///
/// `Redraw` is idempotent; losing or duplicating one is harmless.
/// `EnemyKilled`, `Defeat` and `Quit` are emitted at most once per
/// terminating condition, by the single task whose state machine reached
/// that transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The world changed; draw it again.
    Redraw,
    /// An enemy task started. Only sent during setup.
    EnemySpawned(EnemyId),
    /// A projectile removed this enemy's marker.
    EnemyKilled(EnemyId),
    /// The player lost.
    Defeat(DefeatCause),
    /// The player asked to leave.
    Quit,
}

/// Producer side of the event channel. Clone one into every actor.
pub type EventSender = mpsc::Sender<GameEvent>;
