//! The event dispatcher: sole consumer of the event stream.
//!
//! The dispatcher is to a round what an actor loop is to its mailbox: it
//! processes one [`GameEvent`] at a time, in arrival order, and is the only
//! place that draws frames or decides the outcome.
//!
//! | Event            | Effect                                        |
//! |------------------|-----------------------------------------------|
//! | `Redraw`         | Lock the world, render one frame.             |
//! | `EnemySpawned`   | Count one more live enemy.                    |
//! | `EnemyKilled`    | Count one fewer; at zero the round is Won.    |
//! | `Defeat(cause)`  | The round is Lost.                            |
//! | `Quit`           | The round is Aborted.                         |
//!
//! Finalization happens once: the outcome is recorded in the world (so the
//! actors notice on their next lock) and the renderer is closed. Events
//! arriving afterwards are ignored.

use maze_world::{Outcome, World};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::{Frame, GameEvent, Renderer};

/// Consumes events for one round and decides its outcome.
pub struct Dispatcher<R: Renderer> {
    world: World,
    renderer: R,
    receiver: mpsc::Receiver<GameEvent>,
    live_enemies: usize,
    outcome: Outcome,
}

impl<R: Renderer> Dispatcher<R> {
    pub fn new(world: World, renderer: R, receiver: mpsc::Receiver<GameEvent>) -> Self {
        Self {
            world,
            renderer,
            receiver,
            live_enemies: 0,
            outcome: Outcome::Pending,
        }
    }

    /// Processes events until the round is decided, then returns the
    /// outcome. The receiver is dropped with the dispatcher, so pending
    /// sends in the actors fail and they wind down.
    pub async fn run(mut self) -> Outcome {
        info!("dispatcher started");

        while let Some(event) = self.receiver.recv().await {
            if let Some(outcome) = self.handle(event).await {
                return outcome;
            }
        }

        // Every producer is gone without a verdict.
        warn!("event stream closed before the round was decided");
        self.finalize(Outcome::Aborted).await;
        self.outcome
    }

    /// Applies a single event. Returns the outcome if this event
    /// finalized the round; events after finalization are ignored and
    /// return `None`.
    pub async fn handle(&mut self, event: GameEvent) -> Option<Outcome> {
        if self.outcome.is_terminal() {
            debug!(?event, outcome = %self.outcome, "round already decided, ignoring event");
            return None;
        }

        let outcome = match event {
            GameEvent::Redraw => {
                self.redraw().await;
                return None;
            }
            GameEvent::EnemySpawned(id) => {
                self.live_enemies += 1;
                debug!(enemy = %id, live = self.live_enemies, "enemy spawned");
                return None;
            }
            GameEvent::EnemyKilled(id) => {
                self.live_enemies = self.live_enemies.saturating_sub(1);
                info!(enemy = %id, live = self.live_enemies, "enemy killed");
                if self.live_enemies > 0 {
                    let status = format!("{id} eliminated, {} remaining", self.live_enemies);
                    self.world.lock().await.set_status(status);
                    return None;
                }
                Outcome::Won
            }
            GameEvent::Defeat(cause) => Outcome::Lost(cause),
            GameEvent::Quit => Outcome::Aborted,
        };

        self.finalize(outcome).await;
        Some(outcome)
    }

    /// Renders one frame from the current world state.
    pub async fn redraw(&mut self) {
        let state = self.world.lock().await;
        let frame = Frame {
            state: &state,
            remaining: state.remaining(Instant::now()),
        };
        if let Err(e) = self.renderer.render(&frame) {
            warn!(error = %e, "render failed");
        }
    }

    async fn finalize(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.world.lock().await.conclude(outcome);
        info!(%outcome, "round finished");

        if let Err(e) = self.renderer.close() {
            warn!(error = %e, "closing the render surface failed");
        }
    }

    /// Enemies currently counted as alive.
    pub fn live_enemies(&self) -> usize {
        self.live_enemies
    }

    /// The recorded outcome (`Pending` until finalized).
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}
