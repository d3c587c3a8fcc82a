//! Projectile task: one per shot.
//!
//! ```text
//! Traveling ──(blocked | out of grid | hit enemy)──→ Disabled
//! ```
//!
//! Every tick the projectile advances exactly one cell along its fixed
//! heading. `Disabled` is terminal and ends the task.

use maze_tick::{TickConfig, TickScheduler};
use maze_world::{ProjectileHandle, ProjectileStep, World};
use tracing::{debug, trace};

use crate::{EventSender, GameEvent};

/// Drives a projectile registered with
/// [`WorldState::fire`](maze_world::WorldState::fire) until it is disabled.
pub async fn run_projectile(
    world: World,
    handle: ProjectileHandle,
    tick: TickConfig,
    events: EventSender,
) {
    let mut scheduler = TickScheduler::new(tick);

    loop {
        let tick = scheduler.wait_for_tick().await;
        if tick.overrun {
            debug!(?handle, tick = tick.tick, "projectile tick fired late");
        }

        let step = {
            let mut state = world.lock().await;
            if state.is_concluded() {
                return;
            }
            state.advance_projectile(handle)
        };

        match step {
            ProjectileStep::Moved(position) => {
                trace!(?handle, %position, "projectile advanced");
                if events.send(GameEvent::Redraw).await.is_err() {
                    return;
                }
            }
            ProjectileStep::Killed(enemy, position) => {
                debug!(?handle, %enemy, %position, "projectile hit enemy");
                let _ = events.send(GameEvent::EnemyKilled(enemy)).await;
                let _ = events.send(GameEvent::Redraw).await;
                return;
            }
            ProjectileStep::Blocked => {
                trace!(?handle, "projectile blocked");
                let _ = events.send(GameEvent::Redraw).await;
                return;
            }
            ProjectileStep::Inert => return,
        }
    }
}
