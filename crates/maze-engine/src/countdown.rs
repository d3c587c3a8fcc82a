//! Countdown task: a one-shot alarm at the round deadline.
//!
//! While waiting, it optionally requests a redraw on every refresh tick so
//! the remaining time on screen stays current. At the deadline it emits
//! `Defeat(TimeExpired)` exactly once, and only if the round is still
//! pending.

use maze_tick::{TickConfig, TickScheduler};
use maze_world::{DefeatCause, World};
use tokio::time;
use tracing::info;

use crate::{EventSender, GameEvent};

/// Runs the countdown against the world's deadline.
pub async fn run_countdown(world: World, refresh: TickConfig, events: EventSender) {
    let deadline = world.lock().await.deadline();
    let mut refresh = TickScheduler::new(refresh);
    let alarm = time::sleep_until(deadline);
    tokio::pin!(alarm);

    loop {
        tokio::select! {
            // The alarm wins a tie with the last refresh.
            biased;
            _ = &mut alarm => break,
            _ = refresh.wait_for_tick() => {
                if world.lock().await.is_concluded() {
                    return;
                }
                if events.send(GameEvent::Redraw).await.is_err() {
                    return;
                }
            }
        }
    }

    let pending = !world.lock().await.is_concluded();
    if pending {
        info!("time expired");
        let _ = events.send(GameEvent::Defeat(DefeatCause::TimeExpired)).await;
    }
}
