//! Wires the tasks of one round together.

use maze_world::{Outcome, World};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::countdown::run_countdown;
use crate::enemy::spawn_enemies;
use crate::input::run_input;
use crate::{Dispatcher, GameConfig, InputSource, Renderer};

/// Plays one round on `world` and returns its outcome.
///
/// Draws the initial frame, then starts the actors from a setup task:
/// every enemy first (each announced with `EnemySpawned`), then the input
/// actor and the countdown. The dispatcher runs on the caller's task until
/// the round is decided.
///
/// Enemy and projectile tasks that are still alive afterwards stop on
/// their next tick, when they observe the concluded world. The input actor
/// and the countdown are aborted here so the input source is released
/// promptly.
pub async fn run_round<R, I>(world: World, config: &GameConfig, renderer: R, input: I) -> Outcome
where
    R: Renderer,
    I: InputSource,
{
    let config = config.clone().validated();
    let (tx, rx) = mpsc::channel(config.event_channel_size);

    let mut dispatcher = Dispatcher::new(world.clone(), renderer, rx);
    dispatcher.redraw().await;

    let setup = {
        let world = world.clone();
        let config = config.clone();
        tokio::spawn(async move {
            let enemies = spawn_enemies(&world, config.enemy_tick(), &tx).await;
            debug!(enemies, "enemy tasks started");
            let input = tokio::spawn(run_input(input, world.clone(), config.projectile_tick(), tx.clone()));
            let countdown = tokio::spawn(run_countdown(world, config.timer_refresh(), tx));
            [input, countdown]
        })
    };

    info!(time_limit_ms = config.time_limit_ms, "round started");
    let outcome = dispatcher.run().await;

    setup.abort();
    if let Ok(handles) = setup.await {
        for handle in handles {
            handle.abort();
        }
    }

    outcome
}
