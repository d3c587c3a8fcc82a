//! Enemy tasks: one per enemy marker present at load time.
//!
//! Each period (reference: 1 s) the enemy reads the player's position and
//! tries to step toward it, using [`greedy_step`]:
//!
//! 1. Reset the set of directions tried this period.
//! 2. Under the world lock: stop if the round is over or this enemy's
//!    marker is no longer where the task last saw it (killed). If the
//!    enemy already shares the player's cell, or the chosen step lands on
//!    the player, emit `Defeat` and stop.
//! 3. If the step is blocked, release the lock and retry at once with the
//!    next untried direction. When no useful direction is left, wait for
//!    the next period.
//! 4. Otherwise the marker swaps into the new cell and a `Redraw` follows.
//!
//! Every attempt takes the lock afresh and re-validates the enemy's own
//! position, so nothing read during an earlier attempt is trusted.

use std::cmp::Ordering;

use maze_tick::{TickConfig, TickScheduler};
use maze_world::{DefeatCause, Direction, DirectionSet, EnemyId, Position, World, WorldState};
use tracing::{debug, info, trace};

use crate::{EventSender, GameEvent};

/// Picks the next direction for an enemy at `from` chasing `target`.
///
/// Prefers the axis with the larger distance (ties go to the vertical
/// axis). A direction already in `tried`, or an axis with zero distance,
/// falls through to the other axis. The chosen direction is added to
/// `tried`. Returns `None` when neither axis offers an untried direction.
pub fn greedy_step(from: Position, target: Position, tried: &mut DirectionSet) -> Option<Direction> {
    let horizontal = match target.x.cmp(&from.x) {
        Ordering::Greater => Some(Direction::Right),
        Ordering::Less => Some(Direction::Left),
        Ordering::Equal => None,
    };
    let vertical = match target.y.cmp(&from.y) {
        Ordering::Greater => Some(Direction::Down),
        Ordering::Less => Some(Direction::Up),
        Ordering::Equal => None,
    };

    let order = if from.x.abs_diff(target.x) > from.y.abs_diff(target.y) {
        [horizontal, vertical]
    } else {
        [vertical, horizontal]
    };
    order.into_iter().flatten().find(|dir| tried.insert(*dir))
}

/// Result of one locked attempt to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Attempt {
    /// The round is already decided.
    Concluded,
    /// This enemy's marker is gone.
    Vanished,
    /// The enemy reached the player.
    Caught,
    /// Moved into this cell.
    Moved(Position),
    /// The chosen cell blocks entry; another direction may work.
    Blocked,
    /// No untried direction left this period.
    Exhausted,
}

pub(crate) fn attempt(
    state: &mut WorldState,
    id: EnemyId,
    position: &mut Position,
    tried: &mut DirectionSet,
) -> Attempt {
    if state.is_concluded() {
        return Attempt::Concluded;
    }
    if !state.enemy_at(id, *position) {
        return Attempt::Vanished;
    }

    let player = state.player().position;
    if player == *position {
        return Attempt::Caught;
    }

    let Some(dir) = greedy_step(*position, player, tried) else {
        return Attempt::Exhausted;
    };
    if position.step(dir) == Some(player) {
        return Attempt::Caught;
    }

    match state.try_move_enemy(id, *position, dir) {
        Some(to) => {
            *position = to;
            Attempt::Moved(to)
        }
        None => Attempt::Blocked,
    }
}

/// Chases the player until this enemy is killed, catches the player, or the
/// round ends.
pub async fn run_enemy(world: World, id: EnemyId, start: Position, tick: TickConfig, events: EventSender) {
    let mut position = start;
    let mut tried = DirectionSet::empty();
    let mut scheduler = TickScheduler::new(tick);

    debug!(enemy = %id, %position, "enemy task started");

    loop {
        let tick = scheduler.wait_for_tick().await;
        if tick.ticks_skipped > 0 {
            debug!(enemy = %id, skipped = tick.ticks_skipped, "enemy missed periods");
        }
        tried.clear();

        // Blocked attempts retry at once; `greedy_step` bounds the retries.
        loop {
            let result = {
                let mut state = world.lock().await;
                attempt(&mut state, id, &mut position, &mut tried)
            };

            match result {
                Attempt::Blocked => continue,
                Attempt::Moved(to) => {
                    trace!(enemy = %id, position = %to, "enemy moved");
                    if events.send(GameEvent::Redraw).await.is_err() {
                        return;
                    }
                    break;
                }
                Attempt::Exhausted => {
                    trace!(enemy = %id, tried = tried.len(), "enemy stuck this period");
                    break;
                }
                Attempt::Caught => {
                    info!(enemy = %id, %position, "enemy caught the player");
                    let _ = events.send(GameEvent::Defeat(DefeatCause::Caught)).await;
                    return;
                }
                Attempt::Vanished => {
                    debug!(enemy = %id, "enemy marker gone, task stopping");
                    return;
                }
                Attempt::Concluded => return,
            }
        }
    }
}

/// Starts one task per enemy marker in the world.
///
/// Emits `EnemySpawned` for each enemy before spawning its task, so the
/// dispatcher counts it before any kill can be reported. Returns how many
/// enemy tasks were started; spawning stops early if the dispatcher is
/// gone.
pub async fn spawn_enemies(world: &World, tick: TickConfig, events: &EventSender) -> usize {
    let roster = world.lock().await.enemies();
    let mut spawned = 0;

    for (id, position) in roster {
        if events.send(GameEvent::EnemySpawned(id)).await.is_err() {
            debug!(spawned, "event stream closed during spawn");
            break;
        }
        tokio::spawn(run_enemy(world.clone(), id, position, tick.clone(), events.clone()));
        spawned += 1;
    }

    info!(count = spawned, "enemies spawned");
    spawned
}
