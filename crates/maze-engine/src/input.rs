//! The input actor: applies player actions to the world.

use maze_tick::TickConfig;
use maze_world::{ProjectileHandle, World, WorldState};
use tracing::{debug, info};

use crate::projectile::run_projectile;
use crate::{Action, EventSender, GameEvent, InputSource};

/// Runs the input actor until the player quits, the round concludes, or the
/// input source is exhausted.
///
/// Every processed action ends with a `Redraw`, including a move that was
/// rejected. `Quit` emits [`GameEvent::Quit`] instead and stops the actor.
/// An exhausted source stops the actor without quitting the round.
pub async fn run_input<I: InputSource>(
    mut input: I,
    world: World,
    projectile_tick: TickConfig,
    events: EventSender,
) {
    info!("input actor started");

    while let Some(action) = input.next_action().await {
        if action == Action::Quit {
            info!("quit requested");
            let _ = events.send(GameEvent::Quit).await;
            return;
        }

        let shot = {
            let mut state = world.lock().await;
            if state.is_concluded() {
                debug!("round concluded, input actor stopping");
                return;
            }
            apply(&mut state, action)
        };

        if let Some(handle) = shot {
            tokio::spawn(run_projectile(
                world.clone(),
                handle,
                projectile_tick.clone(),
                events.clone(),
            ));
        }

        if events.send(GameEvent::Redraw).await.is_err() {
            return;
        }
    }

    debug!("input source exhausted, input actor stopping");
}

/// Applies one action to the locked world. Returns the projectile to
/// launch, if the action was a shot.
fn apply(state: &mut WorldState, action: Action) -> Option<ProjectileHandle> {
    match action {
        Action::Move(dir) => {
            let moved = state.try_move_player(dir);
            debug!(%dir, moved, position = %state.player().position, "player move");
            None
        }
        Action::Fire => {
            let player = state.player();
            let (origin, facing) = (player.position, player.facing);
            debug!(%origin, %facing, "player fired");
            Some(state.fire(origin, facing))
        }
        Action::Interact => {
            let position = state.player().position;
            state.set_status(format!("Interacting at {position}"));
            None
        }
        // Not a world mutation; handled by the caller.
        Action::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_world::{Direction, MapLayout, Position};
    use tokio::time::Instant;

    fn state(map: &str) -> WorldState {
        WorldState::new(MapLayout::parse(map), Instant::now())
    }

    #[test]
    fn test_move_then_blocked_move() {
        let mut s = state("☺ ▤");
        assert_eq!(apply(&mut s, Action::Move(Direction::Right)), None);
        assert_eq!(s.player().position, Position::new(1, 0));
        apply(&mut s, Action::Move(Direction::Right));
        assert_eq!(s.player().position, Position::new(1, 0));
    }

    #[test]
    fn test_fire_uses_current_position_and_facing() {
        let mut s = state(" ☺ ");
        apply(&mut s, Action::Move(Direction::Up));
        let handle = apply(&mut s, Action::Fire).expect("fire registers a projectile");

        let projectile = s.projectile(handle).unwrap();
        assert_eq!(projectile.position, Position::new(1, 0));
        assert_eq!(projectile.direction, Direction::Up);
        assert!(projectile.enabled);
    }

    #[test]
    fn test_interact_sets_status_only() {
        let mut s = state("☺");
        assert_eq!(apply(&mut s, Action::Interact), None);
        assert_eq!(s.status(), "Interacting at (0, 0)");
        assert_eq!(s.player().position, Position::new(0, 0));
    }
}
