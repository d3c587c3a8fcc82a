//! The world shared between tasks, loaded from a real map file.

use std::io::Write;
use std::time::Duration;

use maze_world::{
    CellKind, Direction, EnemyId, MapError, MapLayout, Outcome, Position, ProjectileStep, World,
};

fn load(text: &str) -> MapLayout {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    MapLayout::load(file.path()).unwrap()
}

#[test]
fn test_load_reads_symbols_and_player_start() {
    let layout = load("▤▤▤▤\n▤☺☠▤\n▤♣ ▤\n");

    assert_eq!(layout.player_start, Position::new(1, 1));
    assert_eq!(layout.grid.height(), 3);
    assert_eq!(layout.grid.enemies(), vec![(EnemyId(1), Position::new(2, 1))]);
    assert_eq!(
        layout.grid.get(Position::new(1, 2)).map(|c| c.kind()),
        Some(CellKind::Vegetation)
    );
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MapLayout::load(dir.path().join("mapa.txt")).unwrap_err();
    let MapError::Read { path, .. } = err;
    assert!(path.ends_with("mapa.txt"));
}

#[tokio::test]
async fn test_two_shots_at_one_enemy_kill_once() {
    let world = World::from_layout(load("☠  ☺\n    "), Duration::from_secs(10));
    let shots = {
        let mut state = world.lock().await;
        let a = state.fire(Position::new(3, 0), Direction::Left);
        let b = state.fire(Position::new(3, 0), Direction::Left);
        [a, b]
    };

    let tasks = shots.map(|shot| {
        let world = world.clone();
        tokio::spawn(async move {
            let mut kills = 0;
            loop {
                let step = world.lock().await.advance_projectile(shot);
                match step {
                    ProjectileStep::Moved(_) => tokio::task::yield_now().await,
                    ProjectileStep::Killed(..) => kills += 1,
                    _ => return kills,
                }
            }
        })
    });

    let mut kills = 0;
    for task in tasks {
        kills += task.await.unwrap();
    }
    assert_eq!(kills, 1);

    let state = world.lock().await;
    assert!(state.enemies().is_empty());
    assert_eq!(state.live_projectiles().count(), 0);
}

#[tokio::test]
async fn test_first_conclusion_is_visible_to_every_handle() {
    let world = World::from_layout(load("☺"), Duration::from_secs(10));
    let other = world.clone();

    assert!(world.lock().await.conclude(Outcome::Won));
    assert!(!other.lock().await.conclude(Outcome::Aborted));
    assert_eq!(other.lock().await.outcome(), Outcome::Won);
}
