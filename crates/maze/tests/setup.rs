//! Setup failures surface before the terminal is touched.

use std::io::Write;

use maze::prelude::*;

#[tokio::test]
async fn test_missing_map_fails_before_the_round() {
    let dir = tempfile::tempdir().unwrap();
    let err = maze::play(&dir.path().join("mapa.txt"), &GameConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, MazeError::Map(_)));
    assert!(err.to_string().contains("mapa.txt"));
}

#[test]
fn test_config_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "projectile_tick_ms": 50, "timer_refresh_ms": 0 }}"#).unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.projectile_tick_ms, 50);
    assert_eq!(config.timer_refresh_ms, 0);
    assert_eq!(config.time_limit_ms, GameConfig::default().time_limit_ms);
}

#[test]
fn test_bad_config_converts_to_maze_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[1, 2, 3]").unwrap();

    let err: MazeError = load_config(Some(file.path())).unwrap_err().into();
    assert!(matches!(err, MazeError::Config(ConfigError::Parse { .. })));
}
