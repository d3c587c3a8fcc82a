//! Key bindings.

#[cfg(feature = "crossterm")]
mod keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use maze_engine::Action;
    use maze_terminal::map_key;
    use maze_world::Direction;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wasd_moves() {
        assert_eq!(map_key(press(KeyCode::Char('w'))), Some(Action::Move(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Char('a'))), Some(Action::Move(Direction::Left)));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(Action::Move(Direction::Down)));
        assert_eq!(map_key(press(KeyCode::Char('d'))), Some(Action::Move(Direction::Right)));
    }

    #[test]
    fn test_bindings_ignore_caps_lock() {
        assert_eq!(map_key(press(KeyCode::Char('W'))), Some(Action::Move(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Char('E'))), Some(Action::Interact));
    }

    #[test]
    fn test_fire_interact_and_quit() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Action::Fire));
        assert_eq!(map_key(press(KeyCode::Char('f'))), Some(Action::Fire));
        assert_eq!(map_key(press(KeyCode::Char('e'))), Some(Action::Interact));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);
        assert_eq!(map_key(press(KeyCode::Up)), None);
        assert_eq!(map_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_only_presses_count() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('w'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(release), None);
    }
}
