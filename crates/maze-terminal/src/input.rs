//! Keyboard input.
//!
//! crossterm's event reading is blocking, so a dedicated OS thread polls
//! the terminal and forwards decoded [`Action`]s over a bounded channel.
//! The thread polls with a short timeout and exits once the receiving
//! [`TerminalInput`] has been dropped, so it never outlives the round by
//! more than one poll interval.

use std::future::Future;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use maze_engine::{Action, InputSource};
use maze_world::Direction;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::TerminalError;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const BUFFER: usize = 32;

/// Translates a key press into an action. Keys without a binding yield
/// `None`.
///
/// | Key              | Action          |
/// |------------------|-----------------|
/// | `W` `A` `S` `D`  | move            |
/// | `E`              | interact        |
/// | `Space`, `F`     | fire            |
/// | `Esc`, `Ctrl-C`  | quit            |
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    // Raw mode swallows SIGINT, so Ctrl-C has to be handled here.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Action::Move(Direction::Up),
            'a' => Action::Move(Direction::Left),
            's' => Action::Move(Direction::Down),
            'd' => Action::Move(Direction::Right),
            'e' => Action::Interact,
            ' ' | 'f' => Action::Fire,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// Player actions read from the terminal keyboard.
#[derive(Debug)]
pub struct TerminalInput {
    rx: mpsc::Receiver<Action>,
}

impl TerminalInput {
    /// Starts the keyboard reader thread. The terminal should already be
    /// in raw mode.
    pub fn spawn() -> Result<Self, TerminalError> {
        let (tx, rx) = mpsc::channel(BUFFER);
        thread::Builder::new()
            .name("maze-input".into())
            .spawn(move || read_keys(tx))
            .map_err(TerminalError::InputFailed)?;
        Ok(Self { rx })
    }
}

impl InputSource for TerminalInput {
    fn next_action(&mut self) -> impl Future<Output = Option<Action>> + Send {
        self.rx.recv()
    }
}

fn read_keys(tx: mpsc::Sender<Action>) {
    debug!("keyboard reader started");

    while !tx.is_closed() {
        match event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                warn!(error = %e, "polling the terminal failed");
                break;
            }
        }

        let key = match event::read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(e) => {
                warn!(error = %e, "reading a terminal event failed");
                break;
            }
        };

        if let Some(action) = map_key(key) {
            if tx.blocking_send(action).is_err() {
                break;
            }
        }
    }

    debug!("keyboard reader stopped");
}
