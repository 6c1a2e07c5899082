use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::snake::types::Direction;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Turn(Direction),
    Confirm,
    Dismiss,
    Back,
    Quit,
}

/// Maps a key press to an action. Keys with no meaning give `None`.
#[must_use]
pub fn to_action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'd') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'k') => Some(Action::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'j') => Some(Action::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'h') => Some(Action::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'l') => Some(Action::Turn(Direction::Right)),
        KeyCode::Enter | KeyCode::Char('y' | ' ') => Some(Action::Confirm),
        KeyCode::Char('n') => Some(Action::Dismiss),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn pump(actions: &mpsc::Sender<Action>) -> Result<()> {
    while !actions.is_closed() {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            let Some(action) = to_action(key) else {
                debug!("ignoring {:?}", key.code);
                continue;
            };
            if actions.blocking_send(action).is_err() {
                break;
            }
        }
    }
    Ok(())
}

/// Reads terminal events on a blocking thread until `actions` is closed.
pub fn spawn(actions: mpsc::Sender<Action>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = pump(&actions) {
            error!("input reader failed: {e}");
        }
    })
}
