use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::GameEvent;
use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

impl Command {
    /// The game event this command stands for. `Quit` ends the session
    /// instead and has none.
    pub fn game_event(self) -> Option<GameEvent> {
        match self {
            Command::Turn(direction) => Some(GameEvent::Turn(direction)),
            Command::TogglePause => Some(GameEvent::TogglePause),
            Command::Restart => Some(GameEvent::Restart),
            Command::Quit => None,
        }
    }
}

/// Maps a key press to a game command. Releases and unknown keys map to `None`.
pub fn command_from_key(ev: &KeyEvent) -> Option<Command> {
    if ev.kind == KeyEventKind::Release {
        return None;
    }

    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Esc | KeyCode::Char('p') => Some(Command::TogglePause),
        KeyCode::Char('r') | KeyCode::Enter => Some(Command::Restart),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
