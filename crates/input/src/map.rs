//! Key mapping from terminal events to game actions.
//!
//! Bindings: arrows move, Up hard-drops, Space rotates.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    // Only presses and repeats act.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Down => Some(Action::MoveDown),

        // Rotation
        KeyCode::Char(' ') => Some(Action::Rotate),

        // Hard drop
        KeyCode::Up => Some(Action::Drop),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
