//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameAction::Quit);
    }

    match key.code {
        // Steering
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::Right)
        }

        // Session
        KeyCode::Enter => Some(GameAction::Restart),
        KeyCode::F(1) | KeyCode::Char('+') => Some(GameAction::SpeedUp),
        KeyCode::F(2) | KeyCode::Char('-') => Some(GameAction::SpeedDown),
        KeyCode::F(3) | KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::ToggleWrap),
        KeyCode::F(4) | KeyCode::Char('f') | KeyCode::Char('F') => Some(GameAction::ToggleFullscreen),
        KeyCode::F(5) | KeyCode::Char('v') | KeyCode::Char('V') => Some(GameAction::ToggleLsd),

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameAction::Quit),

        _ => None,
    }
}
