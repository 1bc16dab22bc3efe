//! Mapping from terminal events to game input.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// A terminal cell position (column, row), origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPos {
    pub column: u16,
    pub row: u16,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Extract a primary-button press.
///
/// Releases, drags, scrolls and the other buttons are ignored.
pub fn primary_press(mouse: MouseEvent) -> Option<ScreenPos> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(ScreenPos {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}
