//! Key mapping for the terminal front end.
//!
//! Selection is discrete (one click per key press), so there is no
//! held-key repeat handling here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player asked the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Select the hovered tile; also starts/restarts from menu screens.
    Activate,
    Restart,
    Quit,
}

/// Map a key press to an action. Unknown keys map to `None`.
pub fn action_for_key(key: KeyEvent) -> Option<UiAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UiAction::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(UiAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(UiAction::CursorRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(UiAction::CursorUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(UiAction::CursorDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiAction::Activate),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(UiAction::Quit),
        _ => None,
    }
}
