use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Quit,
    None,
}

/// Maps raw key events to game input. Only the four arrow keys steer;
/// everything else is ignored apart from the quit chords.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up => KeyAction::GameAction(Action::Steer(Direction::Up)),
            KeyCode::Down => KeyAction::GameAction(Action::Steer(Direction::Down)),
            KeyCode::Left => KeyAction::GameAction(Action::Steer(Direction::Left)),
            KeyCode::Right => KeyAction::GameAction(Action::Steer(Direction::Right)),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
