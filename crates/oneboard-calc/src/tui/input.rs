//! Keyboard and mouse mapping

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::keypad::hit_test;
use crate::core::key::Key;
use crate::keypad::Keypad;

/// What a terminal event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator key
    Press(Key),
    /// Leave the application
    Quit,
    /// Ignored input
    None,
}

/// Maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        // Windows reports releases too; only presses count
        if event.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(Key::Clear),
                _ => KeyAction::None,
            };
        }

        match event.code {
            KeyCode::Enter => KeyAction::Press(Key::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(Key::Clear),
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => Key::from_char(c).map_or(KeyAction::None, KeyAction::Press),
            _ => KeyAction::None,
        }
    }

    /// Maps a left click inside the keypad area to the button's key
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, keypad: &Keypad, area: Rect) -> KeyAction {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return KeyAction::None;
        }
        hit_test(keypad, area, event.column, event.row)
            .and_then(|index| keypad.buttons().get(index))
            .map_or(KeyAction::None, |btn| KeyAction::Press(btn.key))
    }
}
