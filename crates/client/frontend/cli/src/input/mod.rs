//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// One tap: advance the engine.
    Mash,
    /// Choose the mash number (digit keys).
    SetMashNumber(u32),
    /// Start the same categories over.
    Reset,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        // Key repeat and release would count as extra taps on some terminals.
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Enter => KeyAction::Mash,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            ' ' | 'm' => KeyAction::Mash,
            'r' => KeyAction::Reset,
            digit @ '1'..='9' => digit
                .to_digit(10)
                .map_or(KeyAction::None, KeyAction::SetMashNumber),
            _ => KeyAction::None,
        }
    }
}
