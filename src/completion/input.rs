//! Key input as seen by the completion engine

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What kind of key was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// A character key (with or without modifiers)
    Char(char),
    Backspace,
    Delete,
    Enter,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    /// Anything else (arrows, function keys, bare modifiers)
    Other,
}

/// A single key press delivered to the completion engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Key that was pressed
    pub kind: KeyKind,
    /// Text the key inserted into the document (empty if none)
    pub text: String,
    /// Modifiers held during the press
    pub modifiers: KeyModifiers,
}

impl KeyInput {
    /// A plain character key that inserts itself
    pub fn char(ch: char) -> Self {
        Self {
            kind: KeyKind::Char(ch),
            text: ch.to_string(),
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key that inserts no text
    pub fn key(kind: KeyKind) -> Self {
        Self {
            kind,
            text: String::new(),
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Control plus a character key (inserts no text)
    pub fn ctrl(ch: char) -> Self {
        Self::key(KeyKind::Char(ch)).with_modifiers(KeyModifiers::CONTROL)
    }

    /// Builder: set modifiers
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Translate a crossterm KeyEvent; release and repeat events are ignored
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        let KeyEvent {
            code, modifiers, kind, ..
        } = event;

        if kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        let alt = modifiers.contains(KeyModifiers::ALT);

        let input = match code {
            KeyCode::Char(ch) if ctrl || alt => Self::key(KeyKind::Char(ch)),
            KeyCode::Char(ch) => Self::char(ch),
            KeyCode::Backspace => Self::key(KeyKind::Backspace),
            KeyCode::Delete => Self::key(KeyKind::Delete),
            KeyCode::Enter => Self::key(KeyKind::Enter),
            KeyCode::Tab => Self::key(KeyKind::Tab),
            KeyCode::BackTab => Self::key(KeyKind::BackTab),
            KeyCode::Esc => Self::key(KeyKind::Escape),
            KeyCode::Up => Self::key(KeyKind::Up),
            KeyCode::Down => Self::key(KeyKind::Down),
            _ => Self::key(KeyKind::Other),
        };

        Some(input.with_modifiers(modifiers))
    }

    /// Check if this key changed the text under the cursor
    pub fn edits_text(&self) -> bool {
        !self.text.is_empty() || matches!(self.kind, KeyKind::Backspace | KeyKind::Delete)
    }

    /// Check if Control or Shift is held
    pub fn ctrl_or_shift(&self) -> bool {
        self.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SHIFT)
    }

    /// Check if a modifier other than Control or Shift is held
    pub fn has_other_modifier(&self) -> bool {
        !self
            .modifiers
            .difference(KeyModifiers::CONTROL | KeyModifiers::SHIFT)
            .is_empty()
    }

    /// Ctrl+E opens the popup regardless of prefix length
    pub fn is_completion_shortcut(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(self.kind, KeyKind::Char('e') | KeyKind::Char('E'))
    }
}
