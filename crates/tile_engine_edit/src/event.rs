//! Input events as seen by the editor.
//!
//! Front ends translate their native events into these. Mouse coordinates are
//! absolute within the composed map + palette surface and are not trusted: the
//! session validates them against the [`crate::Layout`] before use.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tile_engine::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    Moved,
    Pressed(MouseButton),
    /// Moved while `MouseButton` is held, handled like a press
    Dragged(MouseButton),
    Released(MouseButton),
}

impl MouseEventKind {
    /// The button that is down for this event, if any.
    pub fn pressed_button(self) -> Option<MouseButton> {
        match self {
            MouseEventKind::Pressed(button) | MouseEventKind::Dragged(button) => Some(button),
            MouseEventKind::Moved | MouseEventKind::Released(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub position: Position,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, position: impl Into<Position>) -> Self {
        Self {
            kind,
            position: position.into(),
        }
    }
}

/// A key as far as key bindings are concerned. Letters are stored lower case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    Tab,
    Escape,
    Enter,
    F(u8),
    Char(char),
}

impl Key {
    pub fn from_char(ch: char) -> Self {
        Key::Char(ch.to_ascii_lowercase())
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Tab => f.write_str("tab"),
            Key::Escape => f.write_str("esc"),
            Key::Enter => f.write_str("enter"),
            Key::F(n) => write!(f, "f{n}"),
            Key::Char(' ') => f.write_str("space"),
            Key::Char(ch) => write!(f, "{ch}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown key name '{0}'")]
pub struct KeyParseError(pub String);

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim();
        let mut chars = name.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Ok(Key::from_char(ch));
        }
        match name.to_ascii_lowercase().as_str() {
            "tab" => Ok(Key::Tab),
            "esc" | "escape" => Ok(Key::Escape),
            "enter" | "return" => Ok(Key::Enter),
            "space" => Ok(Key::Char(' ')),
            lower => lower
                .strip_prefix('f')
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=24).contains(n))
                .map(Key::F)
                .ok_or_else(|| KeyParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = KeyParseError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(value: Key) -> Self {
        value.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub is_down: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self { key, is_down: true }
    }

    pub fn up(key: Key) -> Self {
        Self { key, is_down: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

/// Keys with a fixed meaning in both modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub save: Key,
    pub switch_mode: Key,
    pub quit: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            save: Key::Char('s'),
            switch_mode: Key::Tab,
            quit: Key::Escape,
        }
    }
}
