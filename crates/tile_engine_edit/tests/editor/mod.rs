//! Tests for the editing model
//!
//! These tests drive the editor the way a front end does: through
//! `EditorEvent`s and composed frames.

mod session_tests;

use tile_engine_edit::{EditSession, EditorEvent, Key, KeyBindings, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Session on the default 80x25 map with a map path that does not exist yet.
pub fn create_test_session(dir: &tempfile::TempDir) -> EditSession {
    EditSession::new(dir.path().join("test.map"), KeyBindings::default())
}

pub fn left_click(x: i32, y: i32) -> EditorEvent {
    EditorEvent::Mouse(MouseEvent::new(MouseEventKind::Pressed(MouseButton::Left), (x, y)))
}

pub fn right_click(x: i32, y: i32) -> EditorEvent {
    EditorEvent::Mouse(MouseEvent::new(MouseEventKind::Pressed(MouseButton::Right), (x, y)))
}

pub fn mouse_move(x: i32, y: i32) -> EditorEvent {
    EditorEvent::Mouse(MouseEvent::new(MouseEventKind::Moved, (x, y)))
}

pub fn key_down(key: Key) -> EditorEvent {
    EditorEvent::Key(KeyEvent::down(key))
}
