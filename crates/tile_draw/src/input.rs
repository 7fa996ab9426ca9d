//! Crossterm backed input source.

use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tile_engine_edit::{EditorEvent, InputSource, Key, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Polls the terminal for input, waiting at most `timeout` per call.
pub struct TerminalInput {
    timeout: Duration,
}

impl TerminalInput {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl InputSource for TerminalInput {
    fn poll_event(&mut self) -> io::Result<Option<EditorEvent>> {
        if !event::poll(self.timeout)? {
            return Ok(None);
        }
        Ok(translate_event(&event::read()?))
    }
}

/// Maps a terminal event to an editor event. Events the editor has no use for map to `None`.
pub(crate) fn translate_event(event: &Event) -> Option<EditorEvent> {
    match event {
        Event::Key(key_event) => {
            let key = translate_key(key_event.code)?;
            let is_down = key_event.kind != KeyEventKind::Release;
            Some(EditorEvent::Key(KeyEvent { key, is_down }))
        }
        Event::Mouse(mouse_event) => {
            let kind = translate_mouse_kind(mouse_event.kind)?;
            Some(EditorEvent::Mouse(MouseEvent::new(kind, (mouse_event.column, mouse_event.row))))
        }
        _ => None,
    }
}

fn translate_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::F(n) => Some(Key::F(n)),
        KeyCode::Char(ch) => Some(Key::from_char(ch)),
        _ => None,
    }
}

fn translate_button(button: event::MouseButton) -> Option<MouseButton> {
    match button {
        event::MouseButton::Left => Some(MouseButton::Left),
        event::MouseButton::Right => Some(MouseButton::Right),
        event::MouseButton::Middle => None,
    }
}

fn translate_mouse_kind(kind: event::MouseEventKind) -> Option<MouseEventKind> {
    match kind {
        event::MouseEventKind::Moved => Some(MouseEventKind::Moved),
        event::MouseEventKind::Down(button) => translate_button(button).map(MouseEventKind::Pressed),
        event::MouseEventKind::Drag(button) => translate_button(button).map(MouseEventKind::Dragged),
        event::MouseEventKind::Up(button) => translate_button(button).map(MouseEventKind::Released),
        _ => None,
    }
}
