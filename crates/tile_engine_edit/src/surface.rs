//! Collaborator traits for the outside world.

use std::io;

use tile_engine::ScreenBuffer;

use crate::{EditorEvent, EditorMode};

/// User visible message, e.g. the outcome of a save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Info(String),
    Error(String),
}

impl Notification {
    pub fn text(&self) -> &str {
        match self {
            Notification::Info(text) | Notification::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

/// Everything a display needs for one full redraw.
pub struct Frame<'a> {
    pub screen: &'a ScreenBuffer,
    pub mode: EditorMode,
    pub notification: Option<&'a Notification>,
}

/// Draws composed frames. Every call is a complete redraw of the surface.
pub trait DisplaySurface {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

/// Non blocking source of input events.
pub trait InputSource {
    /// Returns the next pending event or `None` if nothing is pending.
    fn poll_event(&mut self) -> io::Result<Option<EditorEvent>>;
}
