#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::return_self_not_must_use
)]
mod text_attribute;
pub use text_attribute::*;

mod cell;
pub use cell::*;

mod position;
pub use position::*;

mod map_grid;
pub use map_grid::*;

mod palette_grid;
pub use palette_grid::*;

mod screen_buffer;
pub use screen_buffer::*;

pub mod formats;
pub use formats::*;

mod error;
pub use error::*;

/// Width of the map panel in cells.
pub const MAP_WIDTH: i32 = 80;
/// Height of the map panel in cells.
pub const MAP_HEIGHT: i32 = 25;
/// Width of the palette panel in cells.
pub const PALETTE_WIDTH: i32 = 80;
/// Height of the palette panel in cells.
pub const PALETTE_HEIGHT: i32 = 7;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(width: {}, height: {})", self.width, self.height)
    }
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Number of cells covered by this size.
    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from(value: (i32, i32)) -> Self {
        Size {
            width: value.0,
            height: value.1,
        }
    }
}

/// Axis aligned area, `start` inclusive, `start + size` exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rectangle {
    pub start: Position,
    pub size: Size,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(x:{}, y:{}, width: {}, height: {})",
            self.start.x, self.start.y, self.size.width, self.size.height
        )
    }
}

impl Rectangle {
    pub fn new(start: Position, size: Size) -> Self {
        Self { start, size }
    }

    pub fn top_left(&self) -> Position {
        self.start
    }

    pub fn contains_pt(&self, point: Position) -> bool {
        self.start.x <= point.x && point.x < self.start.x + self.size.width && self.start.y <= point.y && point.y < self.start.y + self.size.height
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }
}

/// Read access to a rectangular grid of cells.
pub trait TextPane {
    fn size(&self) -> Size;

    /// Returns the cell at `pos`. Panics when `pos` is outside the pane.
    fn char_at(&self, pos: Position) -> Cell;

    fn width(&self) -> i32 {
        self.size().width
    }

    fn height(&self) -> i32 {
        self.size().height
    }

    fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.height()
    }
}
