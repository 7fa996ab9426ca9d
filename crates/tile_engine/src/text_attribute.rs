//! 8 bit console text attribute.
//!
//! Layout of the attribute byte:
//!
//! ```text
//!  7   6   5   4   3   2   1   0
//! BI  BR  BG  BB  FI  FR  FG  FB
//! ```
//!
//! The low nibble is the foreground color, the high nibble the background color.
//! Within a nibble bit 0 is blue, bit 1 green, bit 2 red and bit 3 intensity, which
//! matches the order of the 16 color DOS palette.

pub mod attribute {
    pub const FOREGROUND_BLUE: u8 = 0b0000_0001;
    pub const FOREGROUND_GREEN: u8 = 0b0000_0010;
    pub const FOREGROUND_RED: u8 = 0b0000_0100;
    pub const FOREGROUND_INTENSITY: u8 = 0b0000_1000;

    pub const BACKGROUND_BLUE: u8 = 0b0001_0000;
    pub const BACKGROUND_GREEN: u8 = 0b0010_0000;
    pub const BACKGROUND_RED: u8 = 0b0100_0000;
    pub const BACKGROUND_INTENSITY: u8 = 0b1000_0000;
}

use attribute::{
    BACKGROUND_BLUE, BACKGROUND_GREEN, BACKGROUND_INTENSITY, BACKGROUND_RED, FOREGROUND_BLUE, FOREGROUND_GREEN, FOREGROUND_RED,
};

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextAttribute {
    attr: u8,
}

impl std::fmt::Debug for TextAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAttribute")
            .field("foreground_color", &self.foreground())
            .field("background_color", &self.background())
            .field("attr", &format!("{:08b}", self.attr))
            .finish()
    }
}

impl std::fmt::Display for TextAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(Attr: {:02X}, fg {}, bg {})", self.attr, self.foreground(), self.background())
    }
}

impl TextAttribute {
    /// Palette swatches: white on blue.
    pub const DEFAULT_PALETTE: TextAttribute = TextAttribute::from_u8(BACKGROUND_BLUE | FOREGROUND_RED | FOREGROUND_GREEN | FOREGROUND_BLUE);

    /// Walkability overlay for passable cells.
    pub const WALKABLE: TextAttribute = TextAttribute::from_u8(BACKGROUND_INTENSITY | BACKGROUND_GREEN);

    /// Walkability overlay for blocked cells.
    pub const BLOCKED: TextAttribute = TextAttribute::from_u8(BACKGROUND_INTENSITY | BACKGROUND_RED);

    pub const fn from_u8(attr: u8) -> Self {
        TextAttribute { attr }
    }

    /// Builds an attribute from two 16 color palette indices.
    pub const fn new(foreground_color: u8, background_color: u8) -> Self {
        TextAttribute {
            attr: (foreground_color & 0b1111) | (background_color & 0b1111) << 4,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self.attr
    }

    pub const fn foreground(self) -> u8 {
        self.attr & 0b1111
    }

    pub const fn background(self) -> u8 {
        self.attr >> 4
    }
}

impl From<u8> for TextAttribute {
    fn from(value: u8) -> Self {
        TextAttribute::from_u8(value)
    }
}
