use super::TextAttribute;

/// Visible appearance of one grid cell: a code page 437 glyph byte and its colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub glyph: u8,
    pub attribute: TextAttribute,
}

impl Cell {
    #[must_use]
    pub const fn new(glyph: u8, attribute: TextAttribute) -> Self {
        Cell { glyph, attribute }
    }

    /// Same glyph, different colors.
    pub fn with_attribute(self, attribute: TextAttribute) -> Self {
        Cell { glyph: self.glyph, attribute }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(Glyph: {}/0x{:02X}, Attr: {})", self.glyph, self.glyph, self.attribute)
    }
}
