use tile_engine::{Cell, Swatch, TextAttribute};

/// The paint value currently held by the user.
///
/// Glyph and attribute are picked independently from the two palette bands, a
/// pick from either band arms the brush. Clearing only disarms it, the last glyph
/// and attribute are kept for the next pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    pub has_brush: bool,
    pub glyph: u8,
    pub attribute: TextAttribute,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            has_brush: false,
            glyph: 0,
            attribute: TextAttribute::DEFAULT_PALETTE,
        }
    }
}

impl Brush {
    pub fn apply(&mut self, swatch: Swatch) {
        self.has_brush = true;
        match swatch {
            Swatch::Glyph(glyph) => self.glyph = glyph,
            Swatch::Color(attribute) => self.attribute = attribute,
        }
    }

    pub fn clear(&mut self) {
        self.has_brush = false;
    }

    /// The cell this brush paints, `None` while no brush is held.
    pub fn cell(&self) -> Option<Cell> {
        self.has_brush.then(|| Cell::new(self.glyph, self.attribute))
    }
}
