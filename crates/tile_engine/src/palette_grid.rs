//! The glyph / color palette shown below the map.
//!
//! Swatches are laid out row-major, wrapping at the palette width:
//!
//! * indices `0..256` are the glyph band, swatch `i` shows glyph `i` in [`TextAttribute::DEFAULT_PALETTE`]
//! * indices `256..512` are the color band, every swatch shows [`COLOR_MARKER`] in attribute `i % 256`
//! * remaining cells are blank
//!
//! Any position at or after the first color swatch classifies as color band.
//! For an 80 column palette that is column 16 of row 3 and every row below it.

use crate::{Cell, EngineError, PALETTE_HEIGHT, PALETTE_WIDTH, Position, Result, Size, TextAttribute, TextPane};

/// Number of glyph swatches.
pub const GLYPH_SWATCHES: usize = 256;
/// Number of color swatches, directly following the glyph swatches.
pub const COLOR_SWATCHES: usize = 256;
/// Glyph drawn on every color swatch.
pub const COLOR_MARKER: u8 = b'$';

/// What a palette pick selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swatch {
    Glyph(u8),
    Color(TextAttribute),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteGrid {
    size: Size,
    cells: Vec<Cell>,
}

impl Default for PaletteGrid {
    fn default() -> Self {
        Self::generate(Size::new(PALETTE_WIDTH, PALETTE_HEIGHT))
    }
}

impl PaletteGrid {
    pub fn new(size: impl Into<Size>) -> Result<Self> {
        let size = size.into();
        if size.is_empty() {
            return Err(EngineError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self::generate(size))
    }

    fn generate(size: Size) -> Self {
        let cells = (0..size.area()).map(Self::base_swatch).collect();
        Self { size, cells }
    }

    /// The generated content of swatch `index`, independent of any highlight.
    pub fn base_swatch(index: usize) -> Cell {
        if index < GLYPH_SWATCHES {
            Cell::new(index as u8, TextAttribute::DEFAULT_PALETTE)
        } else if index < GLYPH_SWATCHES + COLOR_SWATCHES {
            Cell::new(COLOR_MARKER, TextAttribute::from_u8((index % 256) as u8))
        } else {
            Cell::default()
        }
    }

    /// First position of the color band.
    pub fn color_band_start(&self) -> Position {
        Position::from_index(GLYPH_SWATCHES, self.size.width)
    }

    pub fn is_color_band(&self, pos: Position) -> bool {
        pos.index(self.size.width) >= GLYPH_SWATCHES
    }

    /// Classifies a palette position and returns what picking it selects.
    pub fn swatch_at(&self, pos: Position) -> Swatch {
        assert!(self.is_valid(pos), "position {pos} outside of palette {}", self.size);
        let index = pos.index(self.size.width);
        let base = Self::base_swatch(index);
        if self.is_color_band(pos) {
            Swatch::Color(base.attribute)
        } else {
            Swatch::Glyph(base.glyph)
        }
    }

    /// Repaints every color swatch with `attribute`, marker glyphs stay.
    pub fn apply_color_highlight(&mut self, attribute: TextAttribute) {
        let end = (GLYPH_SWATCHES + COLOR_SWATCHES).min(self.cells.len());
        if GLYPH_SWATCHES >= end {
            return;
        }
        for cell in &mut self.cells[GLYPH_SWATCHES..end] {
            cell.attribute = attribute;
        }
    }

    /// Color swatch cells as currently displayed.
    pub fn color_band(&self) -> &[Cell] {
        let end = (GLYPH_SWATCHES + COLOR_SWATCHES).min(self.cells.len());
        if GLYPH_SWATCHES >= end { &[] } else { &self.cells[GLYPH_SWATCHES..end] }
    }
}

impl TextPane for PaletteGrid {
    fn size(&self) -> Size {
        self.size
    }

    fn char_at(&self, pos: Position) -> Cell {
        assert!(self.is_valid(pos), "position {pos} outside of palette {}", self.size);
        self.cells[pos.index(self.size.width)]
    }
}
