use tile_engine::{Cell, EngineError, MapGrid, PaletteGrid, Position, Result, TextAttribute, TextPane};

use crate::{Brush, Layout, Region};

/// All mutable editor data: map, palette, brush and mouse cursor.
///
/// Owned by a single [`crate::EditSession`] and lent to the mode handlers and the
/// compositor, nothing here is shared.
#[derive(Clone, Debug)]
pub struct EditState {
    map: MapGrid,
    palette: PaletteGrid,
    brush: Brush,
    layout: Layout,
    cursor: Option<Position>,
}

impl Default for EditState {
    fn default() -> Self {
        Self::new(MapGrid::default(), PaletteGrid::default())
    }
}

impl EditState {
    pub fn new(map: MapGrid, palette: PaletteGrid) -> Self {
        let layout = Layout::new(map.size(), palette.size());
        Self {
            map,
            palette,
            brush: Brush::default(),
            layout,
            cursor: None,
        }
    }

    pub fn map(&self) -> &MapGrid {
        &self.map
    }

    pub fn palette(&self) -> &PaletteGrid {
        &self.palette
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Cursor in screen coordinates, `None` while the mouse is outside the surface.
    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.layout.region_at(pos).map(|_| pos);
    }

    pub fn cursor_region(&self) -> Option<Region> {
        self.cursor.and_then(|pos| self.layout.region_at(pos))
    }

    /// Replaces the map wholesale, used after loading a file.
    ///
    /// Fails with [`EngineError::SizeMismatch`] and keeps the current map if the dimensions differ.
    pub fn replace_map(&mut self, map: MapGrid) -> Result<()> {
        if map.size() != self.map.size() {
            return Err(EngineError::SizeMismatch {
                expected: self.map.size(),
                actual: map.size(),
            });
        }
        self.map = map;
        Ok(())
    }

    /// Picks the swatch at `pos` (palette coordinates) into the brush.
    ///
    /// A color pick also highlights the whole color band with the picked attribute.
    pub fn pick_at(&mut self, pos: Position) -> Brush {
        let swatch = self.palette.swatch_at(pos);
        self.brush.apply(swatch);
        if let tile_engine::Swatch::Color(attribute) = swatch {
            self.palette.apply_color_highlight(attribute);
        }
        self.brush
    }

    pub fn clear_brush(&mut self) {
        self.brush.clear();
        self.palette.apply_color_highlight(TextAttribute::DEFAULT_PALETTE);
    }

    /// Commits the brush at `pos` (map coordinates). Does nothing without a brush.
    pub fn paint(&mut self, pos: Position) -> Option<Cell> {
        let cell = self.brush.cell()?;
        self.map.set_cell(pos, cell);
        Some(cell)
    }

    pub fn set_walkable(&mut self, pos: Position, walkable: bool) {
        self.map.set_walkable(pos, walkable);
    }
}
