use tile_engine::{MAP_HEIGHT, MAP_WIDTH, PALETTE_HEIGHT, PALETTE_WIDTH, Position, Rectangle, Size};

/// Where a screen position lands, in coordinates local to that region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Map(Position),
    Palette(Position),
}

/// Split of the composed surface: map panel on top, palette panel directly below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    map: Rectangle,
    palette: Rectangle,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(Size::new(MAP_WIDTH, MAP_HEIGHT), Size::new(PALETTE_WIDTH, PALETTE_HEIGHT))
    }
}

impl Layout {
    pub fn new(map_size: Size, palette_size: Size) -> Self {
        Self {
            map: Rectangle::new(Position::default(), map_size),
            palette: Rectangle::new(Position::new(0, map_size.height), palette_size),
        }
    }

    pub fn map_area(&self) -> Rectangle {
        self.map
    }

    pub fn palette_area(&self) -> Rectangle {
        self.palette
    }

    /// Size of the whole composed surface.
    pub fn screen_size(&self) -> Size {
        Size::new(self.map.width().max(self.palette.width()), self.map.height() + self.palette.height())
    }

    /// Classifies a raw screen position. Anything outside both panels is `None`.
    pub fn region_at(&self, pos: Position) -> Option<Region> {
        if self.map.contains_pt(pos) {
            Some(Region::Map(pos - self.map.top_left()))
        } else if self.palette.contains_pt(pos) {
            Some(Region::Palette(pos - self.palette.top_left()))
        } else {
            None
        }
    }
}
