use crate::{Cell, EngineError, MAP_HEIGHT, MAP_WIDTH, Position, Result, Size, TextPane};

/// The editable map: one [`Cell`] and one walkability flag for every coordinate.
///
/// Glyph data and walkability are stored side by side but never influence each
/// other. `set_cell` leaves the flag alone and `set_walkable` leaves the cell alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapGrid {
    size: Size,
    cells: Vec<Cell>,
    walkable: Vec<bool>,
}

impl Default for MapGrid {
    fn default() -> Self {
        Self::blank(Size::new(MAP_WIDTH, MAP_HEIGHT))
    }
}

impl MapGrid {
    /// Creates a blank, fully walkable grid.
    pub fn new(size: impl Into<Size>) -> Result<Self> {
        let size = size.into();
        if size.is_empty() {
            return Err(EngineError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self::blank(size))
    }

    fn blank(size: Size) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size.area()],
            walkable: vec![true; size.area()],
        }
    }

    fn index(&self, pos: Position) -> usize {
        assert!(self.is_valid(pos), "position {pos} outside of map {}", self.size);
        pos.index(self.size.width)
    }

    pub fn get(&self, pos: Position) -> (Cell, bool) {
        let idx = self.index(pos);
        (self.cells[idx], self.walkable[idx])
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.walkable[self.index(pos)]
    }

    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    pub fn set_walkable(&mut self, pos: Position, walkable: bool) {
        let idx = self.index(pos);
        self.walkable[idx] = walkable;
    }

    /// All coordinates in row-major order (x first, then y).
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size.height).flat_map(move |y| (0..self.size.width).map(move |x| Position::new(x, y)))
    }
}

impl TextPane for MapGrid {
    fn size(&self) -> Size {
        self.size
    }

    fn char_at(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }
}
