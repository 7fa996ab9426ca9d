use crate::{Cell, Position, Size, TextPane};

/// The composed frame handed to a display surface: plain cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenBuffer {
    size: Size,
    cells: Vec<Cell>,
}

impl ScreenBuffer {
    pub fn new(size: impl Into<Size>) -> Self {
        let size = size.into();
        Self {
            size,
            cells: vec![Cell::default(); size.area()],
        }
    }

    pub fn set_char(&mut self, pos: Position, cell: Cell) {
        assert!(self.is_valid(pos), "position {pos} outside of screen {}", self.size);
        self.cells[pos.index(self.size.width)] = cell;
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Copies a whole pane into the screen with its top left corner at `offset`.
    pub fn blit(&mut self, pane: &dyn TextPane, offset: Position) {
        for y in 0..pane.height() {
            for x in 0..pane.width() {
                let pos = Position::new(x, y);
                self.set_char(pos + offset, pane.char_at(pos));
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.width.max(1) as usize)
    }
}

impl TextPane for ScreenBuffer {
    fn size(&self) -> Size {
        self.size
    }

    fn char_at(&self, pos: Position) -> Cell {
        assert!(self.is_valid(pos), "position {pos} outside of screen {}", self.size);
        self.cells[pos.index(self.size.width)]
    }
}
