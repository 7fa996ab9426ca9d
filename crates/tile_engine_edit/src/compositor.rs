//! Builds the screen buffer from map, palette and brush.
//!
//! Every frame is composed from scratch, so composing twice without input in
//! between yields the same buffer. Composition only reads the [`EditState`].

use tile_engine::{Cell, ScreenBuffer, TextAttribute, TextPane};

use crate::{EditState, EditorMode, Region};

/// Composes a full frame for `mode` into `screen`.
///
/// `screen` must have the layout's screen size.
pub fn compose(state: &EditState, mode: EditorMode, screen: &mut ScreenBuffer) {
    debug_assert_eq!(screen.size(), state.layout().screen_size());
    screen.fill(Cell::default());
    match mode {
        EditorMode::Tile => draw_tile_mode(state, screen),
        EditorMode::Walkability => draw_walkability_mode(state, screen),
    }
    screen.blit(state.palette(), state.layout().palette_area().top_left());
}

fn draw_tile_mode(state: &EditState, screen: &mut ScreenBuffer) {
    let origin = state.layout().map_area().top_left();
    screen.blit(state.map(), origin);

    // brush preview under the mouse
    if let (Some(cell), Some(Region::Map(pos))) = (state.brush().cell(), state.cursor_region()) {
        screen.set_char(pos + origin, cell);
    }
}

fn draw_walkability_mode(state: &EditState, screen: &mut ScreenBuffer) {
    let origin = state.layout().map_area().top_left();
    let map = state.map();
    for pos in map.positions() {
        let (cell, walkable) = map.get(pos);
        let attribute = if walkable { TextAttribute::WALKABLE } else { TextAttribute::BLOCKED };
        screen.set_char(pos + origin, cell.with_attribute(attribute));
    }
}

/// Convenience for callers that do not keep a buffer around.
pub fn compose_new(state: &EditState, mode: EditorMode) -> ScreenBuffer {
    let mut screen = ScreenBuffer::new(state.layout().screen_size());
    compose(state, mode, &mut screen);
    screen
}

