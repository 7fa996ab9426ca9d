//! Tests for MapGrid

use tile_engine::{Cell, MapGrid, Position, TextAttribute, TextPane};

#[test]
fn test_set_walkable_keeps_cell() {
    let mut map = MapGrid::default();
    let pos = Position::new(79, 24);
    let cell = Cell::new(0xDB, TextAttribute::new(14, 1));
    map.set_cell(pos, cell);

    map.set_walkable(pos, false);
    assert_eq!(map.char_at(pos), cell);
    map.set_walkable(pos, true);
    assert_eq!(map.char_at(pos), cell);
}

#[test]
fn test_set_cell_keeps_walkable_everywhere() {
    let mut map = MapGrid::new((5, 5)).unwrap();
    let blocked = [Position::new(0, 0), Position::new(3, 2), Position::new(4, 4)];
    for pos in blocked {
        map.set_walkable(pos, false);
    }

    for pos in map.positions().collect::<Vec<_>>() {
        map.set_cell(pos, Cell::new(b'.', TextAttribute::from_u8(0x07)));
    }

    for pos in map.positions() {
        assert_eq!(map.is_walkable(pos), !blocked.contains(&pos), "walkability changed at {pos}");
    }
}

#[test]
fn test_positions_are_row_major() {
    let map = MapGrid::new((3, 2)).unwrap();
    let positions: Vec<_> = map.positions().collect();
    assert_eq!(
        positions,
        vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(0, 1),
            Position::new(1, 1),
            Position::new(2, 1),
        ]
    );
}
