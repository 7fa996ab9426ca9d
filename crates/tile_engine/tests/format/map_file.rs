//! Tests for the .map codec

use std::fs;

use pretty_assertions::assert_eq;
use tile_engine::{Cell, EngineError, MapGrid, Position, Size, TextAttribute, TextPane, load_map, map_file_len, read_map_file, save_map, write_map_file};

fn sample_map() -> MapGrid {
    let mut map = MapGrid::new((7, 5)).unwrap();
    for pos in map.positions().collect::<Vec<_>>() {
        let seed = pos.x * 31 + pos.y * 7;
        map.set_cell(pos, Cell::new((seed % 256) as u8, TextAttribute::from_u8((seed * 3 % 256) as u8)));
        map.set_walkable(pos, seed % 3 != 0);
    }
    map
}

#[test]
fn test_load_scaled_down_scenario() {
    let data = [65, 1, 1, 66, 2, 0, 67, 3, 1, 68, 4, 0];
    let map = load_map(&data, Size::new(2, 2)).unwrap();

    assert_eq!(map.get(Position::new(0, 0)), (Cell::new(b'A', TextAttribute::from_u8(1)), true));
    assert_eq!(map.get(Position::new(1, 0)), (Cell::new(b'B', TextAttribute::from_u8(2)), false));
    assert_eq!(map.get(Position::new(0, 1)), (Cell::new(b'C', TextAttribute::from_u8(3)), true));
    assert_eq!(map.get(Position::new(1, 1)), (Cell::new(b'D', TextAttribute::from_u8(4)), false));
}

#[test]
fn test_save_layout_is_bit_exact() {
    let mut map = MapGrid::new((2, 2)).unwrap();
    map.set_cell(Position::new(0, 0), Cell::new(b'A', TextAttribute::from_u8(1)));
    map.set_cell(Position::new(1, 0), Cell::new(b'B', TextAttribute::from_u8(2)));
    map.set_cell(Position::new(0, 1), Cell::new(b'C', TextAttribute::from_u8(3)));
    map.set_cell(Position::new(1, 1), Cell::new(b'D', TextAttribute::from_u8(4)));
    map.set_walkable(Position::new(1, 0), false);
    map.set_walkable(Position::new(1, 1), false);

    assert_eq!(save_map(&map), vec![65, 1, 1, 66, 2, 0, 67, 3, 1, 68, 4, 0]);
}

#[test]
fn test_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.map");
    let map = sample_map();

    write_map_file(&map, &path).unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len() as usize, map_file_len(map.size()));

    let loaded = read_map_file(&path, map.size()).unwrap();
    assert_eq!(loaded, map);
}

#[test]
fn test_default_size_file_length() {
    let map = MapGrid::default();
    assert_eq!(save_map(&map).len(), 80 * 25 * 3);
}

#[test]
fn test_truncated_file() {
    let size = Size::new(80, 25);
    let data = vec![1u8; map_file_len(size) - 1];
    match load_map(&data, size) {
        Err(EngineError::TruncatedFile { expected, actual }) => {
            assert_eq!(expected, 6000);
            assert_eq!(actual, 5999);
        }
        other => panic!("expected TruncatedFile, got {other:?}"),
    }
}

#[test]
fn test_oversized_file_ignores_trailing_bytes() {
    let map = sample_map();
    let mut data = save_map(&map);
    data.extend_from_slice(&[0xFF; 10]);
    assert_eq!(load_map(&data, map.size()).unwrap(), map);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_map_file(&dir.path().join("missing.map"), Size::new(80, 25)).unwrap_err();
    assert!(err.is_not_found(), "got {err}");
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.map");
    let err = write_map_file(&MapGrid::default(), &path).unwrap_err();
    assert!(matches!(err, EngineError::WriteFailure { .. }), "got {err}");
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.map");
    fs::write(&path, vec![9u8; 1000]).unwrap();

    let map = MapGrid::new((2, 1)).unwrap();
    write_map_file(&map, &path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), vec![0, 0, 1, 0, 0, 1]);
}

#[test]
fn test_roundtrip_keeps_dimensions() {
    let map = sample_map();
    let loaded = load_map(&save_map(&map), Size::new(7, 5)).unwrap();
    assert_eq!(loaded.size(), Size::new(7, 5));
}
