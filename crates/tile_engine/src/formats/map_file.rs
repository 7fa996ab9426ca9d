//! Map file (.map) I/O implementation.
//!
//! A map file has no header. It holds one 3 byte record per map cell in row-major
//! order (x first, then y); record `i` occupies bytes `[3i, 3i + 3)`:
//!
//! | byte | content                          |
//! |------|----------------------------------|
//! | 0    | glyph                            |
//! | 1    | attribute byte                   |
//! | 2    | 1 if the cell is walkable else 0 |
//!
//! The map dimensions are not stored. A file written for other dimensions loads as
//! garbage or fails with [`EngineError::TruncatedFile`].

use std::{fs, io::ErrorKind, path::Path};

use crate::{Cell, EngineError, MapGrid, Result, Size, TextAttribute, TextPane};

/// Bytes per map cell.
pub const RECORD_SIZE: usize = 3;

/// File name used when nothing else is configured.
pub const DEFAULT_MAP_FILE: &str = "test.map";

/// Expected file length for a map of the given size.
pub fn map_file_len(size: Size) -> usize {
    size.area() * RECORD_SIZE
}

/// Decodes a map of `size` from `data`.
///
/// Trailing bytes after the last record are ignored.
pub fn load_map(data: &[u8], size: Size) -> Result<MapGrid> {
    let mut map = MapGrid::new(size)?;
    let expected = map_file_len(size);
    if data.len() < expected {
        return Err(EngineError::TruncatedFile { expected, actual: data.len() });
    }
    if data.len() > expected {
        log::warn!("Map data has {} trailing bytes, ignoring them.", data.len() - expected);
    }

    let positions: Vec<_> = map.positions().collect();
    for (pos, record) in positions.into_iter().zip(data.chunks_exact(RECORD_SIZE)) {
        map.set_cell(pos, Cell::new(record[0], TextAttribute::from_u8(record[1])));
        map.set_walkable(pos, record[2] != 0);
    }
    Ok(map)
}

/// Encodes `map` into exactly `width * height * 3` bytes.
pub fn save_map(map: &MapGrid) -> Vec<u8> {
    let mut result = Vec::with_capacity(map_file_len(map.size()));
    for pos in map.positions() {
        let (cell, walkable) = map.get(pos);
        result.push(cell.glyph);
        result.push(cell.attribute.as_u8());
        result.push(u8::from(walkable));
    }
    result
}

/// Reads the whole file at `path` and decodes a map of `size` from it.
pub fn read_map_file(path: &Path, size: Size) -> Result<MapGrid> {
    let data = fs::read(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            EngineError::not_found(path)
        } else {
            EngineError::read_failure(path, err)
        }
    })?;
    load_map(&data, size)
}

/// Writes `map` to `path`, replacing any existing file.
pub fn write_map_file(map: &MapGrid, path: &Path) -> Result<()> {
    let data = save_map(map);
    fs::write(path, &data).map_err(|err| EngineError::write_failure(path, err))?;
    log::info!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
