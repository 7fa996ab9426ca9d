//! On-disk formats.

mod map_file;
pub use map_file::*;
