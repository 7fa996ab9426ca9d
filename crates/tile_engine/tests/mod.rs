mod format;
mod grid;
