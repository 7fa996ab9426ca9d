//! Error types for tile_engine

use std::path::PathBuf;
use thiserror::Error;

use crate::Size;

/// Main error type for tile_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Loading Errors ===
    #[error("Map file '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("Map file too short: expected {expected} bytes, got {actual}")]
    TruncatedFile { expected: usize, actual: usize },

    #[error("Failed to read map file '{path}': {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Saving Errors ===
    #[error("Failed to write map file '{path}': {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Grid Errors ===
    #[error("Invalid grid size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Map size {actual} does not match editor size {expected}")]
    SizeMismatch { expected: Size, actual: Size },
}

/// Result type alias for tile_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn read_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailure { path: path.into(), source }
    }

    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure { path: path.into(), source }
    }

    /// True for the expected first run condition of a map that was never saved.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
