//! Unified error types for crossword_engine

use thiserror::Error;

/// Main error type for grid and editing operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Grid Errors ===
    #[error("Cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds { x: i32, y: i32, width: i32, height: i32 },

    #[error("Row {row} out of range (0..{height})")]
    RowOutOfRange { row: i32, height: i32 },

    #[error("Column {column} out of range (0..{width})")]
    ColumnOutOfRange { column: i32, width: i32 },

    #[error("Cell ({x}, {y}) is a block or void and can't hold a character")]
    BlockedCell { x: i32, y: i32 },

    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    // === Settings & Session Errors ===
    #[error("Invalid preferences: {message}")]
    Preferences { message: String },

    #[error("Unsupported session version: {version}")]
    UnsupportedSessionVersion { version: u32 },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for crossword_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create an error for a cell coordinate outside of a `width` x `height` grid
    pub fn out_of_bounds(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::OutOfBounds { x, y, width, height }
    }

    /// Create an error for invalid preference data
    pub fn preferences(msg: impl std::fmt::Display) -> Self {
        Self::Preferences { message: msg.to_string() }
    }

    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }
}
