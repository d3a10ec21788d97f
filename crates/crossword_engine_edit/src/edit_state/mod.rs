//! Puzzle edit state module structure
//!
//! - `state.rs` - Struct definition, constructors, getters, preferences
//! - `cell_operations.rs` - Characters, blocks and clues
//! - `grid_operations.rs` - Clearing, shifting, resizing, row/column and flip operations
//! - `undo.rs` - Undo/redo system

mod state;

mod cell_operations;
mod grid_operations;
mod undo;

pub use state::PuzzleEditState;
