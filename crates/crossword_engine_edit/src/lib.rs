//! Undoable editing of crossword puzzles.
//!
//! - [`transform`] - grid edits that return a reversible [`Action`]
//! - [`ActionStack`] - bounded undo / redo history
//! - [`PuzzleEditState`] - a puzzle together with its history and [`Preferences`]

mod action;
pub use action::*;

mod action_stack;
pub use action_stack::*;

mod edit_state;
pub use edit_state::*;

mod preferences;
pub use preferences::Preferences;

mod puzzle;
pub use puzzle::Puzzle;

pub mod session_state;
pub use session_state::PuzzleSessionState;

pub mod transform;

// Re-export the grid model
pub use crossword_engine::{BarSide, Bars, Cell, Clue, ClueField, Clues, Direction, EngineError, Grid, Result};
