//! Session state for the puzzle editor
//!
//! Contains the undo/redo history of an editing session so it can be
//! written to disk when the editor exits and restored on startup.

use serde::{Deserialize, Serialize};

use crate::Action;

/// Serializable snapshot of an [`crate::ActionStack`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSessionState {
    /// Version for future compatibility
    #[serde(default = "default_version")]
    pub version: u32,

    /// Undo history, oldest first
    #[serde(default)]
    pub undo_stack: Vec<Action>,

    /// Redo history, oldest first
    #[serde(default)]
    pub redo_stack: Vec<Action>,

    #[serde(default)]
    pub distance_from_saved_puzzle: i64,
}

impl PuzzleSessionState {
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new empty session state
    pub fn new() -> Self {
        Self::default()
    }
}

fn default_version() -> u32 {
    PuzzleSessionState::CURRENT_VERSION
}

impl Default for PuzzleSessionState {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            distance_from_saved_puzzle: 0,
        }
    }
}
