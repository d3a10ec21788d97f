//! Puzzle Edit State
//!
//! The main state container for editing one crossword puzzle. It owns the
//! live puzzle, its action history and the preferences the history is bounded by.
//!
//! All modifications run one of the transforms in [`crate::transform`] and push
//! the resulting action, so every edit can be undone.

use crossword_engine::{Grid, Result};

use crate::{ActionStack, Preferences, Puzzle};

/// Main state container for puzzle editing
pub struct PuzzleEditState {
    pub(crate) puzzle: Puzzle,
    pub(crate) action_stack: ActionStack,
    pub(crate) preferences: Preferences,
}

impl PuzzleEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a state with an empty puzzle sized by the default preferences
    pub fn new() -> Result<Self> {
        Self::with_preferences(Preferences::default())
    }

    pub fn from_puzzle(puzzle: Puzzle, preferences: Preferences) -> Self {
        Self {
            puzzle,
            action_stack: ActionStack::new(&preferences),
            preferences,
        }
    }

    /// Create a state with an empty puzzle sized by `preferences`
    pub fn with_preferences(preferences: Preferences) -> Result<Self> {
        let puzzle = Puzzle::with_size(preferences.new_initial_width, preferences.new_initial_height)?;
        Ok(Self::from_puzzle(puzzle, preferences))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    pub fn action_stack(&self) -> &ActionStack {
        &self.action_stack
    }

    pub fn action_stack_mut(&mut self) -> &mut ActionStack {
        &mut self.action_stack
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.action_stack.set_preferences(&preferences);
        self.preferences = preferences;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Document
    // ═══════════════════════════════════════════════════════════════════════

    /// Replace the puzzle with an empty one, dropping the history
    pub fn new_puzzle(&mut self, width: i32, height: i32) -> Result<()> {
        let puzzle = Puzzle::with_size(width, height)?;
        self.set_puzzle(puzzle);
        Ok(())
    }

    /// Replace the puzzle, dropping the history
    pub fn set_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzle = puzzle;
        self.action_stack.clear();
    }

    pub fn is_dirty(&self) -> bool {
        self.action_stack.is_dirty()
    }

    pub fn mark_saved(&mut self) {
        self.action_stack.mark_saved();
    }
}
