//! Undo/Redo system for the puzzle editor
//!
//! Transforms mutate the puzzle themselves; the edit state only records the
//! returned action. Undo and redo delegate to the [`crate::ActionStack`].

use crossword_engine::Result;

use crate::{Action, PuzzleSessionState, UndoState};

use super::PuzzleEditState;

impl PuzzleEditState {
    /// Record an action that has already been applied
    pub(crate) fn push_action(&mut self, action: Action) {
        self.action_stack.push_action(action);
    }

    pub fn undo_stack_len(&self) -> usize {
        self.action_stack.undo_len()
    }

    pub fn redo_stack_len(&self) -> usize {
        self.action_stack.redo_len()
    }

    pub fn session_state(&self) -> PuzzleSessionState {
        self.action_stack.session_state()
    }

    /// Restore the history of a previous session
    ///
    /// The puzzle must be the one the history was recorded on.
    pub fn restore_session_state(&mut self, state: PuzzleSessionState) -> Result<()> {
        self.action_stack = crate::ActionStack::from_session_state(state, &self.preferences)?;
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl UndoState for PuzzleEditState {
    fn undo_description(&self) -> Option<String> {
        self.action_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.action_stack.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        self.action_stack.undo_action(&mut self.puzzle)
    }

    fn redo_description(&self) -> Option<String> {
        self.action_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.action_stack.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        self.action_stack.redo_action(&mut self.puzzle)
    }
}
