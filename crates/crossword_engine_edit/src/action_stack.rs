use crossword_engine::{EngineError, Result};

use crate::{Action, Preferences, Puzzle, PuzzleSessionState};

pub trait UndoState {
    fn undo_description(&self) -> Option<String>;
    fn can_undo(&self) -> bool;
    /// Revert the most recent action.
    ///
    /// # Errors
    ///
    /// Returns the first grid error raised while reverting. The action is
    /// moved to the redo history regardless.
    fn undo(&mut self) -> Result<()>;

    fn redo_description(&self) -> Option<String>;
    fn can_redo(&self) -> bool;
    /// Replay the most recently undone action.
    ///
    /// # Errors
    ///
    /// Returns the first grid error raised while replaying. The action is
    /// moved back to the undo history regardless.
    fn redo(&mut self) -> Result<()>;
}

/// Undo / redo history of one puzzle.
///
/// Both stacks store the oldest action first. With a buffer limit each stack
/// holds at most that many actions; the oldest one is dropped to make room.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActionStack {
    undo_stack: Vec<Action>,
    redo_stack: Vec<Action>,
    /// Net number of edits since the puzzle was last saved
    distance_from_saved_puzzle: i64,
    buffer_limit: Option<usize>,
}

impl ActionStack {
    pub fn new(preferences: &Preferences) -> Self {
        Self {
            buffer_limit: preferences.buffer_limit(),
            ..Default::default()
        }
    }

    pub fn buffer_limit(&self) -> Option<usize> {
        self.buffer_limit
    }

    /// Change the bound without trimming the current history
    pub fn set_buffer_limit(&mut self, limit: Option<usize>) {
        self.buffer_limit = limit;
    }

    /// Apply new preferences. A finite buffer also caps the current history.
    pub fn set_preferences(&mut self, preferences: &Preferences) {
        self.buffer_limit = preferences.buffer_limit();
        if let Some(limit) = self.buffer_limit {
            self.cap_stack(limit);
        }
    }

    pub fn distance_from_saved_puzzle(&self) -> i64 {
        self.distance_from_saved_puzzle
    }

    pub fn is_dirty(&self) -> bool {
        self.distance_from_saved_puzzle != 0
    }

    /// Record the current state as the saved one
    pub fn mark_saved(&mut self) {
        self.distance_from_saved_puzzle = 0;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // History
    // ═══════════════════════════════════════════════════════════════════════

    /// Record an action that has already been applied to the puzzle
    pub fn push_action(&mut self, action: Action) {
        log::debug!("push action: {}", action.description());
        push_bounded(&mut self.undo_stack, action, self.buffer_limit);
        self.redo_stack.clear();
        self.distance_from_saved_puzzle += 1;
    }

    /// Revert the top action.
    ///
    /// After reverting, the action now on top of the undo stack is replayed so
    /// the grid always reflects the latest surviving edit. Does nothing when the
    /// undo stack is empty.
    pub fn undo_action(&mut self, puzzle: &mut Puzzle) -> Result<()> {
        let Some(action) = self.undo_stack.pop() else {
            return Ok(());
        };
        log::debug!("undo action: {}", action.description());

        let mut res = action.perform_undo(puzzle);
        if let Some(previous) = self.undo_stack.last() {
            let redo_res = previous.perform_redo(puzzle);
            if res.is_ok() {
                res = redo_res;
            }
        }
        self.distance_from_saved_puzzle -= 1;
        push_bounded(&mut self.redo_stack, action, self.buffer_limit);
        res
    }

    /// Replay the most recently undone action. Does nothing when the redo stack is empty.
    pub fn redo_action(&mut self, puzzle: &mut Puzzle) -> Result<()> {
        let Some(action) = self.redo_stack.pop() else {
            return Ok(());
        };
        log::debug!("redo action: {}", action.description());

        let res = action.perform_redo(puzzle);
        self.distance_from_saved_puzzle += 1;
        push_bounded(&mut self.undo_stack, action, self.buffer_limit);
        res
    }

    /// Keep only the newest `max_size` actions of both stacks
    pub fn cap_stack(&mut self, max_size: usize) {
        keep_newest(&mut self.undo_stack, max_size);
        keep_newest(&mut self.redo_stack, max_size);
    }

    /// Drop the whole history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.distance_from_saved_puzzle = 0;
    }

    pub fn peek_action(&self) -> Option<&Action> {
        self.undo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_stack(&self) -> &[Action] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Action] {
        &self.redo_stack
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|action| action.description().to_string())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|action| action.description().to_string())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Session state
    // ═══════════════════════════════════════════════════════════════════════

    pub fn session_state(&self) -> PuzzleSessionState {
        PuzzleSessionState {
            version: PuzzleSessionState::CURRENT_VERSION,
            undo_stack: self.undo_stack.clone(),
            redo_stack: self.redo_stack.clone(),
            distance_from_saved_puzzle: self.distance_from_saved_puzzle,
        }
    }

    /// Restore a history saved with [`ActionStack::session_state`].
    ///
    /// The buffer bound of `preferences` is applied to the restored stacks.
    pub fn from_session_state(state: PuzzleSessionState, preferences: &Preferences) -> Result<Self> {
        if state.version != PuzzleSessionState::CURRENT_VERSION {
            return Err(EngineError::UnsupportedSessionVersion { version: state.version });
        }
        let mut stack = Self {
            undo_stack: state.undo_stack,
            redo_stack: state.redo_stack,
            distance_from_saved_puzzle: state.distance_from_saved_puzzle,
            buffer_limit: None,
        };
        stack.set_preferences(preferences);
        Ok(stack)
    }
}

/// Append `action`, dropping the oldest entry first when the stack is full
fn push_bounded(stack: &mut Vec<Action>, action: Action, limit: Option<usize>) {
    if let Some(limit) = limit {
        if !stack.is_empty() && stack.len() >= limit {
            let dropped = stack.remove(0);
            log::debug!("history full, dropping: {}", dropped.description());
        }
    }
    stack.push(action);
}

fn keep_newest(stack: &mut Vec<Action>, max_size: usize) {
    if stack.len() > max_size {
        stack.drain(..stack.len() - max_size);
    }
}
