//! Cell level edits: characters, blocks and clues

use crossword_engine::{ClueField, Direction, Result};

use crate::transform;

use super::PuzzleEditState;

impl PuzzleEditState {
    /// Set the character at (x, y), `None` empties the cell
    pub fn set_char(&mut self, x: i32, y: i32, ch: Option<char>) -> Result<()> {
        let action = transform::modify_char(&mut self.puzzle, x, y, ch)?;
        self.push_action(action);
        Ok(())
    }

    /// Set several characters as one undo step
    pub fn set_chars(&mut self, chars: &[(i32, i32, Option<char>)]) -> Result<()> {
        if chars.is_empty() {
            return Ok(());
        }
        let action = transform::modify_chars(&mut self.puzzle, chars)?;
        self.push_action(action);
        Ok(())
    }

    /// Set the block status of the given cells as one undo step
    pub fn set_blocks(&mut self, blocks: &[(i32, i32, bool)]) -> Result<()> {
        if blocks.is_empty() {
            return Ok(());
        }
        let action = transform::modify_blocks(&mut self.puzzle, blocks)?;
        self.push_action(action);
        Ok(())
    }

    /// Store one field of a clue, an empty value removes the field
    pub fn store_clue(&mut self, x: i32, y: i32, direction: Direction, field: ClueField, value: &str) -> Result<()> {
        let action = transform::modify_clue(&mut self.puzzle, x, y, direction, field, value)?;
        self.push_action(action);
        Ok(())
    }
}
