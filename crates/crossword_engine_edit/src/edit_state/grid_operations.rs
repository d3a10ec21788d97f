//! Grid level edits
//!
//! Every operation snapshots the grid, so undo restores dimensions and content.

use crossword_engine::Result;

use crate::transform;

use super::PuzzleEditState;

impl PuzzleEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Clearing
    // ═══════════════════════════════════════════════════════════════════════

    pub fn clear_all(&mut self) -> Result<()> {
        let action = transform::clear_all(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    pub fn clear_chars(&mut self) -> Result<()> {
        let action = transform::clear_chars(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    pub fn clear_clues(&mut self) -> Result<()> {
        let action = transform::clear_clues(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    pub fn clear_blocks(&mut self) -> Result<()> {
        let action = transform::clear_blocks(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    pub fn clear_bars(&mut self) -> Result<()> {
        let action = transform::clear_bars(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    pub fn clear_voids(&mut self) -> Result<()> {
        let action = transform::clear_voids(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Shifting
    // ═══════════════════════════════════════════════════════════════════════

    pub fn shift_up(&mut self) -> Result<()> {
        let action = transform::shift_grid_up(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    pub fn shift_down(&mut self) -> Result<()> {
        let action = transform::shift_grid_down(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    pub fn shift_left(&mut self) -> Result<()> {
        let action = transform::shift_grid_left(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    pub fn shift_right(&mut self) -> Result<()> {
        let action = transform::shift_grid_right(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Dimensions
    // ═══════════════════════════════════════════════════════════════════════

    /// Resize the grid, content inside the new bounds is kept
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        if (width, height) == self.puzzle.grid.size() {
            return Ok(());
        }
        let action = transform::resize_grid(&mut self.puzzle, width, height)?;
        self.push_action(action);
        Ok(())
    }

    /// Insert an empty row above (or below) row `y`
    pub fn insert_row(&mut self, y: i32, above: bool) -> Result<()> {
        let action = if above {
            transform::insert_row_above(&mut self.puzzle, y)?
        } else {
            transform::insert_row_below(&mut self.puzzle, y)?
        };
        self.push_action(action);
        Ok(())
    }

    /// Insert an empty column left (or right) of column `x`
    pub fn insert_column(&mut self, x: i32, left: bool) -> Result<()> {
        let action = if left {
            transform::insert_column_left(&mut self.puzzle, x)?
        } else {
            transform::insert_column_right(&mut self.puzzle, x)?
        };
        self.push_action(action);
        Ok(())
    }

    pub fn remove_row(&mut self, y: i32) -> Result<()> {
        let action = transform::remove_row(&mut self.puzzle, y)?;
        self.push_action(action);
        Ok(())
    }

    pub fn remove_column(&mut self, x: i32) -> Result<()> {
        let action = transform::remove_column(&mut self.puzzle, x)?;
        self.push_action(action);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Flipping
    // ═══════════════════════════════════════════════════════════════════════

    pub fn horizontal_flip(&mut self) -> Result<()> {
        let action = transform::horizontal_flip(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    pub fn vertical_flip(&mut self) -> Result<()> {
        let action = transform::vertical_flip(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }

    pub fn diagonal_flip(&mut self) -> Result<()> {
        let action = transform::diagonal_flip(&mut self.puzzle)?;
        self.push_action(action);
        Ok(())
    }
}
