//! Grid transforms
//!
//! Every function in this module mutates the puzzle exactly once and returns
//! the [`Action`] that reverses / replays that mutation. The caller pushes the
//! action onto an [`crate::ActionStack`]; it must not call `perform_redo` itself.
//!
//! Two reversal strategies are used:
//! - delta transforms record the affected cells only (`modify_blocks`, `modify_clue`)
//! - full transforms record a snapshot of the grid before and after the edit
//!
//! Parameters are validated before the first mutation. On error the puzzle is unchanged.

use crossword_engine::{ClueField, Direction, EngineError, Grid, Result};

use crate::{Action, EditStep, Puzzle, TransformType};

/// Run the redo steps of a prepared delta action once and hand it back
fn delta_transform(puzzle: &mut Puzzle, action: Action) -> Result<Action> {
    action.perform_redo(puzzle)?;
    log::debug!("{}: {} redo / {} undo steps", action.description(), action.redo_steps().len(), action.undo_steps().len());
    Ok(action)
}

/// Snapshot the grid around `transform` and build a full transform action
fn full_transform<F>(puzzle: &mut Puzzle, description: &str, transform_type: TransformType, transform: F) -> Result<Action>
where
    F: FnOnce(&mut Grid) -> Result<()>,
{
    let from_grid = puzzle.grid.clone();
    transform(&mut puzzle.grid)?;
    let to_grid = puzzle.grid.clone();
    log::debug!("{}: {}x{} -> {}x{}", description, from_grid.width(), from_grid.height(), to_grid.width(), to_grid.height());
    Ok(Action::new_full_transform(description, transform_type, from_grid, to_grid))
}

// ═══════════════════════════════════════════════════════════════════════════
// Cell edits
// ═══════════════════════════════════════════════════════════════════════════

/// Set the block status of the given cells.
///
/// Blocking a cell that holds a character also clears the character. Undo
/// restores the character and block status each cell had before the call,
/// also when a cell is named more than once.
pub fn modify_blocks(puzzle: &mut Puzzle, blocks: &[(i32, i32, bool)]) -> Result<Action> {
    for &(x, y, _) in blocks {
        puzzle.grid.check_cell(x, y)?;
    }

    let mut action = Action::new("Modify blocks", TransformType::Structure);
    let mut undo_steps = Vec::with_capacity(blocks.len());
    for &(x, y, block) in blocks {
        let ch = puzzle.grid.get_char(x, y);
        if block && ch.is_some() {
            action.add_redo_step(EditStep::ClearChar { x, y });
        }
        action.add_redo_step(EditStep::SetBlock { x, y, block });

        let was_block = puzzle.grid.is_block(x, y);
        undo_steps.push([EditStep::SetChar { x, y, ch }, EditStep::SetBlock { x, y, block: was_block }]);
    }
    // the first entry of a cell restores its state last
    for step in undo_steps.into_iter().rev().flatten() {
        action.add_undo_step(step);
    }
    delta_transform(puzzle, action)
}

/// A character can only be put into an available cell
fn check_char_target(grid: &Grid, x: i32, y: i32, ch: Option<char>) -> Result<()> {
    grid.check_cell(x, y)?;
    if ch.is_some() && (grid.is_block(x, y) || grid.is_void(x, y)) {
        return Err(EngineError::BlockedCell { x, y });
    }
    Ok(())
}

/// Set the character at (x, y), `None` empties the cell
pub fn modify_char(puzzle: &mut Puzzle, x: i32, y: i32, next_char: Option<char>) -> Result<Action> {
    check_char_target(&puzzle.grid, x, y, next_char)?;
    full_transform(puzzle, "Set character", TransformType::Content, |grid| grid.set_char(x, y, next_char))
}

/// Set several characters as one action
pub fn modify_chars(puzzle: &mut Puzzle, chars: &[(i32, i32, Option<char>)]) -> Result<Action> {
    for &(x, y, ch) in chars {
        check_char_target(&puzzle.grid, x, y, ch)?;
    }
    full_transform(puzzle, "Set characters", TransformType::Content, |grid| {
        for &(x, y, ch) in chars {
            grid.set_char(x, y, ch)?;
        }
        Ok(())
    })
}

/// Store one field of the clue at (x, y) in `direction`
pub fn modify_clue(puzzle: &mut Puzzle, x: i32, y: i32, direction: Direction, field: ClueField, value: &str) -> Result<Action> {
    puzzle.grid.check_cell(x, y)?;

    let previous = puzzle.grid.clue(x, y, direction).map(|clue| clue.field(field).to_string()).unwrap_or_default();
    let mut action = Action::new("Modify clue", TransformType::Content);
    action.add_redo_step(EditStep::StoreClue {
        x,
        y,
        direction,
        field,
        value: value.to_string(),
    });
    action.add_undo_step(EditStep::StoreClue {
        x,
        y,
        direction,
        field,
        value: previous,
    });
    delta_transform(puzzle, action)
}

// ═══════════════════════════════════════════════════════════════════════════
// Clearing
// ═══════════════════════════════════════════════════════════════════════════

pub fn clear_all(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Clear all", TransformType::Structure, |grid| {
        grid.clear();
        Ok(())
    })
}

pub fn clear_chars(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Clear characters", TransformType::Content, |grid| {
        grid.clear_chars();
        Ok(())
    })
}

pub fn clear_clues(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Clear clues", TransformType::Content, |grid| {
        grid.clear_clues();
        Ok(())
    })
}

pub fn clear_blocks(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Clear blocks", TransformType::Structure, |grid| {
        grid.clear_blocks();
        Ok(())
    })
}

pub fn clear_bars(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Clear bars", TransformType::Structure, |grid| {
        grid.clear_bars();
        Ok(())
    })
}

pub fn clear_voids(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Clear voids", TransformType::Structure, |grid| {
        grid.clear_voids();
        Ok(())
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Shifting
// ═══════════════════════════════════════════════════════════════════════════

pub fn shift_grid_up(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Shift up", TransformType::Structure, |grid| {
        grid.shift_up();
        Ok(())
    })
}

pub fn shift_grid_down(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Shift down", TransformType::Structure, |grid| {
        grid.shift_down();
        Ok(())
    })
}

pub fn shift_grid_left(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Shift left", TransformType::Structure, |grid| {
        grid.shift_left();
        Ok(())
    })
}

pub fn shift_grid_right(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Shift right", TransformType::Structure, |grid| {
        grid.shift_right();
        Ok(())
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Dimensions
// ═══════════════════════════════════════════════════════════════════════════

pub fn resize_grid(puzzle: &mut Puzzle, width: i32, height: i32) -> Result<Action> {
    full_transform(puzzle, "Resize grid", TransformType::Structure, |grid| grid.resize(width, height))
}

pub fn insert_row_above(puzzle: &mut Puzzle, y: i32) -> Result<Action> {
    full_transform(puzzle, "Insert row", TransformType::Structure, |grid| grid.insert_row(y, true))
}

pub fn insert_row_below(puzzle: &mut Puzzle, y: i32) -> Result<Action> {
    full_transform(puzzle, "Insert row", TransformType::Structure, |grid| grid.insert_row(y, false))
}

pub fn insert_column_left(puzzle: &mut Puzzle, x: i32) -> Result<Action> {
    full_transform(puzzle, "Insert column", TransformType::Structure, |grid| grid.insert_column(x, true))
}

pub fn insert_column_right(puzzle: &mut Puzzle, x: i32) -> Result<Action> {
    full_transform(puzzle, "Insert column", TransformType::Structure, |grid| grid.insert_column(x, false))
}

pub fn remove_row(puzzle: &mut Puzzle, y: i32) -> Result<Action> {
    full_transform(puzzle, "Remove row", TransformType::Structure, |grid| grid.remove_row(y))
}

pub fn remove_column(puzzle: &mut Puzzle, x: i32) -> Result<Action> {
    full_transform(puzzle, "Remove column", TransformType::Structure, |grid| grid.remove_column(x))
}

// ═══════════════════════════════════════════════════════════════════════════
// Flipping
// ═══════════════════════════════════════════════════════════════════════════

pub fn horizontal_flip(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Flip horizontal", TransformType::Structure, |grid| {
        grid.horizontal_flip();
        Ok(())
    })
}

pub fn vertical_flip(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Flip vertical", TransformType::Structure, |grid| {
        grid.vertical_flip();
        Ok(())
    })
}

pub fn diagonal_flip(puzzle: &mut Puzzle) -> Result<Action> {
    full_transform(puzzle, "Flip diagonal", TransformType::Structure, |grid| {
        grid.diagonal_flip();
        Ok(())
    })
}
