//! Invalid transform parameters must leave the puzzle untouched

use crossword_engine_edit::{transform, ClueField, Direction, EngineError, Puzzle};
use pretty_assertions::assert_eq;

use crate::helpers::sample_puzzle;

fn assert_unchanged(result: crossword_engine_edit::Result<crossword_engine_edit::Action>, puzzle: &Puzzle) {
    assert!(result.is_err());
    assert_eq!(puzzle, &sample_puzzle());
}

#[test]
fn test_cell_edits_out_of_bounds() {
    let mut puzzle = sample_puzzle();
    let res = transform::modify_char(&mut puzzle, 4, 0, Some('A'));
    assert!(matches!(res, Err(EngineError::OutOfBounds { x: 4, y: 0, .. })));
    assert_eq!(puzzle, sample_puzzle());

    let res = transform::modify_clue(&mut puzzle, 0, -1, Direction::Down, ClueField::Text, "x");
    assert_unchanged(res, &puzzle);
}

#[test]
fn test_partially_invalid_batches() {
    let mut puzzle = sample_puzzle();
    let res = transform::modify_blocks(&mut puzzle, &[(0, 1, true), (1, 1, true), (9, 9, true)]);
    assert_unchanged(res, &puzzle);

    let res = transform::modify_chars(&mut puzzle, &[(0, 1, Some('Q')), (0, 3, Some('R'))]);
    assert_unchanged(res, &puzzle);
}

#[test]
fn test_chars_rejected_on_blocks() {
    let mut puzzle = sample_puzzle();
    let res = transform::modify_char(&mut puzzle, 3, 0, Some('Z'));
    assert!(matches!(res, Err(EngineError::BlockedCell { x: 3, y: 0 })));
    assert_eq!(puzzle, sample_puzzle());

    let res = transform::modify_chars(&mut puzzle, &[(0, 1, Some('Q')), (2, 2, Some('R'))]);
    assert!(matches!(res, Err(EngineError::BlockedCell { x: 2, y: 2 })));
    assert_eq!(puzzle, sample_puzzle());

    // emptying a block is fine
    transform::modify_char(&mut puzzle, 3, 0, None).unwrap();
    assert!(puzzle.grid.is_block(3, 0));
}

#[test]
fn test_chars_rejected_on_fresh_block() {
    let mut puzzle = Puzzle::with_size(3, 3).unwrap();
    transform::modify_blocks(&mut puzzle, &[(1, 1, true)]).unwrap();

    let res = transform::modify_char(&mut puzzle, 1, 1, Some('Z'));
    assert!(matches!(res, Err(EngineError::BlockedCell { x: 1, y: 1 })));
    assert_eq!(puzzle.grid.get_char(1, 1), None);
}

#[test]
fn test_chars_rejected_on_voids() {
    let mut puzzle = sample_puzzle();
    puzzle.grid.set_void(0, 1, true).unwrap();
    let res = transform::modify_chars(&mut puzzle, &[(0, 1, Some('Q'))]);
    assert!(matches!(res, Err(EngineError::BlockedCell { x: 0, y: 1 })));
    assert_eq!(puzzle.grid.get_char(0, 1), None);
}

#[test]
fn test_structure_edits_out_of_range() {
    let mut puzzle = sample_puzzle();

    let res = transform::resize_grid(&mut puzzle, 0, 4);
    assert!(matches!(res, Err(EngineError::InvalidDimensions { .. })));
    assert_eq!(puzzle, sample_puzzle());

    assert_unchanged(transform::insert_row_above(&mut puzzle, 3), &puzzle);
    assert_unchanged(transform::insert_row_below(&mut puzzle, -1), &puzzle);
    assert_unchanged(transform::insert_column_left(&mut puzzle, 4), &puzzle);
    assert_unchanged(transform::insert_column_right(&mut puzzle, 7), &puzzle);
    assert_unchanged(transform::remove_row(&mut puzzle, 3), &puzzle);
    assert_unchanged(transform::remove_column(&mut puzzle, -2), &puzzle);
}

#[test]
fn test_last_line_cannot_be_removed() {
    let mut puzzle = Puzzle::with_size(3, 1).unwrap();
    assert!(matches!(transform::remove_row(&mut puzzle, 0), Err(EngineError::InvalidDimensions { .. })));
    assert_eq!(puzzle.grid.size(), (3, 1));
}
