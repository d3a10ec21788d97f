//! Undo / redo behavior on a live puzzle

use crossword_engine_edit::{transform, ActionStack, EditStep, EngineError, Preferences, Puzzle};
use pretty_assertions::assert_eq;

use crate::helpers::{named_action, redo_names, undo_names};

#[test]
fn test_block_over_char_scenario() {
    let mut puzzle = Puzzle::with_size(3, 3).unwrap();
    let mut stack = ActionStack::new(&Preferences::default());

    stack.push_action(transform::modify_char(&mut puzzle, 1, 1, Some('A')).unwrap());
    stack.push_action(transform::modify_blocks(&mut puzzle, &[(1, 1, true)]).unwrap());
    assert_eq!(puzzle.grid.get_char(1, 1), None);
    assert!(puzzle.grid.is_block(1, 1));

    stack.undo_action(&mut puzzle).unwrap();
    assert_eq!(puzzle.grid.get_char(1, 1), Some('A'));
    assert!(!puzzle.grid.is_block(1, 1));

    stack.undo_action(&mut puzzle).unwrap();
    assert_eq!(puzzle.grid.get_char(1, 1), None);
    assert!(!puzzle.grid.is_block(1, 1));

    stack.redo_action(&mut puzzle).unwrap();
    stack.redo_action(&mut puzzle).unwrap();
    assert_eq!(puzzle.grid.get_char(1, 1), None);
    assert!(puzzle.grid.is_block(1, 1));
}

#[test]
fn test_resize_through_stack() {
    let mut puzzle = Puzzle::with_size(2, 2).unwrap();
    puzzle.grid.set_char(1, 0, Some('B')).unwrap();
    let small = puzzle.grid.clone();
    let mut stack = ActionStack::default();

    stack.push_action(transform::resize_grid(&mut puzzle, 4, 4).unwrap());
    let large = puzzle.grid.clone();

    stack.undo_action(&mut puzzle).unwrap();
    assert_eq!(puzzle.grid, small);

    stack.redo_action(&mut puzzle).unwrap();
    assert_eq!(puzzle.grid, large);
}

#[test]
fn test_undo_replays_previous_action() {
    let mut puzzle = Puzzle::with_size(3, 1).unwrap();
    let mut stack = ActionStack::default();
    stack.push_action(transform::modify_char(&mut puzzle, 0, 0, Some('A')).unwrap());
    stack.push_action(transform::modify_char(&mut puzzle, 1, 0, Some('B')).unwrap());
    stack.push_action(transform::modify_char(&mut puzzle, 2, 0, Some('C')).unwrap());

    stack.undo_action(&mut puzzle).unwrap();
    assert_eq!(puzzle.grid.to_string(), "AB.\n");
    stack.undo_action(&mut puzzle).unwrap();
    assert_eq!(puzzle.grid.to_string(), "A..\n");
    stack.redo_action(&mut puzzle).unwrap();
    assert_eq!(puzzle.grid.to_string(), "AB.\n");
}

#[test]
fn test_push_clears_redo() {
    let mut puzzle = Puzzle::with_size(1, 1).unwrap();
    let mut stack = ActionStack::default();
    stack.push_action(named_action("a"));
    stack.push_action(named_action("b"));
    stack.undo_action(&mut puzzle).unwrap();
    assert_eq!(redo_names(&stack), vec!["b"]);

    stack.push_action(named_action("c"));
    assert!(!stack.can_redo());
    assert_eq!(undo_names(&stack), vec!["a", "c"]);
}

#[test]
fn test_empty_stacks_are_noops() {
    let mut puzzle = Puzzle::with_size(2, 2).unwrap();
    let mut stack = ActionStack::default();
    stack.undo_action(&mut puzzle).unwrap();
    stack.redo_action(&mut puzzle).unwrap();
    assert_eq!(stack.distance_from_saved_puzzle(), 0);
    assert!(!stack.can_undo());
    assert!(!stack.can_redo());
    assert!(stack.peek_action().is_none());
}

#[test]
fn test_descriptions_and_peek() {
    let mut puzzle = Puzzle::with_size(1, 1).unwrap();
    let mut stack = ActionStack::default();
    stack.push_action(named_action("first"));
    stack.push_action(named_action("second"));

    assert_eq!(stack.peek_action().map(|a| a.description()), Some("second"));
    assert_eq!(stack.undo_description(), Some("second".to_string()));
    assert_eq!(stack.redo_description(), None);

    stack.undo_action(&mut puzzle).unwrap();
    assert_eq!(stack.undo_description(), Some("first".to_string()));
    assert_eq!(stack.redo_description(), Some("second".to_string()));
    assert_eq!((stack.undo_len(), stack.redo_len()), (1, 1));
}

#[test]
fn test_failed_undo_still_moves_action() {
    let mut puzzle = Puzzle::with_size(2, 2).unwrap();
    let mut stack = ActionStack::default();
    let mut broken = named_action("broken");
    broken.add_undo_step(EditStep::SetChar { x: 5, y: 5, ch: Some('A') });
    stack.push_action(broken);

    let res = stack.undo_action(&mut puzzle);
    assert!(matches!(res, Err(EngineError::OutOfBounds { .. })));
    assert!(!stack.can_undo());
    assert_eq!(redo_names(&stack), vec!["broken"]);
    assert_eq!(stack.distance_from_saved_puzzle(), 0);
}

#[test]
fn test_clear() {
    let mut stack = ActionStack::default();
    stack.push_action(named_action("a"));
    stack.clear();
    assert_eq!((stack.undo_len(), stack.redo_len()), (0, 0));
    assert_eq!(stack.distance_from_saved_puzzle(), 0);
}
