//! Document lifecycle tests: new puzzles, saving, preferences

use crossword_engine_edit::{Preferences, Puzzle, PuzzleEditState, UndoState};

#[test]
fn test_new_uses_preferences_size() {
    let state = PuzzleEditState::new().unwrap();
    assert_eq!(state.grid().size(), (15, 15));
    assert!(!state.is_dirty());

    let prefs = Preferences {
        new_initial_width: 5,
        new_initial_height: 7,
        ..Default::default()
    };
    let state = PuzzleEditState::with_preferences(prefs).unwrap();
    assert_eq!(state.grid().size(), (5, 7));
}

#[test]
fn test_invalid_initial_size() {
    let prefs = Preferences {
        new_initial_width: 0,
        ..Default::default()
    };
    assert!(PuzzleEditState::with_preferences(prefs).is_err());
}

#[test]
fn test_new_puzzle_drops_history() {
    let mut state = PuzzleEditState::new().unwrap();
    state.set_char(0, 0, Some('A')).unwrap();
    state.undo().unwrap();
    state.set_char(1, 1, Some('B')).unwrap();

    state.new_puzzle(4, 4).unwrap();
    assert_eq!(state.grid().size(), (4, 4));
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(!state.is_dirty());

    assert!(state.new_puzzle(0, 4).is_err());
    assert_eq!(state.grid().size(), (4, 4));
}

#[test]
fn test_set_puzzle_drops_history() {
    let mut state = PuzzleEditState::new().unwrap();
    state.set_char(0, 0, Some('A')).unwrap();

    let puzzle = Puzzle::with_size(2, 2).unwrap();
    state.set_puzzle(puzzle.clone());
    assert_eq!(state.puzzle(), &puzzle);
    assert_eq!(state.undo_stack_len(), 0);
}

#[test]
fn test_mark_saved() {
    let mut state = PuzzleEditState::new().unwrap();
    state.set_char(0, 0, Some('A')).unwrap();
    assert!(state.is_dirty());

    state.mark_saved();
    assert!(!state.is_dirty());
    assert!(state.can_undo());

    state.undo().unwrap();
    assert!(state.is_dirty());
}

#[test]
fn test_set_preferences_caps_history() {
    let mut state = PuzzleEditState::new().unwrap();
    for x in 0..10 {
        state.set_char(x, 0, Some('X')).unwrap();
    }
    state.set_preferences(Preferences {
        undo_buffer_size: 3,
        ..Default::default()
    });
    assert_eq!(state.undo_stack_len(), 3);
    assert_eq!(state.preferences().undo_buffer_size, 3);
}
