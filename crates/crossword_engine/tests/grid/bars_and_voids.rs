//! Bars and voids

use crossword_engine::{BarSide, ClueField, Direction};
use pretty_assertions::assert_eq;

use crate::helpers::{grid_from, render};

#[test]
fn test_void_is_outside_of_the_grid() {
    let grid = grid_from(&["~..", "...", "..~"]);
    assert!(grid.is_valid(0, 0));
    assert!(!grid.is_available(0, 0));
    assert!(!grid.is_start_word(0, 0, Direction::Across));
    assert!(grid.is_start_word(1, 0, Direction::Across));
    assert!(grid.is_start_word(0, 1, Direction::Down));
    assert_eq!(grid.word_length(0, 2, Direction::Across), 2);
    assert_eq!(grid.count_voids(), 2);
    assert_eq!(render(&grid), vec!["~..", "...", "..~"]);
}

#[test]
fn test_bar_splits_words() {
    let mut grid = grid_from(&["....", "....", "...."]);
    assert_eq!(grid.count_words(), 7);

    grid.set_bar(2, 0, BarSide::Left, true).unwrap();
    assert!(grid.has_bar(2, 0, BarSide::Left));
    assert!(grid.is_start_word(0, 0, Direction::Across));
    assert!(grid.is_start_word(2, 0, Direction::Across));
    assert_eq!(grid.word_length(0, 0, Direction::Across), 2);
    assert_eq!(grid.start_of_word(3, 0, Direction::Across), (2, 0));
    assert_eq!(grid.count_words(), 8);
    assert_eq!(grid.numbered_words(Direction::Across), vec![(1, 0, 0), (3, 2, 0), (5, 0, 1), (6, 0, 2)]);

    // a bar in front of a single cell leaves no word
    grid.set_bar(1, 1, BarSide::Top, true).unwrap();
    grid.set_bar(1, 2, BarSide::Top, true).unwrap();
    assert!(!grid.is_start_word(1, 1, Direction::Down));
    assert!(!grid.is_start_word(1, 2, Direction::Down));
}

#[test]
fn test_set_bar_removes_clue() {
    let mut grid = grid_from(&["....", "...."]);
    grid.store_clue(0, 0, Direction::Across, ClueField::Text, "across").unwrap();
    grid.store_clue(1, 0, Direction::Down, ClueField::Text, "down").unwrap();

    grid.set_bar(3, 0, BarSide::Left, true).unwrap();
    assert!(grid.clue(0, 0, Direction::Across).is_none());
    assert_eq!(grid.clue(1, 0, Direction::Down).unwrap().text, "down");

    grid.set_bar(1, 1, BarSide::Top, true).unwrap();
    assert!(grid.clue(1, 0, Direction::Down).is_none());

    assert!(grid.set_bar(4, 0, BarSide::Left, true).is_err());
}

#[test]
fn test_clear_bars_and_voids() {
    let mut grid = grid_from(&["~..", "...", "..~"]);
    grid.set_bar(1, 1, BarSide::Left, true).unwrap();
    grid.set_bar(2, 1, BarSide::Top, true).unwrap();

    grid.clear_bars();
    assert!(!grid.has_bar(1, 1, BarSide::Left));
    assert!(!grid.has_bar(2, 1, BarSide::Top));
    assert_eq!(grid.count_voids(), 2);

    grid.clear_voids();
    assert_eq!(grid.count_voids(), 0);
    assert!(grid.is_available(0, 0));
}

#[test]
fn test_bars_follow_flips() {
    let mut grid = grid_from(&["...", "..."]);
    grid.set_bar(1, 0, BarSide::Left, true).unwrap();
    grid.set_bar(2, 1, BarSide::Top, true).unwrap();

    let mut flipped = grid.clone();
    flipped.horizontal_flip();
    assert!(flipped.has_bar(2, 0, BarSide::Left));
    assert!(!flipped.has_bar(1, 0, BarSide::Left));
    assert!(flipped.has_bar(0, 1, BarSide::Top));

    let mut flipped = grid.clone();
    flipped.vertical_flip();
    // the bar between both rows stays between them
    assert!(flipped.has_bar(2, 1, BarSide::Top));
    assert!(flipped.has_bar(1, 1, BarSide::Left));
    assert!(!flipped.has_bar(1, 0, BarSide::Left));

    let mut flipped = grid.clone();
    flipped.diagonal_flip();
    assert_eq!(flipped.size(), (2, 3));
    assert!(flipped.has_bar(0, 1, BarSide::Top));
    assert!(flipped.has_bar(1, 2, BarSide::Left));
}

#[test]
fn test_bars_follow_line_edits() {
    let mut grid = grid_from(&["...", "...", "..."]);
    grid.set_bar(0, 1, BarSide::Top, true).unwrap();
    grid.set_bar(1, 0, BarSide::Left, true).unwrap();

    let mut edited = grid.clone();
    edited.insert_row(1, true).unwrap();
    assert!(edited.has_bar(0, 1, BarSide::Top));
    assert!(!edited.has_bar(0, 2, BarSide::Top));

    let mut edited = grid.clone();
    edited.insert_row(0, false).unwrap();
    assert!(!edited.has_bar(0, 1, BarSide::Top));
    assert!(edited.has_bar(0, 2, BarSide::Top));

    let mut edited = grid.clone();
    edited.insert_column(1, true).unwrap();
    assert!(edited.has_bar(1, 0, BarSide::Left));
    assert!(!edited.has_bar(2, 0, BarSide::Left));

    let mut edited = grid.clone();
    edited.shift_up();
    assert!(!edited.has_bar(0, 0, BarSide::Top));

    let mut edited = grid.clone();
    edited.shift_left();
    assert!(!edited.has_bar(0, 0, BarSide::Left));
}
