#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Grid model for crossword puzzles.
//!
//! Provides the [`Grid`] document with its cells, blocks and clues. Undo and
//! redo of grid edits live in the `crossword_engine_edit` crate.

mod error;
pub use error::*;

mod cell;
pub use cell::*;

mod grid;
pub use grid::*;
