//! Reversible grid actions
//!
//! An [`Action`] is the unit pushed onto the [`crate::ActionStack`]. It keeps two
//! ordered lists of [`EditStep`]s (one for undo, one for redo) and, for full
//! transforms, a pair of grid snapshots. All of it is plain data, so actions
//! can be inspected and serialized with the session state.

use crossword_engine::{ClueField, Direction, Grid, Result};
use serde::{Deserialize, Serialize};

use crate::Puzzle;

/// How much derived state a caller has to recompute after an action ran
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformType {
    /// Only characters or clues changed, the word layout is unchanged
    Content,
    /// Blocks or grid dimensions changed
    Structure,
}

/// A single primitive grid mutation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditStep {
    /// Set (or empty, for `None`) the character of a cell
    SetChar { x: i32, y: i32, ch: Option<char> },

    /// Empty the character of a cell
    ClearChar { x: i32, y: i32 },

    /// Set the block flag of a cell
    SetBlock { x: i32, y: i32, block: bool },

    /// Store one clue field, an empty value removes it
    StoreClue {
        x: i32,
        y: i32,
        direction: Direction,
        field: ClueField,
        value: String,
    },
}

impl EditStep {
    pub fn apply(&self, puzzle: &mut Puzzle) -> Result<()> {
        let grid = &mut puzzle.grid;
        match self {
            EditStep::SetChar { x, y, ch } => grid.set_char(*x, *y, *ch),
            EditStep::ClearChar { x, y } => grid.clear_char(*x, *y),
            EditStep::SetBlock { x, y, block } => grid.set_block(*x, *y, *block),
            EditStep::StoreClue { x, y, direction, field, value } => grid.store_clue(*x, *y, *direction, *field, value),
        }
    }
}

/// Snapshot pair of a full transform.
///
/// Both grids are owned copies; they never alias the live document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTransform {
    from_grid: Grid,
    to_grid: Grid,
    size_changed: bool,
}

impl FullTransform {
    pub fn new(from_grid: Grid, to_grid: Grid) -> Self {
        let size_changed = from_grid.size() != to_grid.size();
        Self {
            from_grid,
            to_grid,
            size_changed,
        }
    }

    pub fn from_grid(&self) -> &Grid {
        &self.from_grid
    }

    pub fn to_grid(&self) -> &Grid {
        &self.to_grid
    }

    pub fn size_changed(&self) -> bool {
        self.size_changed
    }

    fn apply(&self, puzzle: &mut Puzzle, source: &Grid) -> Result<()> {
        if self.size_changed {
            puzzle.grid.initialize(source.width(), source.height())?;
        }
        for (x, y) in source.positions() {
            let cell = source.cell(x, y).cloned().unwrap_or_default();
            puzzle.grid.set_cell(x, y, cell)?;
        }
        Ok(())
    }
}

/// Reversible unit of work on a [`Puzzle`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    description: String,
    transform_type: TransformType,
    #[serde(default)]
    undo_steps: Vec<EditStep>,
    #[serde(default)]
    redo_steps: Vec<EditStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_transform: Option<FullTransform>,
}

impl Action {
    /// Create an action without any steps
    pub fn new(description: impl Into<String>, transform_type: TransformType) -> Self {
        Self {
            description: description.into(),
            transform_type,
            undo_steps: Vec::new(),
            redo_steps: Vec::new(),
            full_transform: None,
        }
    }

    /// Create a full transform action that reverses by replacing the whole grid
    pub fn new_full_transform(description: impl Into<String>, transform_type: TransformType, from_grid: Grid, to_grid: Grid) -> Self {
        Self {
            full_transform: Some(FullTransform::new(from_grid, to_grid)),
            ..Self::new(description, transform_type)
        }
    }

    pub fn add_undo_step(&mut self, step: EditStep) {
        self.undo_steps.push(step);
    }

    pub fn add_redo_step(&mut self, step: EditStep) {
        self.redo_steps.push(step);
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn transform_type(&self) -> TransformType {
        self.transform_type
    }

    pub fn undo_steps(&self) -> &[EditStep] {
        &self.undo_steps
    }

    pub fn redo_steps(&self) -> &[EditStep] {
        &self.redo_steps
    }

    pub fn full_transform(&self) -> Option<&FullTransform> {
        self.full_transform.as_ref()
    }

    pub fn is_full_transform(&self) -> bool {
        self.full_transform.is_some()
    }

    /// Revert the action: run the undo steps in order, then restore the "from" snapshot
    pub fn perform_undo(&self, puzzle: &mut Puzzle) -> Result<()> {
        for step in &self.undo_steps {
            step.apply(puzzle)?;
        }
        if let Some(transform) = &self.full_transform {
            transform.apply(puzzle, &transform.from_grid)?;
        }
        Ok(())
    }

    /// Replay the action: run the redo steps in order, then restore the "to" snapshot
    pub fn perform_redo(&self, puzzle: &mut Puzzle) -> Result<()> {
        for step in &self.redo_steps {
            step.apply(puzzle)?;
        }
        if let Some(transform) = &self.full_transform {
            transform.apply(puzzle, &transform.to_grid)?;
        }
        Ok(())
    }
}
