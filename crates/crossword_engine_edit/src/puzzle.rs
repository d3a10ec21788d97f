use crossword_engine::{Grid, Result};
use serde::{Deserialize, Serialize};

/// The document actions operate on: a puzzle owning exactly one live grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
}

impl Puzzle {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Create a puzzle with an empty `width` x `height` grid
    pub fn with_size(width: i32, height: i32) -> Result<Self> {
        Ok(Self::new(Grid::new(width, height)?))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
