use serde::{Deserialize, Serialize};

/// Word direction inside the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Unit step (dx, dy) when walking a word in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Across => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// The bar that ends a word in this direction before the cell it is attached to
    pub fn bar_side(self) -> BarSide {
        match self {
            Direction::Across => BarSide::Left,
            Direction::Down => BarSide::Top,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Cell edge a bar can be attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarSide {
    Top,
    Left,
}

/// Bars on the top and left edge of a cell.
///
/// A bar separates two words without a block between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bars {
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub left: bool,
}

impl Bars {
    pub fn get(&self, side: BarSide) -> bool {
        match side {
            BarSide::Top => self.top,
            BarSide::Left => self.left,
        }
    }

    pub fn set(&mut self, side: BarSide, status: bool) {
        match side {
            BarSide::Top => self.top = status,
            BarSide::Left => self.left = status,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.top && !self.left
    }

    pub fn swap_sides(&mut self) {
        std::mem::swap(&mut self.top, &mut self.left);
    }
}

/// Named field of a clue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClueField {
    Text,
    Explanation,
}

/// Clue data stored at the first cell of a word
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub explanation: String,
}

impl Clue {
    pub fn field(&self, field: ClueField) -> &str {
        match field {
            ClueField::Text => &self.text,
            ClueField::Explanation => &self.explanation,
        }
    }

    pub fn set_field(&mut self, field: ClueField, value: impl Into<String>) {
        match field {
            ClueField::Text => self.text = value.into(),
            ClueField::Explanation => self.explanation = value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.explanation.is_empty()
    }
}

/// The across and down clues of a single cell
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub across: Option<Clue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<Clue>,
}

impl Clues {
    pub fn get(&self, direction: Direction) -> Option<&Clue> {
        match direction {
            Direction::Across => self.across.as_ref(),
            Direction::Down => self.down.as_ref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, direction: Direction) -> &mut Option<Clue> {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }

    /// Removes the clue of the given direction, returns it if there was one
    pub fn remove(&mut self, direction: Direction) -> Option<Clue> {
        self.slot_mut(direction).take()
    }

    pub fn swap_directions(&mut self) {
        std::mem::swap(&mut self.across, &mut self.down);
    }

    pub fn len(&self) -> usize {
        self.across.is_some() as usize + self.down.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_none() && self.down.is_none()
    }
}

/// A single grid cell.
///
/// A blocked cell never holds a character; the transforms that set blocks
/// clear the character first and character edits reject blocked cells.
/// A void cell is outside of the playing area, like a block that is not drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub block: bool,
    #[serde(default)]
    pub void: bool,
    #[serde(default)]
    pub ch: Option<char>,
    #[serde(default)]
    pub bar: Bars,
    #[serde(default)]
    pub clues: Clues,
}

impl Cell {
    pub fn blocked() -> Self {
        Self {
            block: true,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.block && !self.void && self.ch.is_none() && self.bar.is_empty() && self.clues.is_empty()
    }
}
