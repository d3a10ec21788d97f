use serde::{Deserialize, Serialize};

use crate::{BarSide, Cell, Clue, ClueField, Direction, EngineError, Result};

/// Rectangular crossword grid.
///
/// Cells are stored row by row (`rows[y][x]`). Read accessors are total: asking
/// for a coordinate outside of the grid yields the values of an empty cell.
/// Mutators validate their coordinates and report [`EngineError`] before
/// touching any cell, so a failed call leaves the grid unchanged.
///
/// Structural edits (resize, shifts, row/column insertion and removal) remove
/// the clues of the words they cut, because those words change length or
/// disappear.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid with the given dimensions, all cells empty
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let mut grid = Self {
            width: 0,
            height: 0,
            rows: Vec::new(),
        };
        grid.initialize(width, height)?;
        Ok(grid)
    }

    /// Reset the grid to the given dimensions with all empty cells
    pub fn initialize(&mut self, width: i32, height: i32) -> Result<()> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.rows = empty_rows(width, height);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Geometry
    // ═══════════════════════════════════════════════════════════════════════

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Get grid dimensions (width, height)
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Returns true if (x, y) lies within the grid's boundaries
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Returns true if (x, y) is valid and neither a block nor a void
    pub fn is_available(&self, x: i32, y: i32) -> bool {
        self.is_valid(x, y) && !self.is_block(x, y) && !self.is_void(x, y)
    }

    /// Iterate over all coordinates in left-to-right, top-to-bottom order
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn check_cell(&self, x: i32, y: i32) -> Result<()> {
        if self.is_valid(x, y) {
            Ok(())
        } else {
            Err(EngineError::out_of_bounds(x, y, self.width, self.height))
        }
    }

    pub fn check_row(&self, row: i32) -> Result<()> {
        if (0..self.height).contains(&row) {
            Ok(())
        } else {
            Err(EngineError::RowOutOfRange { row, height: self.height })
        }
    }

    pub fn check_column(&self, column: i32) -> Result<()> {
        if (0..self.width).contains(&column) {
            Ok(())
        } else {
            Err(EngineError::ColumnOutOfRange { column, width: self.width })
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Cell access
    // ═══════════════════════════════════════════════════════════════════════

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        if !self.is_valid(x, y) {
            return None;
        }
        Some(&self.rows[y as usize][x as usize])
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Result<&mut Cell> {
        self.check_cell(x, y)?;
        Ok(&mut self.rows[y as usize][x as usize])
    }

    /// Replace the whole cell at (x, y)
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) -> Result<()> {
        *self.cell_mut(x, y)? = cell;
        Ok(())
    }

    pub fn get_char(&self, x: i32, y: i32) -> Option<char> {
        self.cell(x, y).and_then(|cell| cell.ch)
    }

    pub fn is_char(&self, x: i32, y: i32) -> bool {
        self.get_char(x, y).is_some()
    }

    /// Set the character at (x, y), `None` empties the cell.
    ///
    /// The block status is not checked here; undo steps restore a character
    /// before the block status of its cell.
    pub fn set_char(&mut self, x: i32, y: i32, ch: Option<char>) -> Result<()> {
        self.cell_mut(x, y)?.ch = ch;
        Ok(())
    }

    pub fn clear_char(&mut self, x: i32, y: i32) -> Result<()> {
        self.set_char(x, y, None)
    }

    pub fn is_block(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_some_and(|cell| cell.block)
    }

    pub fn set_block(&mut self, x: i32, y: i32, block: bool) -> Result<()> {
        self.cell_mut(x, y)?.block = block;
        Ok(())
    }

    pub fn is_void(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_some_and(|cell| cell.void)
    }

    pub fn set_void(&mut self, x: i32, y: i32, void: bool) -> Result<()> {
        self.cell_mut(x, y)?.void = void;
        Ok(())
    }

    pub fn has_bar(&self, x: i32, y: i32, side: BarSide) -> bool {
        self.cell(x, y).is_some_and(|cell| cell.bar.get(side))
    }

    /// Set or remove the bar on one edge of (x, y).
    ///
    /// The word running across that edge changes, so its clue is removed.
    pub fn set_bar(&mut self, x: i32, y: i32, side: BarSide, status: bool) -> Result<()> {
        self.check_cell(x, y)?;
        let direction = match side {
            BarSide::Top => Direction::Down,
            BarSide::Left => Direction::Across,
        };
        self.clear_word_clues(&[(x, y, direction)]);
        self.cell_mut(x, y)?.bar.set(side, status);
        Ok(())
    }

    pub fn clue(&self, x: i32, y: i32, direction: Direction) -> Option<&Clue> {
        self.cell(x, y).and_then(|cell| cell.clues.get(direction))
    }

    /// Store one field of the clue at (x, y) in the given direction.
    ///
    /// An empty value removes the field; a clue without any remaining field
    /// is removed from the cell.
    pub fn store_clue(&mut self, x: i32, y: i32, direction: Direction, field: ClueField, value: &str) -> Result<()> {
        let slot = self.cell_mut(x, y)?.clues.slot_mut(direction);
        let clue = slot.get_or_insert_with(Clue::default);
        clue.set_field(field, value);
        if clue.is_empty() {
            *slot = None;
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Bulk content operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Clear the content of the grid, dimensions are kept
    pub fn clear(&mut self) {
        self.rows = empty_rows(self.width, self.height);
    }

    pub fn clear_chars(&mut self) {
        self.cells_mut().for_each(|cell| cell.ch = None);
    }

    pub fn clear_clues(&mut self) {
        self.cells_mut().for_each(|cell| cell.clues = Default::default());
    }

    pub fn clear_blocks(&mut self) {
        self.cells_mut().for_each(|cell| cell.block = false);
    }

    pub fn clear_bars(&mut self) {
        self.cells_mut().for_each(|cell| cell.bar = Default::default());
    }

    pub fn clear_voids(&mut self) {
        self.cells_mut().for_each(|cell| cell.void = false);
    }

    fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Structural operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Resize the grid to the given dimensions.
    ///
    /// Content within the new boundaries is preserved, content outside of them
    /// is lost. Clues of words reaching the last surviving row/column are removed.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        check_dimensions(width, height)?;

        let last_x = (width - 1).min(self.width - 1);
        let last_y = (height - 1).min(self.height - 1);
        let mut dirty: Vec<(i32, i32, Direction)> = self.positions().filter(|&(x, _)| x >= last_x).map(|(x, y)| (x, y, Direction::Across)).collect();
        dirty.extend(self.positions().filter(|&(_, y)| y >= last_y).map(|(x, y)| (x, y, Direction::Down)));
        self.clear_word_clues(&dirty);

        let old_width = self.width as usize;
        self.rows.resize_with(height as usize, || vec![Cell::default(); old_width]);
        for row in &mut self.rows {
            row.resize_with(width as usize, Cell::default);
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Insert an empty row above or below the row `y`
    pub fn insert_row(&mut self, y: i32, above: bool) -> Result<()> {
        self.check_row(y)?;

        let neighbour = if above { y - 1 } else { y + 1 };
        let mut dirty: Vec<(i32, i32, Direction)> = (0..self.width).map(|x| (x, y, Direction::Down)).collect();
        dirty.extend(
            (0..self.width)
                .filter(|&x| self.is_block(x, y) && self.is_valid(x, neighbour))
                .map(|x| (x, neighbour, Direction::Down)),
        );
        self.clear_word_clues(&dirty);

        let index = (if above { y } else { y + 1 }) as usize;
        self.rows.insert(index, vec![Cell::default(); self.width as usize]);
        self.height += 1;
        if above {
            // the bar above row y now belongs above the inserted row
            for x in 0..self.width as usize {
                let bar = std::mem::take(&mut self.rows[index + 1][x].bar.top);
                self.rows[index][x].bar.top = bar;
            }
        }
        Ok(())
    }

    /// Insert an empty column left or right of the column `x`
    pub fn insert_column(&mut self, x: i32, left: bool) -> Result<()> {
        self.check_column(x)?;

        let neighbour = if left { x - 1 } else { x + 1 };
        let mut dirty: Vec<(i32, i32, Direction)> = (0..self.height).map(|y| (x, y, Direction::Across)).collect();
        dirty.extend(
            (0..self.height)
                .filter(|&y| self.is_block(x, y) && self.is_valid(neighbour, y))
                .map(|y| (neighbour, y, Direction::Across)),
        );
        self.clear_word_clues(&dirty);

        let index = (if left { x } else { x + 1 }) as usize;
        for row in &mut self.rows {
            row.insert(index, Cell::default());
            if left {
                row[index].bar.left = std::mem::take(&mut row[index + 1].bar.left);
            }
        }
        self.width += 1;
        Ok(())
    }

    /// Remove the row `y`. The last remaining row can't be removed.
    pub fn remove_row(&mut self, y: i32) -> Result<()> {
        self.check_row(y)?;
        if self.height <= 1 {
            return Err(EngineError::InvalidDimensions {
                width: self.width,
                height: self.height - 1,
            });
        }

        let mut dirty: Vec<(i32, i32, Direction)> = (0..self.width).map(|x| (x, y, Direction::Down)).collect();
        for q in [y - 1, y + 1] {
            dirty.extend(
                (0..self.width)
                    .filter(|&x| self.is_block(x, y) && self.is_valid(x, q))
                    .map(|x| (x, q, Direction::Down)),
            );
        }
        self.clear_word_clues(&dirty);

        self.rows.remove(y as usize);
        self.height -= 1;
        Ok(())
    }

    /// Remove the column `x`. The last remaining column can't be removed.
    pub fn remove_column(&mut self, x: i32) -> Result<()> {
        self.check_column(x)?;
        if self.width <= 1 {
            return Err(EngineError::InvalidDimensions {
                width: self.width - 1,
                height: self.height,
            });
        }

        let mut dirty: Vec<(i32, i32, Direction)> = (0..self.height).map(|y| (x, y, Direction::Across)).collect();
        for p in [x - 1, x + 1] {
            dirty.extend(
                (0..self.height)
                    .filter(|&y| self.is_block(x, y) && self.is_valid(p, y))
                    .map(|y| (p, y, Direction::Across)),
            );
        }
        self.clear_word_clues(&dirty);

        for row in &mut self.rows {
            row.remove(x as usize);
        }
        self.width -= 1;
        Ok(())
    }

    /// Move the content up by one cell. The top row is lost, an empty row is added at the bottom.
    pub fn shift_up(&mut self) {
        self.clear_edge_clues(Direction::Down);
        self.rows.remove(0);
        self.rows.push(vec![Cell::default(); self.width as usize]);
        for cell in &mut self.rows[0] {
            cell.bar.top = false;
        }
    }

    /// Move the content down by one cell. The bottom row is lost, an empty row is added at the top.
    pub fn shift_down(&mut self) {
        self.clear_edge_clues(Direction::Down);
        self.rows.pop();
        self.rows.insert(0, vec![Cell::default(); self.width as usize]);
    }

    /// Move the content left by one cell. The left column is lost, an empty column is added at the right.
    pub fn shift_left(&mut self) {
        self.clear_edge_clues(Direction::Across);
        for row in &mut self.rows {
            row.remove(0);
            row.push(Cell::default());
            row[0].bar.left = false;
        }
    }

    /// Move the content right by one cell. The right column is lost, an empty column is added at the left.
    pub fn shift_right(&mut self) {
        self.clear_edge_clues(Direction::Across);
        for row in &mut self.rows {
            row.pop();
            row.insert(0, Cell::default());
        }
    }

    /// Mirror the content left to right and clear the clues.
    ///
    /// A left bar ends up on the right edge of its mirrored cell, which is the
    /// left bar of the next cell.
    pub fn horizontal_flip(&mut self) {
        for row in &mut self.rows {
            row.reverse();
            let bars: Vec<bool> = row.iter().map(|cell| cell.bar.left).collect();
            for (x, cell) in row.iter_mut().enumerate() {
                cell.bar.left = x > 0 && bars[x - 1];
            }
        }
        self.clear_clues();
    }

    /// Mirror the content top to bottom and clear the clues
    pub fn vertical_flip(&mut self) {
        self.rows.reverse();
        for x in 0..self.width as usize {
            let bars: Vec<bool> = self.rows.iter().map(|row| row[x].bar.top).collect();
            for (y, row) in self.rows.iter_mut().enumerate() {
                row[x].bar.top = y > 0 && bars[y - 1];
            }
        }
        self.clear_clues();
    }

    /// Transpose the grid along its main diagonal.
    ///
    /// Across and down clues trade places, so do top and left bars. A non square
    /// grid swaps its width and height.
    pub fn diagonal_flip(&mut self) {
        let mut rows = empty_rows(self.height, self.width);
        for (y, row) in self.rows.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let mut cell = std::mem::take(cell);
                cell.clues.swap_directions();
                cell.bar.swap_sides();
                rows[x][y] = cell;
            }
        }
        self.rows = rows;
        std::mem::swap(&mut self.width, &mut self.height);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Words
    // ═══════════════════════════════════════════════════════════════════════

    /// Returns true when a word of at least two cells begins at (x, y)
    pub fn is_start_word(&self, x: i32, y: i32, direction: Direction) -> bool {
        if !self.is_available(x, y) {
            return false;
        }
        let (dx, dy) = direction.delta();
        let side = direction.bar_side();
        let before = !self.is_available(x - dx, y - dy) || self.has_bar(x, y, side);
        let after = self.is_available(x + dx, y + dy) && !self.has_bar(x + dx, y + dy, side);
        before && after
    }

    pub fn is_start_any_word(&self, x: i32, y: i32) -> bool {
        self.is_start_word(x, y, Direction::Across) || self.is_start_word(x, y, Direction::Down)
    }

    /// Returns the first cell of the word in `direction` that contains (x, y).
    ///
    /// An unavailable cell is returned unchanged.
    pub fn start_of_word(&self, x: i32, y: i32, direction: Direction) -> (i32, i32) {
        let (dx, dy) = direction.delta();
        let side = direction.bar_side();
        let (mut x, mut y) = (x, y);
        if !self.is_available(x, y) {
            return (x, y);
        }
        while !self.has_bar(x, y, side) && self.is_available(x - dx, y - dy) {
            x -= dx;
            y -= dy;
        }
        (x, y)
    }

    /// Number of cells from (x, y) in `direction` up to the next block, bar or the border
    pub fn word_length(&self, x: i32, y: i32, direction: Direction) -> usize {
        let (dx, dy) = direction.delta();
        let side = direction.bar_side();
        let (mut x, mut y) = (x, y);
        let mut length = 0;
        while self.is_available(x, y) {
            length += 1;
            x += dx;
            y += dy;
            if self.has_bar(x, y, side) {
                break;
            }
        }
        length
    }

    /// Numbered start cells of all words in `direction`.
    ///
    /// Numbers are shared between directions, as printed in a crossword.
    pub fn numbered_words(&self, direction: Direction) -> Vec<(usize, i32, i32)> {
        let mut number = 0;
        let mut words = Vec::new();
        for (x, y) in self.positions() {
            if self.is_start_any_word(x, y) {
                number += 1;
            }
            if self.is_start_word(x, y, direction) {
                words.push((number, x, y));
            }
        }
        words
    }

    pub fn count_words(&self) -> usize {
        self.positions()
            .map(|(x, y)| self.is_start_word(x, y, Direction::Across) as usize + self.is_start_word(x, y, Direction::Down) as usize)
            .sum()
    }

    pub fn count_blocks(&self) -> usize {
        self.positions().filter(|&(x, y)| self.is_block(x, y)).count()
    }

    pub fn count_voids(&self) -> usize {
        self.positions().filter(|&(x, y)| self.is_void(x, y)).count()
    }

    pub fn count_chars(&self) -> usize {
        self.positions().filter(|&(x, y)| self.is_char(x, y)).count()
    }

    /// Remove the clues of the words containing the given cells
    fn clear_word_clues(&mut self, dirty: &[(i32, i32, Direction)]) {
        for &(x, y, direction) in dirty {
            let (p, q) = self.start_of_word(x, y, direction);
            if !self.is_valid(p, q) {
                continue;
            }
            if self.rows[q as usize][p as usize].clues.remove(direction).is_some() {
                log::debug!("removed {} clue at ({}, {})", direction, p, q);
            }
        }
    }

    /// Remove the clues of words touching the first or last line crossed by `direction`
    fn clear_edge_clues(&mut self, direction: Direction) {
        let dirty: Vec<(i32, i32, Direction)> = match direction {
            Direction::Down => (0..self.width).flat_map(|x| [(x, 0, direction), (x, self.height - 1, direction)]).collect(),
            Direction::Across => (0..self.height).flat_map(|y| [(0, y, direction), (self.width - 1, y, direction)]).collect(),
        };
        self.clear_word_clues(&dirty);
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            for cell in row {
                let ch = match (cell.block, cell.void, cell.ch) {
                    (true, _, _) => '#',
                    (false, true, _) => '~',
                    (false, false, Some(ch)) => ch,
                    (false, false, None) => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn check_dimensions(width: i32, height: i32) -> Result<()> {
    if width < 1 || height < 1 {
        return Err(EngineError::InvalidDimensions { width, height });
    }
    Ok(())
}

fn empty_rows(width: i32, height: i32) -> Vec<Vec<Cell>> {
    vec![vec![Cell::default(); width as usize]; height as usize]
}
