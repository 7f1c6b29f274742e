use error_chain::bail;
use log::{debug, trace};
use std::slice;

use crate::cells::{Cell, CompassPrimary};
use crate::errors::*;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// The number of rows and columns of a default constructed maze.
pub const DEFAULT_DIMENSION: usize = 16;

/// Outcome of a wall mutation that passed the bounds check.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallUpdate {
    Applied,
    /// The change would have removed part of the outer border.
    RejectedBorder,
    /// The maze is finalized and no longer accepts changes.
    RejectedFinalized,
}

impl WallUpdate {
    #[inline]
    pub fn is_applied(self) -> bool {
        self == WallUpdate::Applied
    }
}

impl From<WallUpdate> for bool {
    fn from(update: WallUpdate) -> bool {
        update.is_applied()
    }
}

/// A rectangular micromouse maze.
///
/// Each wall is stored in both of the cells it separates. Every change goes through
/// `set_cell_walls`, which writes both sides together, so neighbouring cells always agree and the
/// outer border is never opened.
#[derive(Clone, Debug)]
pub struct Maze {
    rows: RowsCount,
    columns: ColumnsCount,
    cells: Vec<Cell>, // row major
    finalized: bool,
}

// Equality is about the walls; whether the maze is finalized does not matter.
impl PartialEq for Maze {
    fn eq(&self, other: &Maze) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.cells == other.cells
    }
}
impl Eq for Maze {}

impl Default for Maze {
    fn default() -> Maze {
        Maze::new()
    }
}

impl Maze {
    /// A `DEFAULT_DIMENSION` square maze with walls along the border and nowhere else.
    pub fn new() -> Maze {
        Maze::bordered(RowsCount(DEFAULT_DIMENSION), ColumnsCount(DEFAULT_DIMENSION))
    }

    /// A maze of the given size with walls along the border and nowhere else.
    pub fn with_dimensions(rows: RowsCount, columns: ColumnsCount) -> Result<Maze> {
        if rows.0 < 1 || columns.0 < 1 {
            bail!(ErrorKind::InvalidDimension(rows.0, columns.0));
        }
        Ok(Maze::bordered(rows, columns))
    }

    /// Caller guarantees both dimensions are at least 1.
    pub(crate) fn bordered(rows: RowsCount, columns: ColumnsCount) -> Maze {
        let (RowsCount(row_count), ColumnsCount(column_count)) = (rows, columns);
        debug!("creating {}x{} maze", row_count, column_count);

        let mut cells = Vec::with_capacity(row_count * column_count);
        for row in 0..row_count {
            for column in 0..column_count {
                cells.push(Cell::new(row == 0,
                                     column == column_count - 1,
                                     row == row_count - 1,
                                     column == 0));
            }
        }

        Maze {
            rows: rows,
            columns: columns,
            cells: cells,
            finalized: false,
        }
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Lock the maze against any further wall changes.
    /// Returns whether the maze was already finalized before this call.
    pub fn finalize_maze(&mut self) -> bool {
        let was_finalized = self.finalized;
        self.finalized = true;
        was_finalized
    }

    pub fn cell(&self, row: RowIndex, column: ColumnIndex) -> Result<Cell> {
        self.cell_index(row, column).map(|index| self.cells[index])
    }

    pub fn has_wall(&self, row: RowIndex, column: ColumnIndex, dir: CompassPrimary) -> Result<bool> {
        self.cell(row, column).map(|cell| cell.has_wall(dir))
    }

    pub fn has_northern_wall(&self, row: RowIndex, column: ColumnIndex) -> Result<bool> {
        self.has_wall(row, column, CompassPrimary::North)
    }

    pub fn has_eastern_wall(&self, row: RowIndex, column: ColumnIndex) -> Result<bool> {
        self.has_wall(row, column, CompassPrimary::East)
    }

    pub fn has_southern_wall(&self, row: RowIndex, column: ColumnIndex) -> Result<bool> {
        self.has_wall(row, column, CompassPrimary::South)
    }

    pub fn has_western_wall(&self, row: RowIndex, column: ColumnIndex) -> Result<bool> {
        self.has_wall(row, column, CompassPrimary::West)
    }

    /// Is the side `dir` of the cell part of the outer border of the maze?
    pub fn is_border(&self, row: RowIndex, column: ColumnIndex, dir: CompassPrimary) -> bool {
        let (RowIndex(r), ColumnIndex(c)) = (row, column);
        match dir {
            CompassPrimary::North => r == 0,
            CompassPrimary::East => c + 1 == self.columns.0,
            CompassPrimary::South => r + 1 == self.rows.0,
            CompassPrimary::West => c == 0,
        }
    }

    /// Overwrite all four walls of a cell, updating the neighbouring cells that share them.
    ///
    /// Nothing changes unless the update is `Applied`: a finalized maze rejects every change and
    /// a change that would clear part of the outer border is rejected as a whole.
    /// Fails with `OutOfBounds` if the cell is not in the maze.
    pub fn set_cell_walls(&mut self,
                          row: RowIndex,
                          column: ColumnIndex,
                          walls: Cell)
                          -> Result<WallUpdate> {
        let index = self.cell_index(row, column)?;

        if self.finalized {
            trace!("finalized maze rejected walls {:?} at ({}, {})", walls, row.0, column.0);
            return Ok(WallUpdate::RejectedFinalized);
        }

        let opens_border = CompassPrimary::ALL
            .iter()
            .any(|&dir| !walls.has_wall(dir) && self.is_border(row, column, dir));
        if opens_border {
            trace!("walls {:?} at ({}, {}) would open the border", walls, row.0, column.0);
            return Ok(WallUpdate::RejectedBorder);
        }

        self.cells[index] = walls;
        for &dir in CompassPrimary::ALL.iter() {
            if let Some(neighbour) = self.neighbour_index(row, column, dir) {
                self.cells[neighbour] = self.cells[neighbour]
                    .with_wall(dir.opposite(), walls.has_wall(dir));
            }
        }

        Ok(WallUpdate::Applied)
    }

    /// Set or clear one wall of a cell, keeping the other three as they are.
    pub fn set_wall(&mut self,
                    row: RowIndex,
                    column: ColumnIndex,
                    dir: CompassPrimary,
                    present: bool)
                    -> Result<WallUpdate> {
        let current = self.cell(row, column)?;
        self.set_cell_walls(row, column, current.with_wall(dir, present))
    }

    #[inline]
    pub fn add_wall(&mut self, row: RowIndex, column: ColumnIndex, dir: CompassPrimary) -> Result<WallUpdate> {
        self.set_wall(row, column, dir, true)
    }

    #[inline]
    pub fn remove_wall(&mut self, row: RowIndex, column: ColumnIndex, dir: CompassPrimary) -> Result<WallUpdate> {
        self.set_wall(row, column, dir, false)
    }

    pub fn add_northern_wall(&mut self, row: RowIndex, column: ColumnIndex) -> Result<WallUpdate> {
        self.add_wall(row, column, CompassPrimary::North)
    }

    pub fn add_eastern_wall(&mut self, row: RowIndex, column: ColumnIndex) -> Result<WallUpdate> {
        self.add_wall(row, column, CompassPrimary::East)
    }

    pub fn add_southern_wall(&mut self, row: RowIndex, column: ColumnIndex) -> Result<WallUpdate> {
        self.add_wall(row, column, CompassPrimary::South)
    }

    pub fn add_western_wall(&mut self, row: RowIndex, column: ColumnIndex) -> Result<WallUpdate> {
        self.add_wall(row, column, CompassPrimary::West)
    }

    pub fn remove_northern_wall(&mut self, row: RowIndex, column: ColumnIndex) -> Result<WallUpdate> {
        self.remove_wall(row, column, CompassPrimary::North)
    }

    pub fn remove_eastern_wall(&mut self, row: RowIndex, column: ColumnIndex) -> Result<WallUpdate> {
        self.remove_wall(row, column, CompassPrimary::East)
    }

    pub fn remove_southern_wall(&mut self, row: RowIndex, column: ColumnIndex) -> Result<WallUpdate> {
        self.remove_wall(row, column, CompassPrimary::South)
    }

    pub fn remove_western_wall(&mut self, row: RowIndex, column: ColumnIndex) -> Result<WallUpdate> {
        self.remove_wall(row, column, CompassPrimary::West)
    }

    /// All cells in row major order with their grid position.
    pub fn iter(&self) -> impl Iterator<Item = (RowIndex, ColumnIndex, Cell)> + '_ {
        let column_count = self.columns.0;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| {
                (RowIndex(index / column_count), ColumnIndex(index % column_count), *cell)
            })
    }

    /// The cells of each row, from the northern row to the southern row.
    #[inline]
    pub fn iter_row(&self) -> slice::Chunks<'_, Cell> {
        self.cells.chunks(self.columns.0)
    }

    fn cell_index(&self, row: RowIndex, column: ColumnIndex) -> Result<usize> {
        let (RowIndex(r), ColumnIndex(c)) = (row, column);
        if r < self.rows.0 && c < self.columns.0 {
            Ok(r * self.columns.0 + c)
        } else {
            Err(ErrorKind::OutOfBounds(r, c).into())
        }
    }

    /// Index of the adjacent cell in direction `dir`, None at the border.
    /// Assumes the given cell is valid.
    fn neighbour_index(&self, row: RowIndex, column: ColumnIndex, dir: CompassPrimary) -> Option<usize> {
        if self.is_border(row, column, dir) {
            return None;
        }
        let (RowIndex(r), ColumnIndex(c)) = (row, column);
        let (nr, nc) = match dir {
            CompassPrimary::North => (r - 1, c),
            CompassPrimary::East => (r, c + 1),
            CompassPrimary::South => (r + 1, c),
            CompassPrimary::West => (r, c - 1),
        };
        Some(nr * self.columns.0 + nc)
    }
}
