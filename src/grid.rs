use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {Self {row, col}}
}

/// A rectangular byte grid, one row per input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn parse(input: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(input.len());
        let mut rows = 0;
        let mut cols = 0;
        for (row, line) in input.trim().lines().enumerate() {
            if row == 0 {
                cols = line.len();
            } else if line.len() != cols {
                return Err(Error::MalformedGrid {row, expected: cols, found: line.len()});
            }
            cells.extend_from_slice(line.as_bytes());
            rows += 1;
        }
        Ok(Self {cells, rows, cols})
    }

    pub fn rows(&self) -> usize {self.rows}
    pub fn cols(&self) -> usize {self.cols}
    pub fn cell_count(&self) -> usize {self.cells.len()}

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Flat index of `pos`, or `OutOfRangeAccess` if it lies outside the grid.
    pub fn index(&self, pos: Position) -> Result<usize> {
        if self.contains(pos) {
            Ok(pos.row * self.cols + pos.col)
        } else {
            Err(Error::OutOfRangeAccess {row: pos.row, col: pos.col})
        }
    }

    pub fn get(&self, pos: Position) -> Option<u8> {
        self.contains(pos).then(|| self.cells[pos.row * self.cols + pos.col])
    }

    /// The cell `n` steps of `(dr, dc)` away from `pos`, if still inside the grid.
    pub fn offset(&self, pos: Position, (dr, dc): (isize, isize), n: isize) -> Option<Position> {
        let row = pos.row.checked_add_signed(dr.checked_mul(n)?)?;
        let col = pos.col.checked_add_signed(dc.checked_mul(n)?)?;
        let next = Position {row, col};
        self.contains(next).then_some(next)
    }

    pub fn positions(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.cells.iter().enumerate().map(|(ix, &cell)|
            (Position {row: ix / self.cols, col: ix % self.cols}, cell)
        )
    }
}
