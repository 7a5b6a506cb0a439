//! Board module - manages the game grid
//!
//! The board is a fixed `width x height` grid where each cell is empty or holds
//! the kind of a locked piece. Storage is a flat row-major `Vec` allocated once;
//! dimensions never change after creation.
//! Coordinates: (col, row) where row 0 is the top.

use crate::config::ConfigError;
use crate::shapes::Shape;
use crate::types::{cell_tag, Cell, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Zero dimensions are rejected.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Empty 10x20 board.
    pub fn standard() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            cells: vec![None; DEFAULT_BOARD_WIDTH as usize * DEFAULT_BOARD_HEIGHT as usize],
        }
    }

    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if self.is_out_of_bounds(col, row) {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at (col, row). Returns None if out of bounds.
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row). Returns false if out of bounds.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_out_of_bounds(&self, col: i32, row: i32) -> bool {
        col < 0 || col >= self.width as i32 || row < 0 || row >= self.height as i32
    }

    /// Occupancy as seen by collision checks.
    ///
    /// Rows above the top (`row < 0`) are always free so pieces may protrude
    /// above the visible area. Any other out-of-bounds position is blocked.
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        if row < 0 {
            return col < 0 || col >= self.width as i32;
        }
        match self.get(col, row) {
            Some(cell) => cell.is_some(),
            None => true,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map_or(false, |cells| cells.iter().all(|c| c.is_some()))
    }

    /// Check if a row has no filled cells
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row)
            .map_or(false, |cells| cells.iter().all(|c| c.is_none()))
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Delete a row and insert an empty row at the top.
    ///
    /// Rows above `row` shift down by one; rows below are untouched.
    /// Returns false if `row` is out of range.
    pub fn remove_row(&mut self, row: usize) -> bool {
        if row >= self.height as usize {
            return false;
        }

        let width = self.width as usize;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(None);

        true
    }

    /// Write every occupied cell of `shape` anchored at (col, row).
    ///
    /// Cells above the top edge are skipped. No collision check is performed;
    /// the caller guarantees the placement is legal.
    pub fn place(&mut self, shape: &Shape, col: i32, row: i32) {
        let kind = shape.kind();
        for (dx, dy) in shape.minos() {
            let r = row + dy;
            if r < 0 {
                continue;
            }
            self.set(col + dx, r, Some(kind));
        }
    }

    /// Fill a row completely, optionally leaving one column empty.
    pub fn fill_row(&mut self, row: usize, kind: PieceKind, gap: Option<usize>) {
        for col in 0..self.width as usize {
            let cell = if Some(col) == gap { None } else { Some(kind) };
            self.set(col as i32, row as i32, cell);
        }
    }

    /// Number of non-empty rows
    pub fn occupied_rows(&self) -> usize {
        (0..self.height as usize)
            .filter(|&r| !self.is_row_empty(r))
            .count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write cell tags (0 = empty, 1..=7 = kind) row-major into `out`.
    pub fn write_tags(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|&c| cell_tag(c)));
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
