//! Piece controller - the active falling piece
//!
//! The piece is an explicit `(kind, rotation index, anchor)` triple. All
//! movement goes through [`collides`]; a rejected move or rotation leaves the
//! piece untouched.

use crate::board::Board;
use crate::collision::collides;
use crate::shapes::{shape_at, shapes_for, Shape};
use crate::types::PieceKind;

/// Active falling piece. The anchor is the board position of the shape's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub col: i32,
    pub row: i32,
}

impl ActivePiece {
    /// Place a new piece in its first rotation state, centered on the top row.
    ///
    /// The caller decides what a colliding spawn means (game over).
    pub fn spawn(kind: PieceKind, board: &Board) -> Self {
        let shape = shape_at(kind, 0);
        Self {
            kind,
            rotation: 0,
            col: spawn_column(board.width(), shape.width()),
            row: 0,
        }
    }

    pub fn shape(&self) -> &'static Shape {
        shape_at(self.kind, self.rotation)
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(self.shape(), self.col, self.row, board)
    }

    /// Shift the anchor by (dx, dy) if the result is legal.
    pub fn try_move(&mut self, dx: i32, dy: i32, board: &Board) -> bool {
        let col = self.col + dx;
        let row = self.row + dy;
        if collides(self.shape(), col, row, board) {
            return false;
        }
        self.col = col;
        self.row = row;
        true
    }

    /// Advance to the next rotation state in place. No kicks are attempted.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let next = (self.rotation + 1) % shapes_for(self.kind).len();
        if collides(shape_at(self.kind, next), self.col, self.row, board) {
            return false;
        }
        self.rotation = next;
        true
    }

    /// Commit the piece's cells into the board.
    pub fn lock(&self, board: &mut Board) {
        board.place(self.shape(), self.col, self.row);
    }
}

/// `floor(W/2) - floor(shape_width/2)`
pub fn spawn_column(board_width: u16, shape_width: usize) -> i32 {
    board_width as i32 / 2 - shape_width as i32 / 2
}
