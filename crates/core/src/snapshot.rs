use crate::piece::ActivePiece;
use crate::shapes::Shape;
use crate::types::{GameStatus, PieceKind};

/// Active piece as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub col: i32,
    pub row: i32,
    pub shape: &'static Shape,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            col: value.col,
            row: value.row,
            shape: value.shape(),
        }
    }
}

/// Read-only copy of everything a presentation layer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major cell tags, 0 = empty, 1..=7 = piece kind.
    pub board: Vec<u8>,
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Tag at (col, row), 0 when out of range.
    pub fn cell(&self, col: usize, row: usize) -> u8 {
        if col >= self.width as usize || row >= self.height as usize {
            return 0;
        }
        self.board[row * self.width as usize + col]
    }

    pub fn playable(&self) -> bool {
        self.status.is_running()
    }
}
