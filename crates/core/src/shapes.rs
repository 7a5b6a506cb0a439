//! Shape catalog - pre-enumerated rotation states for every piece kind
//!
//! Each kind owns an ordered, cyclic list of occupancy matrices. Rotating a piece
//! advances one step through this list (wrapping); there is no rotation formula
//! and no wall-kick table. Matrix cells hold the kind's tag (non-zero) or 0.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Offset of a single mino relative to the shape's top-left cell, as (col, row).
pub type MinoOffset = (i32, i32);

/// One rotation state of one piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    kind: PieceKind,
    rows: &'static [&'static [u8]],
}

impl Shape {
    const fn new(kind: PieceKind, rows: &'static [&'static [u8]]) -> Self {
        Self { kind, rows }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Number of columns in the matrix.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Number of rows in the matrix.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Raw matrix rows (cell values).
    pub fn rows(&self) -> &'static [&'static [u8]] {
        self.rows
    }

    /// Offsets of all non-zero cells, row by row.
    pub fn minos(&self) -> ArrayVec<MinoOffset, 4> {
        let mut out = ArrayVec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v != 0 {
                    out.push((c as i32, r as i32));
                }
            }
        }
        out
    }
}

const I_SHAPES: [Shape; 1] = [Shape::new(PieceKind::I, &[&[1, 1, 1, 1]])];

const O_SHAPES: [Shape; 1] = [Shape::new(PieceKind::O, &[&[2, 2], &[2, 2]])];

const T_SHAPES: [Shape; 4] = [
    Shape::new(PieceKind::T, &[&[0, 3, 0], &[3, 3, 3]]),
    Shape::new(PieceKind::T, &[&[0, 3, 0], &[0, 3, 3], &[0, 3, 0]]),
    Shape::new(PieceKind::T, &[&[3, 3, 3], &[0, 3, 0]]),
    Shape::new(PieceKind::T, &[&[0, 3, 0], &[3, 3, 0], &[0, 3, 0]]),
];

const S_SHAPES: [Shape; 2] = [
    Shape::new(PieceKind::S, &[&[0, 4, 4], &[4, 4, 0]]),
    Shape::new(PieceKind::S, &[&[4, 0], &[4, 4], &[0, 4]]),
];

const Z_SHAPES: [Shape; 2] = [
    Shape::new(PieceKind::Z, &[&[5, 5, 0], &[0, 5, 5]]),
    Shape::new(PieceKind::Z, &[&[0, 5], &[5, 5], &[5, 0]]),
];

const J_SHAPES: [Shape; 4] = [
    Shape::new(PieceKind::J, &[&[6, 0, 0], &[6, 6, 6]]),
    Shape::new(PieceKind::J, &[&[0, 6, 6], &[0, 6, 0], &[0, 6, 0]]),
    Shape::new(PieceKind::J, &[&[6, 6, 6], &[0, 0, 6]]),
    Shape::new(PieceKind::J, &[&[0, 6, 0], &[0, 6, 0], &[6, 6, 0]]),
];

const L_SHAPES: [Shape; 4] = [
    Shape::new(PieceKind::L, &[&[0, 0, 7], &[7, 7, 7]]),
    Shape::new(PieceKind::L, &[&[0, 7, 0], &[0, 7, 0], &[0, 7, 7]]),
    Shape::new(PieceKind::L, &[&[7, 7, 7], &[7, 0, 0]]),
    Shape::new(PieceKind::L, &[&[7, 7, 0], &[0, 7, 0], &[0, 7, 0]]),
];

/// Rotation states for a kind, in rotation order.
pub fn shapes_for(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    }
}

/// Shape for a kind at a rotation index (taken modulo the rotation count).
pub fn shape_at(kind: PieceKind, rotation: usize) -> &'static Shape {
    let shapes = shapes_for(kind);
    &shapes[rotation % shapes.len()]
}

/// Widest matrix across the whole catalog.
pub fn max_shape_width() -> usize {
    PieceKind::ALL
        .iter()
        .flat_map(|&k| shapes_for(k).iter())
        .map(Shape::width)
        .max()
        .unwrap_or(0)
}

/// Tallest matrix across the whole catalog.
pub fn max_shape_height() -> usize {
    PieceKind::ALL
        .iter()
        .flat_map(|&k| shapes_for(k).iter())
        .map(Shape::height)
        .max()
        .unwrap_or(0)
}
