//! Collision rules - the single legality check for moves, rotations and spawns.

use crate::board::Board;
use crate::shapes::Shape;

/// Whether `shape` anchored at (col, row) overlaps a wall, the floor or a locked cell.
///
/// Side walls and the floor are hard bounds. Cells above the top edge never
/// collide, so a piece may sit partially above the visible board.
pub fn collides(shape: &Shape, col: i32, row: i32, board: &Board) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;

    shape.minos().iter().any(|&(dx, dy)| {
        let c = col + dx;
        let r = row + dy;
        if c < 0 || c >= width || r >= height {
            return true;
        }
        r >= 0 && board.is_occupied(c, r)
    })
}
