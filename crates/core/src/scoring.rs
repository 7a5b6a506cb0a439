//! Line clearing and scoring
//!
//! After every lock the board is scanned bottom to top. A full row is removed
//! and the scan stays on the same index, since the row that shifted into it from
//! above has not been checked yet. The number of rows removed by one lock maps
//! to a fixed bonus: 0, 10, 30, 60, 100. There are no combo, level or
//! back-to-back modifiers.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::LINE_SCORES;

/// Outcome of clearing rows after a single lock.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Original indices of the removed rows, bottom to top.
    pub rows: ArrayVec<usize, 4>,
    pub score: u32,
}

impl LineClear {
    pub fn lines(&self) -> usize {
        self.rows.len()
    }
}

/// Score for clearing `lines` rows with one lock.
///
/// Only 0..=4 rows are reachable with the catalog's pieces; anything larger
/// scores nothing.
pub fn line_clear_score(lines: usize) -> u32 {
    debug_assert!(lines < LINE_SCORES.len(), "{} rows cleared by one lock", lines);
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Remove every full row and score the result.
pub fn clear_full_rows(board: &mut Board) -> LineClear {
    let mut rows = ArrayVec::new();
    let mut removed = 0usize;
    let mut row = board.height() as usize;

    while row > 0 {
        let y = row - 1;
        if board.is_row_full(y) {
            board.remove_row(y);
            // Rows above `y` moved down once per earlier removal.
            let recorded = rows.try_push(y - removed).is_ok();
            debug_assert!(recorded, "more than four rows cleared by one lock");
            removed += 1;
        } else {
            row -= 1;
        }
    }

    LineClear {
        score: line_clear_score(removed),
        rows,
    }
}
