//! Board tests: occupancy, row removal and collision on the public API.

use blockfall::core::{collides, shape_at, Board};
use blockfall::types::{PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
use proptest::prelude::*;

#[test]
fn test_board_new_empty() {
    let board = Board::standard();
    assert_eq!(board.width(), DEFAULT_BOARD_WIDTH);
    assert_eq!(board.height(), DEFAULT_BOARD_HEIGHT);

    for row in 0..DEFAULT_BOARD_HEIGHT as i32 {
        for col in 0..DEFAULT_BOARD_WIDTH as i32 {
            assert_eq!(board.get(col, row), Some(None), "cell ({col}, {row})");
        }
    }
    assert_eq!(board.occupied_rows(), 0);
}

#[test]
fn test_board_rejects_empty_dimensions() {
    assert!(Board::new(0, 20).is_err());
    assert!(Board::new(10, 0).is_err());
    assert!(Board::new(1, 1).is_ok());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::standard();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(10, 0), None);
    assert_eq!(board.get(0, 20), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::standard();
    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(!board.set(10, 10, Some(PieceKind::T)));
    assert!(board.set(5, 10, None));
    assert!(!board.is_occupied(5, 10));
}

#[test]
fn test_occupancy_above_top_is_free_inside_walls() {
    let board = Board::standard();
    assert!(!board.is_occupied(0, -1));
    assert!(!board.is_occupied(9, -3));
    assert!(board.is_occupied(-1, -1));
    assert!(board.is_occupied(10, -1));
    assert!(board.is_occupied(0, 20));
}

#[test]
fn test_full_and_empty_rows() {
    let mut board = Board::standard();
    board.fill_row(19, PieceKind::Z, None);
    board.fill_row(18, PieceKind::Z, Some(3));

    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
    assert!(!board.is_row_empty(18));
    assert!(board.is_row_empty(17));
    assert!(!board.is_row_full(20));
}

#[test]
fn test_remove_row_shifts_rows_above() {
    let mut board = Board::standard();
    board.set(2, 17, Some(PieceKind::L));
    board.fill_row(18, PieceKind::I, None);
    board.set(4, 19, Some(PieceKind::O));

    assert!(board.remove_row(18));

    assert_eq!(board.get(2, 18), Some(Some(PieceKind::L)));
    assert_eq!(board.get(2, 17), Some(None));
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::O)));
    assert!(board.is_row_empty(0));
    assert!(!board.remove_row(20));
}

#[test]
fn test_collides_with_walls_floor_and_stack() {
    let mut board = Board::standard();
    let o = shape_at(PieceKind::O, 0);

    assert!(!collides(o, 0, 0, &board));
    assert!(collides(o, -1, 0, &board));
    assert!(collides(o, 9, 0, &board));
    assert!(collides(o, 0, 19, &board));
    assert!(!collides(o, 4, -1, &board));

    board.set(4, 10, Some(PieceKind::S));
    assert!(collides(o, 3, 9, &board));
    assert!(!collides(o, 5, 9, &board));
}

fn board_with_rows(rows: &[Vec<Option<PieceKind>>]) -> Board {
    let mut board = Board::new(6, rows.len() as u16).unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            board.set(c as i32, r as i32, *cell);
        }
    }
    board
}

fn cell_strategy() -> impl Strategy<Value = Option<PieceKind>> {
    prop_oneof![
        Just(None),
        (0usize..7).prop_map(|i| Some(PieceKind::ALL[i])),
    ]
}

proptest! {
    #[test]
    fn remove_row_preserves_order(
        rows in prop::collection::vec(prop::collection::vec(cell_strategy(), 6), 3..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut board = board_with_rows(&rows);
        let target = pick.index(rows.len());
        board.fill_row(target, PieceKind::J, None);
        let before = board.clone();

        prop_assert!(board.remove_row(target));
        prop_assert_eq!(board.height(), before.height());

        prop_assert!(board.is_row_empty(0));
        for r in 0..target {
            prop_assert_eq!(board.row(r + 1), before.row(r));
        }
        for r in target + 1..rows.len() {
            prop_assert_eq!(board.row(r), before.row(r));
        }
    }

    #[test]
    fn shapes_outside_columns_or_below_floor_always_collide(
        kind_idx in 0usize..7,
        rotation in 0usize..4,
        col in -6i32..16,
        row in -4i32..26,
    ) {
        let shape = shape_at(PieceKind::ALL[kind_idx], rotation);
        let board = Board::standard();
        let outside = shape.minos().iter().any(|&(dc, dr)| {
            let (c, r) = (col + dc, row + dr);
            c < 0 || c >= 10 || r >= 20
        });
        prop_assert_eq!(collides(shape, col, row, &board), outside);
    }
}
