//! Line clearing
//!
//! Full rows are removed and the same number of empty rows appear at the top.
//! Surviving rows keep their relative order.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::BOARD_HEIGHT;

/// Row indices removed by one clear, bottom to top
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// Clear all full rows and return the row indices that were cleared.
///
/// Scans bottom to top with a write cursor, compacting surviving rows
/// downwards in place (zero-allocation). Adjacent full rows are all removed in
/// the single pass.
pub fn clear_full_lines(board: &mut Board) -> ClearedRows {
    let mut cleared = ClearedRows::new();
    let mut write_y = BOARD_HEIGHT as usize;

    for read_y in (0..BOARD_HEIGHT as usize).rev() {
        if board.is_row_full(read_y) {
            cleared.push(read_y);
        } else {
            write_y -= 1;
            if write_y != read_y {
                board.copy_row(read_y, write_y);
            }
        }
    }

    for y in 0..write_y {
        board.clear_row(y);
    }

    if !cleared.is_empty() {
        log::debug!("cleared rows {:?}", cleared.as_slice());
    }

    cleared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, BOARD_WIDTH};

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_no_full_rows_is_noop() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::I));
        let before = board.clone();

        assert!(clear_full_lines(&mut board).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_adjacent_full_rows_clear_in_one_pass() {
        let mut board = Board::new();
        fill_row(&mut board, 18, PieceKind::J);
        fill_row(&mut board, 19, PieceKind::L);
        board.set(4, 17, Some(PieceKind::T));

        let cleared = clear_full_lines(&mut board);
        assert_eq!(cleared.as_slice(), &[19, 18]);
        assert_eq!(board.get(4, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_split_full_rows_keep_order_of_survivors() {
        let mut board = Board::new();
        board.set(0, 15, Some(PieceKind::S));
        fill_row(&mut board, 16, PieceKind::I);
        board.set(1, 17, Some(PieceKind::Z));
        fill_row(&mut board, 18, PieceKind::I);
        board.set(2, 19, Some(PieceKind::O));

        let cleared = clear_full_lines(&mut board);
        assert_eq!(cleared.as_slice(), &[18, 16]);

        assert_eq!(board.get(2, 19), Some(Some(PieceKind::O)));
        assert_eq!(board.get(1, 18), Some(Some(PieceKind::Z)));
        assert_eq!(board.get(0, 17), Some(Some(PieceKind::S)));
        assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
        assert!(board.row(1).unwrap().iter().all(|c| c.is_none()));
    }
}
