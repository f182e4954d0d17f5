//! Geometry module - rotation transform and collision test
//!
//! Walls and floor have no dedicated checks: any occupied cell that lands
//! outside the board counts as a collision, exactly like landing on a settled
//! cell.

use crate::board::Board;
use crate::pieces::{Piece, Shape};

/// Rotate a shape matrix 90 degrees clockwise.
///
/// Uses `new[i][j] = old[n - 1 - j][i]` where `n` is the number of rows, and
/// always produces an `n` x `n` matrix. That is a true rotation for square
/// shapes only. Wider-than-tall shapes lose their extra columns: the 1x4 I bar
/// becomes a single cell, and the 2x3 shapes become 2x2.
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    let n = shape.rows();
    let mut out = Shape::empty_square(n);
    for i in 0..n {
        for j in 0..n {
            out.set(i, j, shape.get(n - 1 - j, i));
        }
    }
    out
}

/// True if `shape` placed at the piece's offset overlaps a settled cell or
/// leaves the board on any side.
pub fn collides(board: &Board, piece: &Piece, shape: &Shape) -> bool {
    piece
        .cells_with(shape)
        .any(|(x, y)| !board.is_free(x, y))
}

/// Collision test for the piece's current shape
pub fn piece_collides(board: &Board, piece: &Piece) -> bool {
    collides(board, piece, &piece.shape)
}

/// Collision test for the piece shifted by (dx, dy)
pub fn collides_at(board: &Board, piece: &Piece, dx: i8, dy: i8) -> bool {
    let moved = Piece {
        x: piece.x + dx,
        y: piece.y + dy,
        ..*piece
    };
    piece_collides(board, &moved)
}
