//! Canvas-space block list.
//!
//! Every non-empty cell of the grid, then every cell of the active piece,
//! becomes one `BLOCK_SIZE` square at `(col * BLOCK_SIZE, row * BLOCK_SIZE)`.
//! Backends scale these rectangles to whatever surface they draw on.

use crate::core::GameSnapshot;
use crate::types::{BLOCK_SIZE, BOARD_HEIGHT, BOARD_WIDTH};

/// One square block in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    /// Palette index, never 0
    pub color: u8,
}

impl BlockRect {
    pub fn at(col: u32, row: u32, color: u8) -> Self {
        Self {
            x: col * BLOCK_SIZE,
            y: row * BLOCK_SIZE,
            size: BLOCK_SIZE,
            color,
        }
    }

    /// Grid (col, row) this block covers
    pub fn cell(&self) -> (u32, u32) {
        (self.x / BLOCK_SIZE, self.y / BLOCK_SIZE)
    }
}

/// Visit every block to draw for `snap`, settled cells first.
pub fn for_each_block(snap: &GameSnapshot, mut f: impl FnMut(BlockRect)) {
    for (row, cells) in snap.board.iter().enumerate() {
        for (col, &color) in cells.iter().enumerate() {
            if color != 0 {
                f(BlockRect::at(col as u32, row as u32, color));
            }
        }
    }

    let color = snap.active.color();
    for (x, y) in snap.active.cells() {
        if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
            f(BlockRect::at(x as u32, y as u32, color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;
    use crate::types::PieceKind;

    #[test]
    fn blocks_are_placed_on_the_canvas_grid() {
        let mut snap = GameSnapshot::default();
        snap.board[19][2] = 3;
        snap.active = Piece::spawn(PieceKind::O);

        let mut blocks = Vec::new();
        for_each_block(&snap, |b| blocks.push(b));

        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0], BlockRect { x: 60, y: 570, size: 30, color: 3 });
        assert!(blocks[1..].iter().all(|b| b.color == 4));
        assert_eq!(blocks[1].cell(), (4, 0));
        assert_eq!(blocks[4], BlockRect { x: 150, y: 30, size: 30, color: 4 });
    }
}
