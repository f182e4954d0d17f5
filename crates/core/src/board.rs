//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that settled there. Uses a flat array for cache locality and
//! zero-allocation. Its dimensions never change: line clears shift rows but
//! always keep exactly `BOARD_HEIGHT` rows of `BOARD_WIDTH` cells.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom).

use crate::pieces::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row-major `u8` view of the board (0 = empty, 1..=7 = color index)
pub type U8Grid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True if (x, y) holds a settled cell or lies below the bottom row.
    ///
    /// Rows past the bottom count as occupied (the floor). Positions above
    /// the top or beside the walls are unoccupied here; walls are enforced by
    /// [`crate::geometry::collides`].
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if y >= BOARD_HEIGHT as i8 {
            return true;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True if (x, y) is inside the board and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Borrow row `y` as a slice of `BOARD_WIDTH` cells
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Copy row `src` over row `dst`. Both must be in range.
    pub(crate) fn copy_row(&mut self, src: usize, dst: usize) {
        let width = BOARD_WIDTH as usize;
        self.cells
            .copy_within(src * width..(src + 1) * width, dst * width);
    }

    /// Empty every cell of row `y`
    pub(crate) fn clear_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;
        self.cells[y * width..(y + 1) * width].fill(None);
    }

    /// Write the piece's color into every cell its shape occupies.
    ///
    /// The caller guarantees the piece does not collide. Cells are validated
    /// first so a bad pose leaves the board untouched; returns false in that
    /// case.
    pub fn settle(&mut self, piece: &Piece) -> bool {
        if !piece.cells().all(|(x, y)| self.is_free(x, y)) {
            return false;
        }

        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }

        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of settled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Export as a row-major grid of color indices
    pub fn write_u8_grid(&self, out: &mut U8Grid) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.cells[y * BOARD_WIDTH as usize + x]
                    .map(|kind| kind.color_index())
                    .unwrap_or(0);
            }
        }
    }

    /// Build a board from a grid of color indices (0 = empty).
    ///
    /// Values outside 1..=7 are treated as empty.
    pub fn from_u8_grid(grid: &U8Grid) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                board.cells[y * BOARD_WIDTH as usize + x] = PieceKind::from_color_index(value);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Shape;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_copy_and_clear_row() {
        let mut board = Board::new();
        board.set(2, 5, Some(PieceKind::S));
        board.copy_row(5, 6);
        assert_eq!(board.get(2, 6), Some(Some(PieceKind::S)));

        board.clear_row(5);
        assert_eq!(board.get(2, 5), Some(None));
        assert_eq!(board.get(2, 6), Some(Some(PieceKind::S)));
    }

    #[test]
    fn test_settle_rejects_overlap_without_writing() {
        let mut board = Board::new();
        board.set(1, 1, Some(PieceKind::Z));

        let piece = Piece {
            kind: PieceKind::O,
            shape: Shape::from_rows([[1, 1], [1, 1]]),
            x: 0,
            y: 0,
        };
        assert!(!board.settle(&piece));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_u8_grid_roundtrip() {
        let mut grid: U8Grid = [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        grid[19][0] = 4;
        grid[3][9] = 7;

        let board = Board::from_u8_grid(&grid);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::O)));
        assert_eq!(board.get(9, 3), Some(Some(PieceKind::Z)));

        let mut back = [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut back);
        assert_eq!(back, grid);
    }
}
