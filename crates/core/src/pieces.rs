//! Pieces module - shape matrices, the template catalog and the live piece
//!
//! A piece is a small binary matrix (its footprint inside a bounding box), the
//! kind it was spawned from (which fixes its color) and the top-left offset of
//! the bounding box on the board.
//!
//! The catalog holds seven templates. J and T share one matrix and differ only
//! in color, so there are seven color variants but six distinct shapes.

use crate::types::{PieceKind, BOARD_WIDTH, TEMPLATE_COUNT};

/// Largest bounding-box edge any shape can have
pub const MAX_SHAPE_DIM: usize = 4;

/// Binary occupancy matrix of a piece, stored inline.
///
/// `rows` x `cols` is the logical size; cells outside it are always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a literal matrix of 0/1 values.
    ///
    /// Panics if either dimension is 0 or larger than [`MAX_SHAPE_DIM`].
    pub const fn from_rows<const R: usize, const C: usize>(src: [[u8; C]; R]) -> Self {
        assert!(R >= 1 && R <= MAX_SHAPE_DIM);
        assert!(C >= 1 && C <= MAX_SHAPE_DIM);

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = src[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    /// Square shape of edge `n` with no occupied cells
    pub(crate) fn empty_square(n: usize) -> Self {
        let n = n.clamp(1, MAX_SHAPE_DIM) as u8;
        Self {
            rows: n,
            cols: n,
            cells: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Bounding-box width, i.e. the length of the first row
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Occupancy at (row, col); anything outside the logical size is empty
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, filled: bool) {
        if row < self.rows() && col < self.cols() {
            self.cells[row][col] = filled;
        }
    }

    /// Occupied cells as (row, col) pairs, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows())
            .flat_map(move |r| (0..self.cols()).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c])
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }

    /// Copy out as a `Vec` of rows of 0/1, handy for assertions and display
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| self.get(r, c) as u8).collect())
            .collect()
    }
}

/// One immutable (shape, kind) entry of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub kind: PieceKind,
    pub shape: Shape,
}

/// The template catalog, indexed by [`PieceKind::index`]
pub const TEMPLATES: [Template; TEMPLATE_COUNT] = [
    Template {
        kind: PieceKind::I,
        shape: Shape::from_rows([[1, 1, 1, 1]]),
    },
    Template {
        kind: PieceKind::J,
        shape: Shape::from_rows([[1, 1, 1], [0, 1, 0]]),
    },
    Template {
        kind: PieceKind::L,
        shape: Shape::from_rows([[1, 1, 1], [1, 0, 0]]),
    },
    Template {
        kind: PieceKind::O,
        shape: Shape::from_rows([[1, 1], [1, 1]]),
    },
    Template {
        kind: PieceKind::S,
        shape: Shape::from_rows([[0, 1, 1], [1, 1, 0]]),
    },
    Template {
        kind: PieceKind::T,
        shape: Shape::from_rows([[1, 1, 1], [0, 1, 0]]),
    },
    Template {
        kind: PieceKind::Z,
        shape: Shape::from_rows([[1, 1, 0], [0, 1, 1]]),
    },
];

/// Look up the catalog entry for a kind
pub fn template(kind: PieceKind) -> &'static Template {
    &TEMPLATES[kind.index()]
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the bounding box's left edge
    pub x: i8,
    /// Row of the bounding box's top edge
    pub y: i8,
}

impl Piece {
    /// Create a piece from its template at the spawn pose.
    ///
    /// The shape is copied out of the catalog, so the returned piece can be
    /// mutated freely. It is centered horizontally on the top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = template(kind).shape;
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Palette index (1..=7)
    pub fn color(&self) -> u8 {
        self.kind.color_index()
    }

    /// Absolute (x, y) board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.cells_with(&self.shape)
    }

    /// Absolute coordinates of `shape` placed at this piece's offset
    pub fn cells_with<'a>(&self, shape: &'a Shape) -> impl Iterator<Item = (i8, i8)> + 'a {
        let (x, y) = (self.x, self.y);
        shape
            .occupied()
            .map(move |(r, c)| (x + c as i8, y + r as i8))
    }
}

/// Left offset that centers `shape` on the board: floor((COLS - width) / 2)
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH as i8 - shape.cols() as i8).div_euclid(2)
}
