//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, terminal rendering, runtime driver).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Block size**: 30 canvas units per cell, so the canvas is 300x600
//!
//! # Timing
//!
//! The game advances on a single fixed interval of [`TICK_INTERVAL_MS`]
//! (500ms). There are no levels, so the interval never changes during play.
//!
//! # Examples
//!
//! ```
//! use blockdrop_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.as_str(), "t");
//! assert_eq!(piece.color_index(), 6);
//! assert_eq!(PieceKind::from_color_index(6), Some(piece));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Edge length of one block in canvas units
pub const BLOCK_SIZE: u32 = 30;

/// Canvas width in canvas units (300)
pub const CANVAS_WIDTH: u32 = BOARD_WIDTH as u32 * BLOCK_SIZE;

/// Canvas height in canvas units (600)
pub const CANVAS_HEIGHT: u32 = BOARD_HEIGHT as u32 * BLOCK_SIZE;

/// Interval between automatic descent ticks in milliseconds
pub const TICK_INTERVAL_MS: u32 = 500;

/// Number of palette entries, including the unused "empty" slot at index 0
pub const PALETTE_LEN: usize = 8;

/// Number of piece templates in the catalog
pub const TEMPLATE_COUNT: usize = 7;


/// The seven template identities, in catalog order.
///
/// Each identity owns one color index of the palette:
/// - **I**: 1, red
/// - **J**: 2, green
/// - **L**: 3, blue
/// - **O**: 4, orange
/// - **S**: 5, yellow
/// - **T**: 6, purple
/// - **Z**: 7, magenta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; TEMPLATE_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Position of this kind in the template catalog (0..=6)
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Palette index stored in the grid for this kind (1..=7)
    pub fn color_index(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::color_index`]; 0 and out-of-range values are empty
    pub fn from_color_index(value: u8) -> Option<Self> {
        match value {
            1..=7 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell (color index 0)
/// - `Some(PieceKind)`: Settled cell carrying that kind's color index
pub type Cell = Option<PieceKind>;

/// Commands that drive the game loop.
///
/// Produced by the input collaborator; the automatic descent is not an
/// action, it arrives as a scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Manual single-step descent (lands the piece when blocked)
    MoveDown,
    /// Rotate the piece's shape matrix clockwise
    Rotate,
    /// Pause when running, resume when paused
    TogglePause,
    /// Clear the board and start over
    Reset,
}

/// Lifecycle phase of the game state machine.
///
/// `GameOver` is transient: the loop notifies its collaborator and resets
/// straight back to `Running` within the same handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

/// Result of one game loop operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The move, rotation or lifecycle change was committed
    Applied,
    /// The candidate pose collided; the previous pose is kept
    Rejected,
    /// The piece settled and a fresh piece spawned
    Landed { lines_cleared: u32 },
    /// The piece settled but the fresh piece collided at its spawn pose
    GameOver { lines_cleared: u32 },
    /// Nothing to do (stale tick, pause while paused, ...)
    Ignored,
}

impl StepOutcome {
    /// True if the piece settled into the grid during this step
    pub fn landed(&self) -> bool {
        matches!(self, StepOutcome::Landed { .. } | StepOutcome::GameOver { .. })
    }
}
