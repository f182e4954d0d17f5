//! Snapshot module - read-only view of the game handed to collaborators
//!
//! Renderers and the game over notifier never touch [`crate::GameState`]
//! directly; they receive a copied `GameSnapshot` instead.

use crate::board::U8Grid;
use crate::pieces::Piece;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only copy of everything a renderer or notifier needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Settled cells as color indices (0 = empty)
    pub board: U8Grid,
    pub active: Piece,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: Piece::spawn(PieceKind::I),
            paused: false,
            game_over: false,
            episode_id: 0,
            piece_id: 0,
        }
    }
}
