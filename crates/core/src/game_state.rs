//! Game state module - the rules engine
//!
//! Owns the board, the single live piece and the piece factory, and applies
//! moves against them. Every candidate pose goes through the collision test;
//! a colliding pose is simply not committed. A blocked descent lands the
//! piece: it settles, full rows clear, and the next piece spawns. If that new
//! piece already collides where it spawned, the state enters `GameOver` until
//! [`GameState::restart`] is called.
//!
//! Timing lives elsewhere (see [`crate::game_loop`]); this type only reacts.

use crate::board::Board;
use crate::geometry::{collides, collides_at, piece_collides, rotate_clockwise};
use crate::lines::clear_full_lines;
use crate::pieces::Piece;
use crate::rng::PieceFactory;
use crate::snapshot::GameSnapshot;
use crate::types::{GamePhase, StepOutcome};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    factory: PieceFactory,
    phase: GamePhase,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id for spawned pieces.
    piece_id: u32,
}

impl GameState {
    /// Create a game with an empty board and its first piece spawned
    pub fn new(seed: u32) -> Self {
        let mut factory = PieceFactory::new(seed);
        let active = factory.spawn();

        Self {
            board: Board::new(),
            active,
            factory,
            phase: GamePhase::Running,
            episode_id: 0,
            piece_id: 1,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn seed(&self) -> u32 {
        self.factory.seed()
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups (tests, puzzles)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the live piece, for scripted setups
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Try to shift the active piece sideways; reverts on collision
    fn try_shift(&mut self, dx: i8) -> StepOutcome {
        if self.game_over() {
            return StepOutcome::Ignored;
        }

        if collides_at(&self.board, &self.active, dx, 0) {
            return StepOutcome::Rejected;
        }

        self.active.x += dx;
        StepOutcome::Applied
    }

    pub fn move_left(&mut self) -> StepOutcome {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> StepOutcome {
        self.try_shift(1)
    }

    /// Move down one row, landing the piece if the row below is blocked
    pub fn move_down(&mut self) -> StepOutcome {
        if self.game_over() {
            return StepOutcome::Ignored;
        }

        if !collides_at(&self.board, &self.active, 0, 1) {
            self.active.y += 1;
            return StepOutcome::Applied;
        }

        self.land()
    }

    /// Rotate the shape clockwise in place if the result fits
    pub fn rotate(&mut self) -> StepOutcome {
        if self.game_over() {
            return StepOutcome::Ignored;
        }

        let rotated = rotate_clockwise(&self.active.shape);
        if rotated.is_empty() || collides(&self.board, &self.active, &rotated) {
            return StepOutcome::Rejected;
        }

        self.active.shape = rotated;
        StepOutcome::Applied
    }

    /// Automatic descent; only acts while running
    pub fn tick(&mut self) -> StepOutcome {
        if self.phase != GamePhase::Running {
            return StepOutcome::Ignored;
        }
        self.move_down()
    }

    /// Switch between running and paused. Returns false if nothing changed.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        match (self.phase, paused) {
            (GamePhase::Running, true) => {
                self.phase = GamePhase::Paused;
                true
            }
            (GamePhase::Paused, false) => {
                self.phase = GamePhase::Running;
                true
            }
            _ => false,
        }
    }

    /// Empty the board, spawn a fresh piece and run again
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = self.factory.spawn();
        self.phase = GamePhase::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.piece_id = self.piece_id.wrapping_add(1);
    }

    /// Settle the active piece, clear lines and spawn the next piece
    fn land(&mut self) -> StepOutcome {
        if !self.board.settle(&self.active) {
            log::warn!(
                "settling {:?} at ({}, {}) overlapped the board",
                self.active.kind,
                self.active.x,
                self.active.y
            );
        }

        let lines_cleared = clear_full_lines(&mut self.board).len() as u32;
        log::debug!(
            "{} landed at ({}, {}), {} line(s) cleared",
            self.active.kind.as_str(),
            self.active.x,
            self.active.y,
            lines_cleared
        );

        self.active = self.factory.spawn();
        self.piece_id = self.piece_id.wrapping_add(1);

        if piece_collides(&self.board, &self.active) {
            self.phase = GamePhase::GameOver;
            log::info!(
                "game over after {} pieces (episode {})",
                self.piece_id,
                self.episode_id
            );
            return StepOutcome::GameOver { lines_cleared };
        }

        StepOutcome::Landed { lines_cleared }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
