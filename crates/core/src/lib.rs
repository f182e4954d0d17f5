//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the grid, the
//! piece catalog, rotation and collision, line clearing, and the tick-driven
//! state machine. It has **no dependencies** on rendering, terminals or async
//! runtimes, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Timers plug in through the [`Scheduler`] trait
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled cells
//! - [`pieces`]: Shape matrices, the 7-template catalog and the live piece
//! - [`rng`]: Seeded uniform piece factory
//! - [`geometry`]: Clockwise rotation and collision test
//! - [`lines`]: Full-row removal
//! - [`game_state`]: Move/rotate/land rules on one owned board + piece
//! - [`game_loop`]: Running/Paused/GameOver state machine over a scheduler
//! - [`scheduler`]: Cancellable periodic tick abstraction
//! - [`snapshot`]: Read-only view handed to renderers
//!
//! # Example
//!
//! ```
//! use blockdrop_core::{GameLoop, GameSnapshot, ManualScheduler};
//! use blockdrop_types::{GameAction, TICK_INTERVAL_MS};
//!
//! let mut game = GameLoop::new(12345, TICK_INTERVAL_MS, ManualScheduler::new());
//! game.start();
//!
//! let mut on_game_over = |_: &GameSnapshot| {};
//! game.apply_action(GameAction::MoveLeft, &mut on_game_over);
//! game.apply_action(GameAction::Rotate, &mut on_game_over);
//!
//! for _ in 0..game.scheduler_mut().advance(1000) {
//!     let epoch = game.epoch();
//!     game.on_tick(epoch, &mut on_game_over);
//! }
//! assert!(game.state().active().y >= 2);
//! ```

pub mod board;
pub mod game_loop;
pub mod game_state;
pub mod geometry;
pub mod lines;
pub mod pieces;
pub mod rng;
pub mod scheduler;
pub mod snapshot;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, U8Grid};
pub use game_loop::{GameLoop, GameOverNotifier};
pub use game_state::GameState;
pub use geometry::{collides, piece_collides, rotate_clockwise};
pub use lines::{clear_full_lines, ClearedRows};
pub use pieces::{template, Piece, Shape, Template, TEMPLATES};
pub use rng::{PieceFactory, SimpleRng};
pub use scheduler::{ManualScheduler, Scheduler};
pub use snapshot::GameSnapshot;
