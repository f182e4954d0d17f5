//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. A snapshot is turned into a list of
//! canvas-space blocks, those are painted into a framebuffer, and the
//! framebuffer is flushed to the terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Read game state only through [`core::GameSnapshot`]
//! - Allow precise control over aspect ratio (2 chars wide per block)

pub mod blocks;
pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use blocks::{for_each_block, BlockRect};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use palette::{block_color, PALETTE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
