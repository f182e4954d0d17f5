//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Keys are
//! discrete: one press produces one action, with no auto-repeat handling of
//! its own.

pub mod map;

pub use blockdrop_types as types;

pub use map::{handle_key_event, should_quit};
