//! Runtime module - drives the game on a tokio runtime
//!
//! Bridges the synchronous [`core::GameLoop`] with real time:
//!
//! - [`ticker::TokioTicker`] implements the core `Scheduler` trait with a
//!   tokio interval task that can be cancelled at any time
//! - [`driver::run`] owns the game loop and applies ticks and input commands
//!   one at a time, in the order they were sent
//! - [`config::GameConfig`] reads seed and timing from the environment
//!
//! Input producers (e.g. a blocking terminal reader thread) only need a clone
//! of the command sender.

pub mod config;
pub mod driver;
pub mod ticker;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use config::GameConfig;
pub use driver::{run, Command, Frontend, RunSummary};
pub use ticker::TokioTicker;
