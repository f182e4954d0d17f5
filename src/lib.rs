//! Blockdrop (workspace facade crate).
//!
//! Re-exports the member crates under one roof as
//! `blockdrop::{core, input, runtime, term, types}`.

pub use blockdrop_core as core;
pub use blockdrop_input as input;
pub use blockdrop_runtime as runtime;
pub use blockdrop_term as term;
pub use blockdrop_types as types;
