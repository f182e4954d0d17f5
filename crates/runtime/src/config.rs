//! Runtime configuration read from environment variables.
//!
//! - `BLOCKDROP_SEED`: piece RNG seed (default: derived from the clock)
//! - `BLOCKDROP_TICK_MS`: tick interval in milliseconds (default: 500)
//! - `BLOCKDROP_LOG_PATH`: file that receives log output (default: none)
//!
//! Unparsable values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TICK_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub tick_ms: u32,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            tick_ms: TICK_INTERVAL_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKDROP_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = lookup("BLOCKDROP_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_INTERVAL_MS);

        let log_path = lookup("BLOCKDROP_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tick_ms,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
