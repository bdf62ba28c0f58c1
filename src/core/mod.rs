//! Core building blocks: configuration, errors, and deterministic RNG.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    GameConfig, TimingConfig, DEFAULT_PAIR_COUNTS, DEFAULT_SYMBOLS, TICK_INTERVAL,
};
pub use error::{MemoryError, Result};
pub use rng::{GameRng, GameRngState};
