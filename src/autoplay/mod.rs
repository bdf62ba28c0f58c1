//! Headless players for demos, tests and benchmarks.
//!
//! An `Autoplayer` drives a `GameSession` through the same operations a UI
//! would (`start`, `select_card`, `advance`) and lets a `PlayPolicy`
//! decide which card to turn next.

pub mod player;
pub mod policy;

pub use player::{Autoplayer, PlayOutcome};
pub use policy::{PerfectMemory, PlayPolicy, RandomPolicy};
