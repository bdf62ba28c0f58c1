//! # memory-match
//!
//! The game-state machine behind a single-screen memory (pair matching)
//! card game. Rendering is left to the host: a UI configures a session,
//! forwards taps and elapsed time into it, and draws the snapshot it
//! produces.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Decks come from a seeded ChaCha8 RNG, and time is a
//!    logical clock the host advances. The same seed and the same inputs
//!    always produce the same game.
//!
//! 2. **Forgiving input**: Only an unsupported pair count is an error.
//!    Stale taps, duplicate selections and ticks after a win are ignored.
//!
//! 3. **Owned timers**: Every delayed behaviour is a cancellable task on
//!    the session's own scheduler. Nothing outlives its session.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG
//! - `cards`: Cards, symbols, deck generation
//! - `timing`: Logical-clock task scheduler
//! - `session`: The state machine, selection, events, render snapshot
//! - `autoplay`: Headless players for demos and tests
//! - `logging`: Tracing subscriber setup for binaries
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{GameConfig, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::default(), 42).unwrap();
//! session.configure(3).unwrap();
//! session.start();
//!
//! session.select_card(0);
//! session.select_card(1);
//! session.advance(Duration::from_millis(500));
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.cards.len(), 6);
//! assert!(session.selection().is_empty());
//! ```

pub mod core;
pub mod cards;
pub mod timing;
pub mod session;
pub mod autoplay;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, MemoryError, Result, TimingConfig};

pub use crate::cards::{Card, CardId, DeckGenerator, Symbol};

pub use crate::timing::{Scheduler, Task, TaskId};

pub use crate::session::{
    CardView, GameSession, Selection, SessionEvent, SessionPhase, SessionSnapshot,
};

pub use crate::autoplay::{Autoplayer, PerfectMemory, PlayOutcome, PlayPolicy, RandomPolicy};
