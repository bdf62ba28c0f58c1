//! Game session: the live state machine a UI drives.
//!
//! - `GameSession`: cards, selection, timer, win detection
//! - `Selection`: up to two face-up cards awaiting evaluation
//! - `SessionEvent`: observable transitions, drained by the UI
//! - `SessionSnapshot`: what the UI renders

pub mod event;
pub mod game;
pub mod selection;
pub mod snapshot;

pub use event::SessionEvent;
pub use game::{GameSession, SessionPhase};
pub use selection::Selection;
pub use snapshot::{CardView, SessionSnapshot};
