//! Observable session transitions.
//!
//! The session records one `SessionEvent` per visible change so a UI can
//! animate it (flip a card, pulse a match, show the win banner) without
//! diffing snapshots.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A fresh deck was dealt (setup, configure or reset).
    Configured { pair_count: usize },

    /// The timer started; selections are now accepted.
    Started,

    /// One second of play elapsed.
    Ticked { elapsed_seconds: u64 },

    /// A card was turned face-up.
    CardSelected { index: usize, card: CardId },

    /// The two selected cards share a symbol and stay revealed.
    Matched { first: usize, second: usize },

    /// The two selected cards differ; they stay visible until flip-back.
    Mismatched { first: usize, second: usize },

    /// A mismatched pair turned face-down again.
    FlippedBack { first: usize, second: usize },

    /// Every pair has been found.
    Won { elapsed_seconds: u64 },
}
