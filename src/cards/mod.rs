//! Cards and deck generation.
//!
//! ## Key Types
//!
//! - `CardId`: Position-derived identifier, assigned before shuffling
//! - `Symbol`: Index into the configured alphabet; equal symbols form a pair
//! - `Card`: Identity plus the one-way `matched` flag
//! - `DeckGenerator`: Builds shuffled, paired decks from a seeded `GameRng`

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Symbol};
pub use deck::{symbol_counts, DeckGenerator};
