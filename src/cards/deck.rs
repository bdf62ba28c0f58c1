//! Deck generation.
//!
//! A deck for `n` pairs is built in three steps:
//!
//! 1. Pair `i` takes symbol `i % alphabet_len`. Symbols repeat across
//!    groups when the alphabet is shorter than the pair count.
//! 2. Each pair yields two cards with sequential ids `2i` and `2i + 1`.
//! 3. The sequence is shuffled uniformly with the caller's `GameRng`.
//!
//! Generation has no side effects beyond advancing the RNG, so the same
//! seed always deals the same deck.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{GameConfig, GameRng, MemoryError, Result};

use super::card::{Card, CardId, Symbol};

/// Builds shuffled, paired decks for the supported pair counts.
#[derive(Clone, Debug)]
pub struct DeckGenerator {
    supported: Vec<usize>,
    alphabet_len: usize,
}

impl DeckGenerator {
    /// Create a generator for the given configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            supported: config.pair_counts.clone(),
            alphabet_len: config.symbols.len().max(1),
        }
    }

    /// Pair counts this generator accepts.
    #[must_use]
    pub fn supported(&self) -> &[usize] {
        &self.supported
    }

    /// Generate a shuffled deck of `2 * pair_count` cards.
    ///
    /// Fails with `InvalidConfiguration` if `pair_count` is unsupported.
    pub fn generate(&self, pair_count: usize, rng: &mut GameRng) -> Result<Vec<Card>> {
        if !self.supported.contains(&pair_count) {
            return Err(MemoryError::InvalidConfiguration {
                pair_count,
                supported: self.supported.clone(),
            });
        }

        let mut cards = self.ordered(pair_count);
        rng.shuffle(&mut cards);

        debug!(pair_count, cards = cards.len(), seed = rng.seed(), "generated deck");
        Ok(cards)
    }

    /// Unshuffled deck: pairs laid out side by side.
    #[must_use]
    pub fn ordered(&self, pair_count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(pair_count * 2);
        for pair in 0..pair_count {
            let symbol = Symbol::new((pair % self.alphabet_len) as u16);
            let first = (pair * 2) as u32;
            cards.push(Card::new(CardId::new(first), symbol));
            cards.push(Card::new(CardId::new(first + 1), symbol));
        }
        cards
    }
}

/// Count how many cards carry each symbol.
#[must_use]
pub fn symbol_counts<'a>(cards: impl IntoIterator<Item = &'a Card>) -> FxHashMap<Symbol, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(card.symbol).or_insert(0) += 1;
    }
    counts
}
