//! Card identity and match state.
//!
//! A `Card` is immutable apart from its `matched` flag, which flips to
//! `true` once, when the card's pair is found. Cards are never removed
//! from a deck.

use serde::{Deserialize, Serialize};

/// Position-derived card identifier, assigned before the deck is shuffled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Index into the configured symbol alphabet.
///
/// Two cards with the same symbol and different ids form a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Position in the alphabet.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// A single card on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub matched: bool,
}

impl Card {
    /// Create an unmatched card.
    #[must_use]
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            matched: false,
        }
    }

    /// Do these two cards form a pair?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.symbol == other.symbol && self.id != other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_new_card_is_unmatched() {
        let card = Card::new(CardId::new(0), Symbol::new(3));
        assert!(!card.matched);
        assert_eq!(card.symbol.index(), 3);
    }

    #[test]
    fn test_pairs_with() {
        let a = Card::new(CardId::new(0), Symbol::new(1));
        let b = Card::new(CardId::new(1), Symbol::new(1));
        let c = Card::new(CardId::new(2), Symbol::new(2));

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
        // A card never pairs with itself
        assert!(!a.pairs_with(&a));
    }
}
