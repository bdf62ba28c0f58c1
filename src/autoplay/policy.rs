//! Card-choosing policies.
//!
//! Policies only see what a human would: the face-up cards in the
//! session snapshot and the current selection.

use rustc_hash::FxHashMap;

use crate::cards::Symbol;
use crate::core::GameRng;
use crate::session::GameSession;

/// Decides which card to turn next.
pub trait PlayPolicy {
    /// Short name for logs and CLI output.
    fn name(&self) -> &'static str;

    /// Choose the next card index, or `None` if no card can be turned.
    fn choose(&mut self, session: &GameSession) -> Option<usize>;

    /// Look at the board while cards are face-up. Called after every
    /// selection and every evaluation.
    fn observe(&mut self, _session: &GameSession) {}

    /// Drop anything remembered about a previous deck.
    fn forget(&mut self) {}
}

/// Unmatched cards that are not already selected, in index order.
fn open_cards(session: &GameSession) -> Vec<usize> {
    session
        .cards()
        .iter()
        .enumerate()
        .filter(|(index, card)| !card.matched && !session.selection().contains(*index))
        .map(|(index, _)| index)
        .collect()
}

// =============================================================================
// Perfect Memory
// =============================================================================

/// Remembers every symbol it has seen face-up.
///
/// Turns a known pair whenever one exists, otherwise explores the
/// lowest-indexed unseen card.
#[derive(Clone, Debug, Default)]
pub struct PerfectMemory {
    seen: FxHashMap<usize, Symbol>,
}

impl PerfectMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unmatched cards whose symbol is known.
    #[must_use]
    pub fn known(&self) -> usize {
        self.seen.len()
    }

    fn first_unseen(&self, open: &[usize]) -> Option<usize> {
        open.iter()
            .copied()
            .find(|index| !self.seen.contains_key(index))
    }

    fn known_pair(&self, open: &[usize]) -> Option<usize> {
        let mut first_of: FxHashMap<Symbol, usize> = FxHashMap::default();
        for &index in open {
            if let Some(&symbol) = self.seen.get(&index) {
                if let Some(&earlier) = first_of.get(&symbol) {
                    return Some(earlier);
                }
                first_of.insert(symbol, index);
            }
        }
        None
    }
}

impl PlayPolicy for PerfectMemory {
    fn name(&self) -> &'static str {
        "perfect-memory"
    }

    fn choose(&mut self, session: &GameSession) -> Option<usize> {
        self.observe(session);
        let open = open_cards(session);

        match session.selection().as_slice() {
            [] => self
                .known_pair(&open)
                .or_else(|| self.first_unseen(&open))
                .or_else(|| open.first().copied()),
            [first] => {
                let symbol = self.seen.get(first).copied();
                open.iter()
                    .copied()
                    .find(|index| symbol.is_some() && self.seen.get(index).copied() == symbol)
                    .or_else(|| self.first_unseen(&open))
                    .or_else(|| open.first().copied())
            }
            _ => None,
        }
    }

    fn observe(&mut self, session: &GameSession) {
        for (index, card) in session.snapshot().cards.iter().enumerate() {
            if card.matched {
                self.seen.remove(&index);
            } else if card.face_up {
                self.seen.insert(index, card.symbol);
            }
        }
    }

    fn forget(&mut self) {
        self.seen.clear();
    }
}

// =============================================================================
// Random
// =============================================================================

/// Turns a uniformly random open card. Remembers nothing.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Draw from an existing stream, typically `GameSession::fork_rng`.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl PlayPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, session: &GameSession) -> Option<usize> {
        if session.selection().is_full() {
            return None;
        }
        let open = open_cards(session);
        self.rng.choose(&open).copied()
    }
}
