//! Render-facing projection of a session.
//!
//! The UI draws from a `SessionSnapshot` only; it never inspects the
//! selection or the pending flip-back directly.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Symbol};

use super::game::{GameSession, SessionPhase};

/// One card as the UI should draw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub symbol: Symbol,
    /// Glyph for `symbol` from the configured alphabet.
    pub glyph: String,
    pub matched: bool,
    /// Matched, selected, or part of a mismatch still on display.
    pub face_up: bool,
}

/// Everything needed to render the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub cards: Vec<CardView>,
    pub elapsed_seconds: u64,
    pub is_active: bool,
    pub is_won: bool,
    pub phase: SessionPhase,
}

impl SessionSnapshot {
    /// Number of cards currently face-up.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|c| c.face_up).count()
    }
}

/// Project a session into its snapshot.
#[must_use]
pub fn project(session: &GameSession) -> SessionSnapshot {
    let config = session.config();
    let cards = session
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| CardView {
            id: card.id,
            symbol: card.symbol,
            glyph: config.glyph(card.symbol.index()).to_string(),
            matched: card.matched,
            face_up: session.is_face_up(index),
        })
        .collect();

    SessionSnapshot {
        cards,
        elapsed_seconds: session.elapsed_seconds(),
        is_active: session.is_active(),
        is_won: session.is_won(),
        phase: session.phase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::GameConfig;

    fn session() -> GameSession {
        let config = GameConfig::new()
            .with_pair_counts(vec![2])
            .with_symbols(["A", "B"]);
        let cards = vec![
            Card::new(CardId::new(0), Symbol::new(0)),
            Card::new(CardId::new(2), Symbol::new(1)),
            Card::new(CardId::new(1), Symbol::new(0)),
            Card::new(CardId::new(3), Symbol::new(1)),
        ];
        GameSession::from_deck(config, 1, cards).unwrap()
    }

    #[test]
    fn test_ready_snapshot_is_face_down() {
        let snap = session().snapshot();
        assert_eq!(snap.cards.len(), 4);
        assert_eq!(snap.face_up_count(), 0);
        assert_eq!(snap.phase, SessionPhase::Ready);
        assert!(!snap.is_active);
        assert!(!snap.is_won);
        let glyphs: Vec<&str> = snap.cards.iter().map(|c| c.glyph.as_str()).collect();
        assert_eq!(glyphs, vec!["A", "B", "A", "B"]);
    }

    #[test]
    fn test_selected_cards_are_face_up() {
        let mut session = session();
        session.start();
        session.select_card(1);

        let snap = session.snapshot();
        assert!(snap.is_active);
        assert!(snap.cards[1].face_up);
        assert!(!snap.cards[1].matched);
        assert_eq!(snap.face_up_count(), 1);
    }

    #[test]
    fn test_snapshot_json() {
        let mut session = session();
        session.start();
        session.select_card(0);

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["phase"], "active");
        assert_eq!(json["elapsed_seconds"], 0);
        assert_eq!(json["cards"][0]["face_up"], true);
        assert_eq!(json["cards"][0]["symbol"], 0);
        assert_eq!(json["cards"][3]["id"], 3);
    }
}
