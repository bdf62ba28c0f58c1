//! Deck generation tests.
//!
//! These tests verify the deck contract:
//! - `2 × pair_count` cards for every supported pair count
//! - Each symbol exactly twice, regardless of shuffle
//! - Unsupported pair counts rejected with `InvalidConfiguration`
//! - Seeded determinism

use memory_match::cards::{symbol_counts, DeckGenerator};
use memory_match::core::{GameConfig, GameRng, MemoryError};

/// Test every supported pair count yields a well-formed deck.
#[test]
fn test_supported_pair_counts() {
    let generator = DeckGenerator::new(&GameConfig::default());
    let mut rng = GameRng::new(2024);

    for pair_count in [3, 6, 10] {
        let deck = generator.generate(pair_count, &mut rng).expect("supported count");
        assert_eq!(deck.len(), 2 * pair_count);

        let counts = symbol_counts(&deck);
        assert_eq!(counts.len(), pair_count);
        for (symbol, count) in counts {
            assert_eq!(count, 2, "{symbol} should appear exactly twice");
        }

        assert!(deck.iter().all(|card| !card.matched));
    }
}

/// Test ids are unique and cover `0..2p`.
#[test]
fn test_ids_are_sequential_before_shuffle() {
    let generator = DeckGenerator::new(&GameConfig::default());
    let deck = generator.generate(10, &mut GameRng::new(5)).unwrap();

    let mut ids: Vec<u32> = deck.iter().map(|card| card.id.raw()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..20).collect::<Vec<_>>());
}

/// Test shuffling permutes the ordered deck without changing its contents.
#[test]
fn test_shuffle_is_permutation_of_ordered_deck() {
    let generator = DeckGenerator::new(&GameConfig::default());
    let ordered = generator.ordered(6);
    let shuffled = generator.generate(6, &mut GameRng::new(77)).unwrap();

    assert_ne!(ordered, shuffled);
    assert_eq!(symbol_counts(&ordered), symbol_counts(&shuffled));

    let mut sorted = shuffled.clone();
    sorted.sort_by_key(|card| card.id);
    assert_eq!(sorted, ordered);
}

/// Test unsupported pair counts are rejected.
#[test]
fn test_unsupported_pair_counts() {
    let generator = DeckGenerator::new(&GameConfig::default());
    let mut rng = GameRng::new(1);

    for pair_count in [0, 1, 2, 4, 5, 7, 9, 11, 100] {
        match generator.generate(pair_count, &mut rng) {
            Err(MemoryError::InvalidConfiguration {
                pair_count: rejected,
                supported,
            }) => {
                assert_eq!(rejected, pair_count);
                assert_eq!(supported, vec![3, 6, 10]);
            }
            other => panic!("expected InvalidConfiguration for {pair_count}, got {other:?}"),
        }
    }
}

/// Test a rejected request does not consume randomness.
#[test]
fn test_rejection_leaves_rng_untouched() {
    let generator = DeckGenerator::new(&GameConfig::default());
    let mut rng = GameRng::new(9);
    let before = rng.state();

    assert!(generator.generate(4, &mut rng).is_err());
    assert_eq!(rng.state(), before);
}

/// Test the same seed deals the same deck.
#[test]
fn test_seeded_decks_repeat() {
    let generator = DeckGenerator::new(&GameConfig::default());
    let a = generator.generate(10, &mut GameRng::new(31337)).unwrap();
    let b = generator.generate(10, &mut GameRng::new(31337)).unwrap();
    assert_eq!(a, b);
}

/// Test the alphabet is reused cyclically when it is shorter than the deck needs.
#[test]
fn test_alphabet_cycles() {
    let config = GameConfig::new()
        .with_pair_counts(vec![3, 6, 10])
        .with_symbols(["♠", "♥", "♦", "♣"]);
    let generator = DeckGenerator::new(&config);
    let deck = generator.generate(10, &mut GameRng::new(3)).unwrap();

    assert_eq!(deck.len(), 20);
    let counts = symbol_counts(&deck);
    assert_eq!(counts.len(), 4);
    // 10 pairs over 4 symbols: 3 + 3 + 2 + 2 pairs
    let mut totals: Vec<usize> = counts.values().copied().collect();
    totals.sort_unstable();
    assert_eq!(totals, vec![4, 4, 6, 6]);
}
