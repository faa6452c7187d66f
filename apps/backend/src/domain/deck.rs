//! Deck construction and unbiased shuffling.
//!
//! Game fairness depends on the shuffle, so the production entry point draws
//! from the operating system CSPRNG. The Fisher-Yates swap index is taken
//! with rejection sampling rather than a plain modulo, which would skew for
//! non-power-of-two bounds.

use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};

use super::cards::{Card, Rank, Suit};

/// Build `num_decks` standard 52-card decks (no jokers) in suit-major
/// enumeration order. The deck is always shuffled before use.
pub fn build_deck(num_decks: usize) -> Vec<Card> {
    let mut deck = Vec::with_capacity(num_decks * 52);
    for _ in 0..num_decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card::new(rank, suit));
            }
        }
    }
    deck
}

/// In-place Fisher-Yates shuffle using the OS CSPRNG.
pub fn shuffle(deck: &mut [Card]) {
    shuffle_with(deck, &mut OsRng.unwrap_err());
}

/// In-place Fisher-Yates shuffle with a caller-supplied RNG. Tests pass a
/// seeded generator for determinism.
pub fn shuffle_with<R: RngCore>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = next_index(rng, i + 1);
        deck.swap(i, j);
    }
}

/// Uniform draw in `0..bound` via rejection sampling.
fn next_index<R: RngCore>(rng: &mut R, bound: usize) -> usize {
    debug_assert!(bound > 0);
    let m = bound as u64;
    // Largest multiple of m representable in u64; values at or above it are
    // discarded so every residue is equally likely.
    let limit = u64::MAX - (u64::MAX % m);
    loop {
        let x = rng.next_u64();
        if x < limit {
            return (x % m) as usize;
        }
    }
}
