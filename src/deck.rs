//! Deck generation and shuffling.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::hand::Hand;

/// Generates decks and random cards from a single seeded generator.
///
/// The generator is seeded exactly once, at construction; every deck and
/// card drawn afterwards comes from the same stream, so a given seed
/// reproduces the same sequence of decks.
///
/// # Example
///
/// ```
/// use warrs::DeckGenerator;
///
/// let mut generator = DeckGenerator::new(42);
/// let deck = generator.deck(100);
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Debug, Clone)]
pub struct DeckGenerator {
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl DeckGenerator {
    /// Creates a generator seeded with the given value.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws a single uniformly random card.
    ///
    /// Rank and suit are drawn independently, so repeated calls can repeat
    /// cards; use [`DeckGenerator::deck`] for a full deck without
    /// duplicates.
    pub fn random_card(&mut self) -> Card {
        let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
        let rank = self.rng.random_range(1..=13u8);
        Card::new(suit, rank)
    }

    /// Creates a fresh owning 52-card hand and shuffles it.
    ///
    /// The hand holds one card per rank and suit combination, laid out
    /// suit-major before shuffling (position `i` holds suit `i / 13`, rank
    /// `i % 13 + 1`), with every played marker false.
    ///
    /// Shuffling performs `shuffle_rounds` transpositions, each swapping
    /// two distinct uniformly chosen positions (the second index is
    /// resampled until it differs from the first). This only approximates
    /// a uniform shuffle; callers wanting a statistically well-mixed deck
    /// should pass a round count well above the deck size. Zero rounds
    /// returns the deck in its sorted layout.
    pub fn deck(&mut self, shuffle_rounds: u32) -> Hand {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        for _ in 0..shuffle_rounds {
            let first = self.rng.random_range(0..DECK_SIZE);
            let mut second = first;
            while second == first {
                second = self.rng.random_range(0..DECK_SIZE);
            }
            cards.swap(first, second);
        }

        Hand::owned(cards)
    }
}
