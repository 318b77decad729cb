//! Card types and deck constants.

use core::cmp::Ordering;

/// Card suit, in tie-break order.
///
/// The declared order is the fixed ordering used to break rank ties when
/// comparing cards: `Clubs < Diamonds < Hearts < Spades`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in index order (Clubs = 0 through Spades = 3).
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit's index in `0..4`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// A playing card.
///
/// Cards compare by rank first and by suit second, so the derived equality
/// and the [`Ord`] implementation agree: two cards are equal iff both rank
/// and suit match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted; [`Card::name`](Card::name) and [`Card::glyph`](Card::glyph)
    /// reject them with an error, and rank 0 marks a cleared slot that
    /// [`Hand::squash`](crate::Hand::squash) drops.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether rank and suit are inside the playing-card domain.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.rank, 1..=13)
    }

    /// Returns the card's magnitude ranking: `suit_index * 13 + rank`.
    ///
    /// For in-domain ranks this is injective over the deck: Clubs occupy
    /// 1..=13, Diamonds 14..=26, Hearts 27..=39, Spades 40..=52. Round
    /// resolution compares these raw magnitudes; it is distinct from the
    /// [`Ord`] ordering, which breaks rank ties by suit.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.suit.index() * 13 + self.rank
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
