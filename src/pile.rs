//! Won-card piles and hand consolidation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE};
use crate::hand::Hand;

/// A round's won-card pile: one optional slot per deck position.
///
/// `None` marks an empty slot; absence is a first-class state, not a
/// sentinel card. An all-empty pile is [`EMPTY_PILE`].
pub type WonPile = [Option<Card>; DECK_SIZE];

/// A pile with every slot empty.
pub const EMPTY_PILE: WonPile = [None; DECK_SIZE];

impl Hand {
    /// Consolidates this hand and a won-card pile into a new owning hand.
    ///
    /// The output holds, in order, every card of this hand with a positive
    /// rank, then every occupied rank-positive slot of `pile` in index
    /// order. Rank 0 marks a cleared slot and is dropped; that filtering is
    /// the one place the crate intentionally discards cards. Every card is
    /// copied into freshly allocated storage with all played markers
    /// false, so both inputs can be retired afterwards; even when `self`
    /// is a view, the output shares nothing with its storage.
    #[must_use]
    pub fn squash(&self, pile: &WonPile) -> Self {
        let mut cards = Vec::with_capacity(self.len() + DECK_SIZE);
        cards.extend(self.iter().filter(|card| card.rank > 0));
        cards.extend(pile.iter().flatten().copied().filter(|card| card.rank > 0));
        Self::owned(cards)
    }
}
