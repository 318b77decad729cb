//! Hand storage, views, and splitting.

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::card::Card;
use crate::error::{HandError, SplitError};

/// Backing storage for a hand.
///
/// Invariant: `cards` and `played` always have the same length. Every
/// constructor either allocates both together or checks the lengths first,
/// so the invariant cannot be broken from outside the module.
#[derive(Debug)]
struct Cells {
    cards: Vec<Card>,
    played: Vec<bool>,
}

/// An ordered sequence of cards with a parallel played marker per card.
///
/// A hand is either **owning** (it was created with its own freshly
/// allocated storage, by [`DeckGenerator::deck`](crate::DeckGenerator::deck),
/// [`Hand::from_parts`], or [`Hand::squash`]) or a **view** produced by
/// [`Hand::split`]. Views alias a sub-range of their source's storage:
/// marking a card played through a view is visible through the source and
/// through any overlapping view. The storage is shared and reference
/// counted, so a view stays valid even if the source handle is dropped,
/// and no view ever frees or reuses the buffer on its own; consolidating
/// cards back into owned storage always goes through [`Hand::squash`],
/// which copies.
///
/// Mutation goes through `&self`. The crate is single-threaded by design,
/// so the interior mutability is unsynchronized.
#[derive(Debug)]
pub struct Hand {
    /// Shared card and marker storage.
    cells: Rc<RefCell<Cells>>,
    /// First position of this hand within the storage.
    start: usize,
    /// Number of cards in this hand.
    len: usize,
    /// Whether this hand covers its own storage rather than aliasing
    /// another hand's.
    owned: bool,
}

impl Hand {
    /// Creates an owning hand with all played markers false.
    pub(crate) fn owned(cards: Vec<Card>) -> Self {
        let len = cards.len();
        let played = alloc::vec![false; len];
        Self {
            cells: Rc::new(RefCell::new(Cells { cards, played })),
            start: 0,
            len,
            owned: true,
        }
    }

    /// Creates an owning hand from raw card and marker arrays.
    ///
    /// This is the restore path for an external snapshot: the caller
    /// supplies both sequences and they must line up one marker per card.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` and `played` differ in length. The check
    /// runs before any allocation.
    pub fn from_parts(cards: Vec<Card>, played: Vec<bool>) -> Result<Self, HandError> {
        if cards.len() != played.len() {
            return Err(HandError::MismatchedMarkers);
        }
        let len = cards.len();
        Ok(Self {
            cells: Rc::new(RefCell::new(Cells { cards, played })),
            start: 0,
            len,
            owned: true,
        })
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether this hand is a view into another hand's storage.
    #[must_use]
    pub const fn is_view(&self) -> bool {
        !self.owned
    }

    /// Returns the card at `index`, or `None` if out of range.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<Card> {
        if index >= self.len {
            return None;
        }
        Some(self.cells.borrow().cards[self.start + index])
    }

    /// Returns the played marker at `index`, or `None` if out of range.
    #[must_use]
    pub fn is_played(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.cells.borrow().played[self.start + index])
    }

    /// Sets the played marker at `index`.
    ///
    /// On a view this writes through to the source's storage. Returns
    /// whether `index` was in range; an out-of-range index changes nothing.
    pub fn set_played(&self, index: usize, played: bool) -> bool {
        if index >= self.len {
            return false;
        }
        self.cells.borrow_mut().played[self.start + index] = played;
        true
    }

    /// Counts the cards marked played.
    #[must_use]
    pub fn count_played(&self) -> usize {
        let cells = self.cells.borrow();
        cells.played[self.start..self.start + self.len]
            .iter()
            .filter(|&&played| played)
            .count()
    }

    /// Returns a copy of the cards in order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        let cells = self.cells.borrow();
        cells.cards[self.start..self.start + self.len].to_vec()
    }

    /// Returns a copy of the played markers in order.
    #[must_use]
    pub fn played(&self) -> Vec<bool> {
        let cells = self.cells.borrow();
        cells.played[self.start..self.start + self.len].to_vec()
    }

    /// Splits the hand into `hands` views over the same storage.
    ///
    /// View `i` covers `len / hands` consecutive positions starting at
    /// `i * (len / hands)`; the last view additionally absorbs the
    /// `len % hands` remainder, so the view lengths always sum to the
    /// source length. No cards are copied: the views alias this hand's
    /// cards and played markers.
    ///
    /// # Errors
    ///
    /// Returns an error if `hands` is zero or exceeds the number of cards
    /// (either would leave a view empty).
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::DeckGenerator;
    ///
    /// let deck = DeckGenerator::new(42).deck(100);
    /// let players = deck.split(2).unwrap();
    /// assert_eq!(players[0].len(), 26);
    /// assert_eq!(players[1].len(), 26);
    /// ```
    pub fn split(&self, hands: usize) -> Result<Vec<Self>, SplitError> {
        if hands == 0 || hands > self.len {
            return Err(SplitError::InvalidSplit);
        }

        let each = self.len / hands;
        let mut views = Vec::with_capacity(hands);
        for i in 0..hands {
            let mut len = each;
            if i == hands - 1 {
                len += self.len % hands;
            }
            views.push(Self {
                cells: Rc::clone(&self.cells),
                start: self.start + i * each,
                len,
                owned: false,
            });
        }
        Ok(views)
    }

    /// Returns an iterator over the cards in order.
    #[must_use]
    pub const fn iter(&self) -> CardIter<'_> {
        CardIter {
            hand: self,
            index: 0,
        }
    }
}

/// A read-only walk over a hand's cards in position order.
///
/// The iterator holds no ownership of the cards; it indexes into the hand
/// it was created from and yields copies.
#[derive(Debug)]
pub struct CardIter<'a> {
    hand: &'a Hand,
    index: usize,
}

impl Iterator for CardIter<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        let card = self.hand.card(self.index)?;
        self.index += 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.hand.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CardIter<'_> {}

impl<'a> IntoIterator for &'a Hand {
    type Item = Card;
    type IntoIter = CardIter<'a>;

    fn into_iter(self) -> CardIter<'a> {
        self.iter()
    }
}
