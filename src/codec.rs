//! Card display: human-readable names and 4-byte glyphs.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::card::{Card, Suit};
use crate::error::CardError;

/// The face-down card glyph, UTF-8 encoded (U+1F0A0).
pub const CARD_BACK: [u8; 4] = [0xf0, 0x9f, 0x82, 0xa0];

/// First two bytes of every card glyph.
const GLYPH_PREFIX: [u8; 2] = [0xf0, 0x9f];

/// Last two bytes of each suit's ace glyph; the rank offsets from there.
const fn glyph_base(suit: Suit) -> [u8; 2] {
    match suit {
        Suit::Clubs => [0x83, 0x91],
        Suit::Diamonds => [0x83, 0x81],
        Suit::Hearts => [0x82, 0xb1],
        Suit::Spades => [0x82, 0xa1],
    }
}

const fn suit_plural(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
        Suit::Hearts => "Hearts",
        Suit::Spades => "Spades",
    }
}

impl Card {
    /// Returns the card's human-readable name, such as `"King of Spades"`.
    ///
    /// Ranks 1 through 10 render as plain digits, so the ace of clubs is
    /// `"1 of Clubs"`, not `"Ace of Clubs"`. Ranks 11, 12, and 13 render as
    /// Jack, Queen, and King.
    ///
    /// # Errors
    ///
    /// Returns an error for ranks outside 1..=13 rather than a blank
    /// placeholder name.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, Suit};
    ///
    /// let card = Card::new(Suit::Spades, 13);
    /// assert_eq!(card.name().unwrap(), "King of Spades");
    /// ```
    pub fn name(&self) -> Result<String, CardError> {
        let suit = suit_plural(self.suit);
        match self.rank {
            1..=10 => Ok(format!("{} of {suit}", self.rank)),
            11 => Ok(format!("Jack of {suit}")),
            12 => Ok(format!("Queen of {suit}")),
            13 => Ok(format!("King of {suit}")),
            _ => Err(CardError::InvalidCard),
        }
    }

    /// Returns the card's 4-byte UTF-8 display glyph.
    ///
    /// The glyph is the fixed 2-byte prefix, the suit's 2-byte ace base,
    /// and `rank - 1` added to the final byte. The rank is validated
    /// first, so the addition stays inside a closed range: every base's
    /// last byte plus 12 is still a valid continuation byte, and the
    /// result always decodes as one scalar in the playing-card block.
    ///
    /// # Errors
    ///
    /// Returns an error for ranks outside 1..=13.
    pub const fn glyph(&self) -> Result<[u8; 4], CardError> {
        if !self.is_valid() {
            return Err(CardError::InvalidCard);
        }
        let [high, low] = glyph_base(self.suit);
        Ok([GLYPH_PREFIX[0], GLYPH_PREFIX[1], high, low + self.rank - 1])
    }
}
