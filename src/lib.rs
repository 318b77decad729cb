//! A core engine for the card game War with optional `no_std` support.
//!
//! The crate covers the deck and hand data model: deterministic deck
//! generation and shuffling, splitting a hand into aliasing views for the
//! players, per-card played markers, card comparison, and consolidating
//! won cards back into a single owning hand. The surrounding game loop,
//! menus, and save files are left to the caller.
//!
//! # Example
//!
//! ```
//! use warrs::DeckGenerator;
//!
//! let mut generator = DeckGenerator::new(42);
//! let deck = generator.deck(500);
//! let players = deck.split(2).unwrap();
//!
//! // Higher magnitude wins the round.
//! let (mine, yours) = (players[0].card(0).unwrap(), players[1].card(0).unwrap());
//! let _winner = if mine.value() > yours.value() { &players[0] } else { &players[1] };
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod codec;
pub mod deck;
pub mod error;
pub mod hand;
pub mod pile;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use codec::CARD_BACK;
pub use deck::DeckGenerator;
pub use error::{CardError, HandError, SplitError};
pub use hand::{CardIter, Hand};
pub use pile::{EMPTY_PILE, WonPile};
