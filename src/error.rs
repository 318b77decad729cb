//! Error types for card and hand operations.

use thiserror::Error;

/// Errors from card naming and glyph encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank or suit outside the playing-card domain.
    #[error("card rank or suit outside the valid domain")]
    InvalidCard,
}

/// Errors from splitting a hand into views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Split count is zero or larger than the number of cards.
    #[error("split count must be between 1 and the number of cards")]
    InvalidSplit,
}

/// Errors from assembling a hand from raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Cards and played markers differ in length.
    #[error("cards and played markers differ in length")]
    MismatchedMarkers,
}
