//! Error types for parsing and validating cards.

use alloc::string::String;

use thiserror::Error;

/// Error returned when text does not name one of the four suits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized suit `{input}`")]
pub struct ParseSuitError {
    /// The rejected text.
    pub input: String,
}

/// Error returned when text does not name a rank.
///
/// Accepted ranks are `Ace`, `Jack`, `Queen`, `King` (any case) and the
/// integers 2 through 10.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized rank `{input}`")]
pub struct ParseRankError {
    /// The rejected text.
    pub input: String,
}

/// Errors that can occur when converting a [`Card`](crate::Card) to typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The card has no suit.
    #[error("card has no suit")]
    MissingSuit,
    /// The card has no rank.
    #[error("card has no rank")]
    MissingRank,
    /// The suit text is not a known suit.
    #[error(transparent)]
    InvalidSuit(#[from] ParseSuitError),
    /// The rank text is not a known rank.
    #[error(transparent)]
    InvalidRank(#[from] ParseRankError),
}
