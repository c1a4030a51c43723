//! The playing card entity.

use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::string::{String, ToString};

use crate::error::CardError;
use crate::rank::{self, Rank, derive_value};
use crate::suit::{self, Suit};

/// A playing card with suit, rank, numeric value, and an optional picture.
///
/// Suit and rank are stored as text and are not validated on construction;
/// use [`Card::is_valid`] or [`Card::typed`] to check them. The value is
/// derived from the rank by [`Card::new`] and [`Card::set_rank`], and taken
/// verbatim everywhere else.
///
/// Two cards are equal when their suit and rank text are equal. Value and
/// picture do not take part in equality or hashing.
///
/// # Example
///
/// ```
/// use cardval::Card;
///
/// let card = Card::new("Hearts", "Queen");
/// assert_eq!(card.value(), 12);
/// assert!(card.is_face_card());
/// assert_eq!(card.to_string(), "Queen of Hearts (Value: 12)");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    suit: Option<String>,
    rank: Option<String>,
    value: i32,
    picture: Option<String>,
}

impl Default for Card {
    /// The Ace of Spades with value 1 and no picture.
    fn default() -> Self {
        Self {
            suit: Some(suit::SPADES.to_string()),
            rank: Some(rank::ACE.to_string()),
            value: 1,
            picture: None,
        }
    }
}

impl Card {
    /// Creates a card, deriving its value from the rank.
    #[must_use]
    pub fn new(suit: impl Into<String>, rank: impl Into<String>) -> Self {
        let rank = rank.into();
        let value = derive_value(Some(&rank));
        Self {
            suit: Some(suit.into()),
            rank: Some(rank),
            value,
            picture: None,
        }
    }

    /// Creates a card with an explicit value.
    ///
    /// The value is trusted even if it does not match the rank.
    #[must_use]
    pub fn with_value(suit: impl Into<String>, rank: impl Into<String>, value: i32) -> Self {
        Self {
            suit: Some(suit.into()),
            rank: Some(rank.into()),
            value,
            picture: None,
        }
    }

    /// Creates a card from all four fields, stored verbatim.
    #[must_use]
    pub fn with_picture(
        suit: impl Into<String>,
        rank: impl Into<String>,
        value: i32,
        picture: impl Into<String>,
    ) -> Self {
        Self {
            suit: Some(suit.into()),
            rank: Some(rank.into()),
            value,
            picture: Some(picture.into()),
        }
    }

    /// Creates a card from raw fields, any of which may be absent.
    #[must_use]
    pub const fn from_parts(
        suit: Option<String>,
        rank: Option<String>,
        value: i32,
        picture: Option<String>,
    ) -> Self {
        Self {
            suit,
            rank,
            value,
            picture,
        }
    }

    /// Creates a valid card from a typed suit and rank.
    ///
    /// ```
    /// use cardval::{Card, Rank, Suit};
    ///
    /// let card = Card::from_typed(Suit::Clubs, Rank::Ten);
    /// assert_eq!(card.short().to_string(), "10 of Clubs");
    /// assert_eq!(card.value(), 10);
    /// ```
    #[must_use]
    pub fn from_typed(suit: Suit, rank: Rank) -> Self {
        Self {
            suit: Some(suit.name().to_string()),
            rank: Some(rank.name().to_string()),
            value: i32::from(rank.value()),
            picture: None,
        }
    }

    /// Returns the suit text.
    #[must_use]
    pub fn suit(&self) -> Option<&str> {
        self.suit.as_deref()
    }

    /// Returns the rank text.
    #[must_use]
    pub fn rank(&self) -> Option<&str> {
        self.rank.as_deref()
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns the picture reference.
    #[must_use]
    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }

    /// Sets the suit.
    pub fn set_suit(&mut self, suit: impl Into<String>) {
        self.suit = Some(suit.into());
    }

    /// Sets the rank and re-derives the value from it.
    ///
    /// Any value set explicitly before is overwritten.
    pub fn set_rank(&mut self, rank: impl Into<String>) {
        let rank = rank.into();
        let value = derive_value(Some(&rank));
        if value != self.value {
            tracing::trace!(old = self.value, new = value, "rank change re-derived value");
        }
        self.rank = Some(rank);
        self.value = value;
    }

    /// Sets the value without touching the rank.
    pub const fn set_value(&mut self, value: i32) {
        self.value = value;
    }

    /// Sets the rank and value together, without deriving the value.
    pub fn set_rank_and_value(&mut self, rank: impl Into<String>, value: i32) {
        self.rank = Some(rank.into());
        self.value = value;
    }

    /// Removes the suit.
    pub fn clear_suit(&mut self) {
        self.suit = None;
    }

    /// Removes the rank. The value drops to 0, as for any unrecognized rank.
    pub fn clear_rank(&mut self) {
        self.rank = None;
        self.value = derive_value(None);
    }

    /// Sets the picture reference.
    pub fn set_picture(&mut self, picture: impl Into<String>) {
        self.picture = Some(picture.into());
    }

    /// Removes the picture reference.
    pub fn clear_picture(&mut self) {
        self.picture = None;
    }

    /// Returns the suit if its text names one.
    #[must_use]
    pub fn suit_kind(&self) -> Option<Suit> {
        self.suit.as_deref()?.parse().ok()
    }

    /// Returns the rank if its text names one.
    #[must_use]
    pub fn rank_kind(&self) -> Option<Rank> {
        self.rank.as_deref()?.parse().ok()
    }

    /// Converts the suit and rank text into typed values.
    ///
    /// # Errors
    ///
    /// Returns [`CardError`] when the suit or rank is absent or does not name
    /// a known suit or rank. The suit is checked first.
    pub fn typed(&self) -> Result<(Suit, Rank), CardError> {
        let suit = self.suit.as_deref().ok_or(CardError::MissingSuit)?.parse::<Suit>()?;
        let rank = self.rank.as_deref().ok_or(CardError::MissingRank)?.parse::<Rank>()?;
        Ok((suit, rank))
    }

    /// Returns whether the rank is Jack, Queen, or King, ignoring case.
    #[must_use]
    pub fn is_face_card(&self) -> bool {
        self.rank_kind().is_some_and(Rank::is_face)
    }

    /// Returns whether the rank is Ace, ignoring case.
    #[must_use]
    pub fn is_ace(&self) -> bool {
        self.rank_kind().is_some_and(Rank::is_ace)
    }

    /// Returns whether both suit and rank name a standard suit and rank.
    ///
    /// ```
    /// use cardval::Card;
    ///
    /// assert!(Card::new("diamonds", "jack").is_valid());
    /// assert!(!Card::new("Diamonds", "11").is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.typed().is_ok()
    }

    /// Returns the 32-bit identity hash of the card.
    ///
    /// Computed as `31 * h(suit) + h(rank)` with wrapping arithmetic, where
    /// `h` is the polynomial string hash over UTF-16 code units and an
    /// absent field hashes to 0. The result is stable across platforms and
    /// builds.
    #[must_use]
    pub fn hash_code(&self) -> i32 {
        let suit = self.suit.as_deref().map_or(0, string_hash);
        let rank = self.rank.as_deref().map_or(0, string_hash);
        suit.wrapping_mul(31).wrapping_add(rank)
    }

    /// Returns a [`Display`](fmt::Display) adapter for the short form
    /// `"<rank> of <suit>"`.
    #[must_use]
    pub const fn short(&self) -> Short<'_> {
        Short(self)
    }

    /// Returns the short form `"<rank> of <suit>"`.
    #[must_use]
    pub fn to_short_string(&self) -> String {
        self.short().to_string()
    }
}

fn string_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

fn or_null(field: Option<&str>) -> &str {
    field.unwrap_or("null")
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Card {
    /// Formats as `"<rank> of <suit> (Value: <value>)"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Value: {})", self.short(), self.value)
    }
}

/// Short display form of a [`Card`], see [`Card::short`].
#[derive(Debug, Clone, Copy)]
pub struct Short<'a>(&'a Card);

impl fmt::Display for Short<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {}",
            or_null(self.0.rank.as_deref()),
            or_null(self.0.suit.as_deref())
        )
    }
}
