//! Card suits.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::ParseSuitError;
use crate::text;

/// Canonical name of [`Suit::Hearts`].
pub const HEARTS: &str = "Hearts";
/// Canonical name of [`Suit::Diamonds`].
pub const DIAMONDS: &str = "Diamonds";
/// Canonical name of [`Suit::Clubs`].
pub const CLUBS: &str = "Clubs";
/// Canonical name of [`Suit::Spades`].
pub const SPADES: &str = "Spades";

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the canonical name of the suit, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => HEARTS,
            Self::Diamonds => DIAMONDS,
            Self::Clubs => CLUBS,
            Self::Spades => SPADES,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a suit name, ignoring case.
///
/// ```
/// use cardval::Suit;
///
/// assert_eq!("hearts".parse::<Suit>(), Ok(Suit::Hearts));
/// assert!("Cups".parse::<Suit>().is_err());
/// ```
impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| text::eq_ignore_case(suit.name(), s))
            .ok_or_else(|| ParseSuitError {
                input: s.to_string(),
            })
    }
}
