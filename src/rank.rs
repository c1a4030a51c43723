//! Card ranks and the rank-to-value derivation.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::error::ParseRankError;
use crate::text;

/// Canonical name of [`Rank::Ace`].
pub const ACE: &str = "Ace";
/// Canonical name of [`Rank::Jack`].
pub const JACK: &str = "Jack";
/// Canonical name of [`Rank::Queen`].
pub const QUEEN: &str = "Queen";
/// Canonical name of [`Rank::King`].
pub const KING: &str = "King";

/// Card rank.
///
/// The discriminant of each variant is its conventional value
/// (Ace = 1, Jack = 11, Queen = 12, King = 13). With the `serde` feature a
/// rank is written as its [`name`](Rank::name) and read back with
/// [`FromStr`], so `Rank::Ten` round-trips as `"10"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "&'static str", try_from = "String")
)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in value order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank with the given conventional value (1..=13).
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Returns the conventional value of the rank (1 = Ace, 11 = Jack,
    /// 12 = Queen, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the canonical name of the rank, e.g. `"Ace"` or `"7"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => ACE,
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => JACK,
            Self::Queen => QUEEN,
            Self::King => KING,
        }
    }

    /// Returns whether the rank is Jack, Queen, or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Returns whether the rank is Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a rank.
///
/// Named ranks match ignoring case. Anything else is read as a decimal
/// integer and accepted only in 2..=10, so `"7"`, `"+7"`, `"007"` and the
/// fullwidth `"７"` are all [`Rank::Seven`] while `" 7"` is rejected.
///
/// ```
/// use cardval::Rank;
///
/// assert_eq!("queen".parse::<Rank>(), Ok(Rank::Queen));
/// assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
/// assert!("11".parse::<Rank>().is_err());
/// ```
impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let named = [Self::Ace, Self::Jack, Self::Queen, Self::King]
            .into_iter()
            .find(|rank| text::eq_ignore_case(rank.name(), s));
        if let Some(rank) = named {
            return Ok(rank);
        }

        match text::parse_decimal(s) {
            Some(n @ 2..=10) => Ok(Self::ALL[n as usize - 1]),
            _ => Err(ParseRankError {
                input: s.to_string(),
            }),
        }
    }
}

impl From<Rank> for &'static str {
    fn from(rank: Rank) -> Self {
        rank.name()
    }
}

impl TryFrom<String> for Rank {
    type Error = ParseRankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Derives the conventional value of a rank given as text.
///
/// Returns 1 for Ace, 11 for Jack, 12 for Queen, 13 for King, and the face
/// value for 2 through 10. Absent, unrecognized, or out-of-range ranks yield
/// 0; this function never fails.
///
/// ```
/// use cardval::derive_value;
///
/// assert_eq!(derive_value(Some("KING")), 13);
/// assert_eq!(derive_value(Some("7")), 7);
/// assert_eq!(derive_value(Some("1")), 0);
/// assert_eq!(derive_value(None), 0);
/// ```
#[must_use]
pub fn derive_value(rank: Option<&str>) -> i32 {
    let Some(text) = rank else {
        return 0;
    };

    text.parse::<Rank>().map_or_else(
        |err| {
            tracing::debug!(%err, "rank not recognized, value falls back to 0");
            0
        },
        |rank| i32::from(rank.value()),
    )
}
