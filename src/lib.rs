//! A playing card value type with optional `no_std` support.
//!
//! [`Card`] holds a suit, rank, numeric value, and optional picture
//! reference. Suit and rank are kept as text and checked on demand, while
//! [`Suit`] and [`Rank`] offer the same vocabulary as closed enums.
//!
//! # Example
//!
//! ```
//! use cardval::{Card, Rank, Suit};
//!
//! let mut card = Card::default();
//! assert_eq!(card.to_string(), "Ace of Spades (Value: 1)");
//!
//! card.set_rank("King");
//! assert_eq!(card.value(), 13);
//! assert_eq!(card.typed(), Ok((Suit::Spades, Rank::King)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod random;
pub mod rank;
pub mod suit;
mod text;

// Re-export main types
pub use card::{Card, Short};
pub use error::{CardError, ParseRankError, ParseSuitError};
pub use rank::{Rank, derive_value};
pub use suit::Suit;
