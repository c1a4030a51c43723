//! Random sampling of suits, ranks, and cards.
//!
//! [`StandardUniform`] samples uniformly over the canonical values, so a
//! sampled [`Card`] is always valid.
//!
//! ```
//! use cardval::Card;
//! use rand::{Rng, SeedableRng};
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let card: Card = rng.random();
//! assert!(card.is_valid());
//! ```

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::card::Card;
use crate::rank::Rank;
use crate::suit::Suit;

impl Distribution<Suit> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Suit {
        Suit::ALL[rng.random_range(0..Suit::ALL.len())]
    }
}

impl Distribution<Rank> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rank {
        Rank::ALL[rng.random_range(0..Rank::ALL.len())]
    }
}

impl Distribution<Card> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Card {
        Card::from_typed(rng.random(), rng.random())
    }
}
