//! The shoe: the drawable pool of cards for a round.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyShoeError;

/// How many canonical decks make up a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShoeVariant {
    /// A single 52-card deck.
    #[default]
    Traditional,
    /// Eight decks, 416 cards.
    Modern,
}

impl ShoeVariant {
    /// Returns the number of decks in this variant.
    #[must_use]
    pub const fn decks(self) -> usize {
        match self {
            Self::Traditional => 1,
            Self::Modern => 8,
        }
    }

    /// Returns the number of cards in a full shoe of this variant.
    #[must_use]
    pub const fn size(self) -> usize {
        self.decks() * DECK_SIZE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawOrder {
    Random,
    Stacked,
}

/// A multiset of cards built from one or more canonical decks.
///
/// Draws remove a uniformly random card using a `ChaCha20` generator. A shoe
/// built with [`Shoe::stacked`] instead deals a fixed sequence, which is used
/// to replay recorded rounds.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    variant: ShoeVariant,
    order: DrawOrder,
    rng: ChaCha20Rng,
}

/// Builds the unshuffled cards for a variant.
#[must_use]
pub fn build(variant: ShoeVariant) -> Vec<Card> {
    let mut cards = Vec::with_capacity(variant.size());
    for _ in 0..variant.decks() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }
    cards
}

impl Shoe {
    /// Creates a shuffled shoe seeded from operating system entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new(variant: ShoeVariant) -> Self {
        Self::with_rng(variant, ChaCha20Rng::from_os_rng())
    }

    /// Creates a shuffled shoe from a fixed seed.
    ///
    /// Seeded shoes are reproducible and therefore only suitable for tests
    /// and replays, never for live play.
    #[must_use]
    pub fn from_seed(variant: ShoeVariant, seed: u64) -> Self {
        Self::with_rng(variant, ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_rng(variant: ShoeVariant, rng: ChaCha20Rng) -> Self {
        let mut shoe = Self {
            cards: build(variant),
            variant,
            order: DrawOrder::Random,
            rng,
        };
        shoe.shuffle();
        shoe
    }

    /// Creates a shoe that deals `cards` in order, first element first.
    ///
    /// Refreshing a stacked shoe turns it back into a random shoe of the
    /// given variant.
    #[must_use]
    pub fn stacked(variant: ShoeVariant, cards: &[Card]) -> Self {
        let mut cards = cards.to_vec();
        cards.reverse();
        Self {
            cards,
            variant,
            order: DrawOrder::Stacked,
            rng: ChaCha20Rng::seed_from_u64(0),
        }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Rebuilds the full shoe and shuffles it.
    pub fn refresh(&mut self) {
        self.cards = build(self.variant);
        self.order = DrawOrder::Random;
        self.shuffle();
        tracing::debug!(cards = self.cards.len(), "shoe refreshed");
    }

    /// Removes and returns one card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if no cards remain.
    pub fn draw_one(&mut self) -> Result<Card, EmptyShoeError> {
        if self.cards.is_empty() {
            tracing::error!(variant = ?self.variant, "draw from an empty shoe");
            return Err(EmptyShoeError);
        }

        let card = match self.order {
            DrawOrder::Random => {
                let index = self.rng.random_range(0..self.cards.len());
                self.cards.swap_remove(index)
            }
            DrawOrder::Stacked => self.cards.pop().ok_or(EmptyShoeError)?,
        };
        tracing::debug!(%card, remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Removes one instance of `card`, returning it if it was present.
    pub fn remove(&mut self, card: Card) -> Option<Card> {
        let index = self.cards.iter().position(|c| *c == card)?;
        Some(self.cards.swap_remove(index))
    }

    /// Returns the number of instances of `card` left in the shoe.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|c| **c == card).count()
    }

    /// Returns the remaining cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the variant this shoe is rebuilt from.
    #[must_use]
    pub const fn variant(&self) -> ShoeVariant {
        self.variant
    }
}
