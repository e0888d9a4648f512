//! The 52-card deck used for a single deal.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE};

/// An ordered deck of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full, unshuffled deck holding every suit and rank once.
    #[must_use]
    pub fn build() -> Self {
        Self {
            cards: (0..DECK_SIZE).map(Card::from_index).collect(),
        }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` once the deck is drained.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the cards still in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards still in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has been drained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}
