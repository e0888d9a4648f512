//! A player's hand of cards.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};

/// Number of cards each player holds after the deal.
pub const HAND_SIZE: usize = 13;

/// A player's hand, kept in the order the cards were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds at least one card of `suit`.
    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit == suit)
    }

    /// Removes and returns the last card in hand order.
    ///
    /// This is the card a player leads with.
    pub fn take_last(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes and returns the card to play when `lead_suit` was led.
    ///
    /// The first card of the led suit in hand order is played. Holding none,
    /// the last card in hand order is discarded instead. Returns `None` only
    /// for an empty hand.
    pub fn play_card(&mut self, lead_suit: Suit) -> Option<Card> {
        match self.cards.iter().position(|card| card.suit == lead_suit) {
            Some(index) => Some(self.cards.remove(index)),
            None => self.cards.pop(),
        }
    }
}
