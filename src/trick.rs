//! Trick records and trick resolution.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::PlayError;
use crate::player::{PLAYER_COUNT, Seat};

/// Number of tricks in one hand.
pub const TRICKS_PER_HAND: usize = 13;

/// Finds the winner of a trick.
///
/// `plays` lists each seat's card in play order, lead first. The lead card
/// holds the trick until a later card of `lead_suit` with a strictly higher
/// rank beats it. Cards of any other suit never win.
///
/// # Errors
///
/// Returns [`PlayError::MissingPlay`] if `plays` is empty.
pub fn resolve_trick(lead_suit: Suit, plays: &[(Seat, Card)]) -> Result<(Seat, Card), PlayError> {
    let (&lead, rest) = plays.split_first().ok_or(PlayError::MissingPlay)?;
    let mut best = lead;
    for &(seat, card) in rest {
        if card.suit == lead_suit && card.rank > best.1.rank {
            best = (seat, card);
        }
    }
    Ok(best)
}

/// A completed trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    number: usize,
    plays: Vec<(Seat, Card)>,
    winner: Seat,
    winning_card: Card,
}

impl Trick {
    /// Resolves a trick from its plays.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::MissingPlay`] unless exactly one card per seat
    /// was played.
    pub fn resolve(number: usize, plays: Vec<(Seat, Card)>) -> Result<Self, PlayError> {
        let every_seat_played = Seat::ALL
            .iter()
            .all(|seat| plays.iter().filter(|(played_by, _)| played_by == seat).count() == 1);
        if plays.len() != PLAYER_COUNT || !every_seat_played {
            return Err(PlayError::MissingPlay);
        }
        let lead_suit = plays[0].1.suit;
        let (winner, winning_card) = resolve_trick(lead_suit, &plays)?;
        Ok(Self {
            number,
            plays,
            winner,
            winning_card,
        })
    }

    /// Returns the trick number, starting at 1.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Returns the cards played, lead first.
    #[must_use]
    pub fn plays(&self) -> &[(Seat, Card)] {
        &self.plays
    }

    /// Returns the seat that led.
    #[must_use]
    pub fn leader(&self) -> Seat {
        self.plays[0].0
    }

    /// Returns the suit that was led.
    #[must_use]
    pub fn lead_suit(&self) -> Suit {
        self.plays[0].1.suit
    }

    /// Returns the card a seat played, if it played in this trick.
    #[must_use]
    pub fn card_of(&self, seat: Seat) -> Option<Card> {
        self.plays
            .iter()
            .find(|(played_by, _)| *played_by == seat)
            .map(|&(_, card)| card)
    }

    /// Returns the winning seat.
    #[must_use]
    pub const fn winner(&self) -> Seat {
        self.winner
    }

    /// Returns the winning card.
    #[must_use]
    pub const fn winning_card(&self) -> Card {
        self.winning_card
    }
}
