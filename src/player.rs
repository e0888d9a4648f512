//! Seats, players, and the deal.

use core::fmt;

use rand::Rng;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::{DealError, PlayError};
use crate::event::{EventSink, GameEvent};
use crate::hand::{HAND_SIZE, Hand};

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 4;

/// A seat at the table. Each player is identified by their seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Seat {
    /// All seats in clockwise playing order.
    pub const ALL: [Self; PLAYER_COUNT] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the seat's position in [`Seat::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Returns the seat at `index`, wrapping around the table.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % PLAYER_COUNT]
    }

    /// Returns the next seat clockwise.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Returns the seat's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A player: a seat and the hand held there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Seat,
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new(seat: Seat) -> Self {
        Self {
            seat,
            hand: Hand::new(),
        }
    }

    /// Creates the four players, one per seat, in [`Seat::ALL`] order.
    #[must_use]
    pub const fn table() -> [Self; PLAYER_COUNT] {
        [
            Self::new(Seat::North),
            Self::new(Seat::East),
            Self::new(Seat::South),
            Self::new(Seat::West),
        ]
    }

    /// Returns the player's seat.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the player's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.seat.name()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a dealt card to the hand and reports it.
    pub fn take<S: EventSink + ?Sized>(&mut self, card: Card, sink: &mut S) {
        self.hand.add_card(card);
        log::trace!("{} took {card}", self.seat);
        sink.on_event(&GameEvent::CardTaken {
            seat: self.seat,
            card,
        });
    }

    /// Leads a trick with the last card in hand order.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptyHand`] if the hand is empty.
    pub fn lead(&mut self) -> Result<Card, PlayError> {
        self.hand.take_last().ok_or(PlayError::EmptyHand(self.seat))
    }

    /// Follows a trick led in `lead_suit`.
    ///
    /// Plays the first card of that suit if one is held, otherwise discards
    /// the last card in hand order.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptyHand`] if the hand is empty.
    pub fn play_card(&mut self, lead_suit: Suit) -> Result<Card, PlayError> {
        self.hand
            .play_card(lead_suit)
            .ok_or(PlayError::EmptyHand(self.seat))
    }
}

/// Shuffles `deck` and deals it out round-robin.
///
/// Each round gives one card to every player in slice order, and
/// [`HAND_SIZE`] rounds are dealt. With four players this drains the deck.
///
/// # Errors
///
/// Returns [`DealError::DeckExhausted`] if the deck runs out first.
pub fn deal<R, S>(
    deck: &mut Deck,
    players: &mut [Player],
    rng: &mut R,
    sink: &mut S,
) -> Result<(), DealError>
where
    R: Rng + ?Sized,
    S: EventSink + ?Sized,
{
    deck.shuffle(rng);
    for _ in 0..HAND_SIZE {
        for player in players.iter_mut() {
            let card = deck.pop_top().ok_or(DealError::DeckExhausted)?;
            player.take(card, sink);
        }
    }
    Ok(())
}
