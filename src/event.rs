//! Game events and the sink that receives them.
//!
//! The engine reports every deal and play through an [`EventSink`] so a host
//! can narrate the hand. Passing `&mut ()` discards all events.

use crate::card::Card;
use crate::player::Seat;

/// Something observable that happened during a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A dealer was chosen and is about to shuffle and deal.
    DealerChosen {
        /// The dealing seat.
        dealer: Seat,
    },
    /// A player received a card during the deal.
    CardTaken {
        /// The receiving seat.
        seat: Seat,
        /// The card received.
        card: Card,
    },
    /// A trick began.
    TrickStarted {
        /// The trick number, starting at 1.
        number: usize,
        /// The seat leading the trick.
        leader: Seat,
    },
    /// The leader played the first card of a trick.
    CardLed {
        /// The leading seat.
        seat: Seat,
        /// The card led.
        card: Card,
    },
    /// A following player played a card.
    CardPlayed {
        /// The playing seat.
        seat: Seat,
        /// The card played.
        card: Card,
    },
    /// A trick was resolved.
    TrickWon {
        /// The trick number, starting at 1.
        number: usize,
        /// The winning seat.
        winner: Seat,
        /// The winning card.
        card: Card,
    },
    /// All tricks have been played.
    HandFinished,
}

/// Receives [`GameEvent`]s as the engine produces them.
pub trait EventSink {
    /// Handles one event.
    fn on_event(&mut self, event: &GameEvent);
}

impl EventSink for () {
    fn on_event(&mut self, _event: &GameEvent) {}
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}
