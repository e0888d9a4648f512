use crate::error::DealError;
use crate::event::{EventSink, GameEvent};
use crate::player::{self, Seat};

use super::{Game, GameState};

impl Game {
    /// Chooses a dealer, shuffles, deals every card, and chooses the
    /// opening leader.
    ///
    /// Returns the dealer. Afterwards the game is ready for the first
    /// trick.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been dealt or the deck
    /// runs out mid-deal.
    pub fn deal<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<Seat, DealError> {
        if self.state != GameState::NotStarted {
            return Err(DealError::InvalidState);
        }
        self.state = GameState::Dealing;

        let dealer = match self.options.dealer {
            Some(seat) => seat,
            None => self.random_seat(),
        };
        self.dealer = Some(dealer);
        log::debug!("{dealer} deals");
        sink.on_event(&GameEvent::DealerChosen { dealer });

        player::deal(&mut self.deck, &mut self.players, &mut self.rng, sink)?;

        let leader = match self.options.opening_leader {
            Some(seat) => seat,
            None => self.random_seat(),
        };
        log::debug!("{leader} leads the first trick");
        self.state = GameState::TrickInProgress { trick: 1, leader };

        Ok(dealer)
    }
}
