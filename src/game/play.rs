extern crate alloc;

use alloc::vec::Vec;

use crate::error::PlayError;
use crate::event::{EventSink, GameEvent};
use crate::player::PLAYER_COUNT;
use crate::trick::{TRICKS_PER_HAND, Trick};

use super::{Game, GameState};

impl Game {
    /// Plays and resolves the next trick.
    ///
    /// The leader plays the last card in their hand, fixing the lead suit.
    /// The other three seats follow clockwise, each playing the first card
    /// of the lead suit they hold or else discarding their last card. The
    /// winner leads the next trick.
    ///
    /// Returns the completed trick.
    ///
    /// # Errors
    ///
    /// Returns an error if no trick is ready to be played, or if a hand
    /// runs dry before the last trick. A hand that has run dry is caught
    /// before any card leaves a hand, so a failed call leaves the game
    /// untouched.
    pub fn play_trick<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<Trick, PlayError> {
        let (number, leader) = match self.state {
            GameState::TrickInProgress { trick, leader } => (trick, leader),
            GameState::TrickResolved { trick, winner } => (trick + 1, winner),
            GameState::NotStarted | GameState::Dealing | GameState::Finished => {
                return Err(PlayError::InvalidState);
            }
        };
        if let Some(player) = self.players.iter().find(|player| player.hand().is_empty()) {
            return Err(PlayError::EmptyHand(player.seat()));
        }
        self.state = GameState::TrickInProgress {
            trick: number,
            leader,
        };
        sink.on_event(&GameEvent::TrickStarted { number, leader });

        let lead_card = self.player_mut(leader).lead()?;
        let lead_suit = lead_card.suit;
        log::trace!("{leader} leads {lead_card}");
        sink.on_event(&GameEvent::CardLed {
            seat: leader,
            card: lead_card,
        });

        let mut plays = Vec::with_capacity(PLAYER_COUNT);
        plays.push((leader, lead_card));

        let mut seat = leader.next();
        while seat != leader {
            let card = self.player_mut(seat).play_card(lead_suit)?;
            log::trace!("{seat} plays {card}");
            sink.on_event(&GameEvent::CardPlayed { seat, card });
            plays.push((seat, card));
            seat = seat.next();
        }

        let trick = Trick::resolve(number, plays)?;
        let winner = trick.winner();
        log::debug!(
            "trick {number}: {winner} wins with the {}",
            trick.winning_card()
        );
        sink.on_event(&GameEvent::TrickWon {
            number,
            winner,
            card: trick.winning_card(),
        });

        self.tricks_played = number;
        self.state = if number >= TRICKS_PER_HAND {
            sink.on_event(&GameEvent::HandFinished);
            GameState::Finished
        } else {
            GameState::TrickResolved {
                trick: number,
                winner,
            }
        };

        Ok(trick)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PlayError;
    use crate::options::GameOptions;
    use crate::player::{Player, Seat};

    use super::{Game, GameState};

    #[test]
    fn empty_hand_fails_before_any_card_is_played() {
        let options = GameOptions::default()
            .with_dealer(Seat::North)
            .with_opening_leader(Seat::East);
        let mut game = Game::new(options, 3);
        game.deal(&mut ()).unwrap();
        game.players[Seat::West.index()] = Player::new(Seat::West);

        let leader_hand = game.player(Seat::East).hand().clone();
        let state = game.state();

        assert_eq!(
            game.play_trick(&mut ()).unwrap_err(),
            PlayError::EmptyHand(Seat::West)
        );
        assert_eq!(game.player(Seat::East).hand(), &leader_hand);
        assert_eq!(game.state(), state);
        assert_eq!(
            state,
            GameState::TrickInProgress {
                trick: 1,
                leader: Seat::East
            }
        );
    }
}
