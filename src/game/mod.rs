//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::GameError;
use crate::event::EventSink;
use crate::options::GameOptions;
use crate::player::{PLAYER_COUNT, Player, Seat};

mod deal;
mod play;
pub mod state;

pub use state::GameState;

/// A trick-taking engine that plays out one hand for four players.
///
/// The game owns the deck, the four players, and the random number
/// generator. Drive it with [`Game::deal`] followed by [`Game::play_trick`]
/// until [`GameState::Finished`], or run everything with
/// [`Game::play_hand`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards not yet dealt.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Players in [`Seat::ALL`] order.
    players: [Player; PLAYER_COUNT],
    /// Current game state.
    state: GameState,
    /// Seat that dealt, once chosen.
    dealer: Option<Seat>,
    /// Number of tricks resolved so far.
    tricks_played: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bridgers::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::from_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game drawing its randomness from `rng`.
    #[must_use]
    pub fn from_rng(options: GameOptions, rng: ChaCha8Rng) -> Self {
        Self {
            deck: Deck::build(),
            options,
            players: Player::table(),
            state: GameState::NotStarted,
            dealer: None,
            tricks_played: 0,
            rng,
        }
    }

    /// Plays a whole hand: the deal, then every trick.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand has already started or an engine
    /// invariant is broken along the way.
    pub fn play_hand<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), GameError> {
        self.deal(sink)?;
        while self.state != GameState::Finished {
            self.play_trick(sink)?;
        }
        Ok(())
    }

    /// Picks a seat uniformly at random.
    fn random_seat(&mut self) -> Seat {
        Seat::from_index(self.rng.random_range(0..PLAYER_COUNT))
    }

    fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player at `seat`.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns all players in [`Seat::ALL`] order.
    #[must_use]
    pub const fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    /// Returns the seat that dealt, once the deal has begun.
    #[must_use]
    pub const fn dealer(&self) -> Option<Seat> {
        self.dealer
    }

    /// Returns the seat that leads the next trick.
    ///
    /// Returns `None` before the deal and after the last trick.
    #[must_use]
    pub const fn leader(&self) -> Option<Seat> {
        match self.state {
            GameState::TrickInProgress { leader, .. } => Some(leader),
            GameState::TrickResolved { winner, .. } => Some(winner),
            GameState::NotStarted | GameState::Dealing | GameState::Finished => None,
        }
    }

    /// Returns the number of tricks resolved so far.
    #[must_use]
    pub const fn tricks_played(&self) -> usize {
        self.tricks_played
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards held across all hands.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(|player| player.hand().len()).sum()
    }
}
