//! Game state types.

use crate::player::Seat;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Players are seated and the deck is built, but nothing is dealt.
    NotStarted,
    /// The deck is being shuffled and dealt.
    Dealing,
    /// A trick is about to be played.
    TrickInProgress {
        /// The trick number, starting at 1.
        trick: usize,
        /// The seat leading this trick.
        leader: Seat,
    },
    /// A trick has just been resolved.
    TrickResolved {
        /// The trick number, starting at 1.
        trick: usize,
        /// The seat that won it.
        winner: Seat,
    },
    /// Every trick has been played.
    Finished,
}
