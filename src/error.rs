//! Error types for game operations.
//!
//! None of these occur while a hand is driven in order. Each one means the
//! engine was asked to do something its invariants rule out.

use thiserror::Error;

use crate::player::Seat;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck ran out before every player had a full hand.
    #[error("deck exhausted before the deal was complete")]
    DeckExhausted,
}

/// Errors that can occur while playing a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing a trick.
    #[error("invalid game state for playing a trick")]
    InvalidState,
    /// A player was asked to play from an empty hand.
    #[error("{0} has no cards left to play")]
    EmptyHand(Seat),
    /// A trick record has no card for a seat that must have played.
    #[error("trick record is missing a play")]
    MissingPlay,
}

/// Any error raised while running a full hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A trick failed.
    #[error(transparent)]
    Play(#[from] PlayError),
}
