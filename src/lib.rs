//! A four-player trick-taking card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays out one hand: it builds a
//! 52-card deck, deals 13 cards to each of North, East, South and West, and
//! runs 13 tricks where every player must follow the led suit when able.
//! Aces rank lowest and Kings highest.
//!
//! # Example
//!
//! ```
//! use bridgers::{Game, GameEvent, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut winners = Vec::new();
//! game.play_hand(&mut |event: &GameEvent| {
//!     if let GameEvent::TrickWon { winner, .. } = event {
//!         winners.push(*winner);
//!     }
//! })
//! .unwrap();
//!
//! assert_eq!(game.state(), GameState::Finished);
//! assert_eq!(winners.len(), 13);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod trick;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, Suit, rank_label};
pub use deck::Deck;
pub use error::{DealError, GameError, PlayError};
pub use event::{EventSink, GameEvent};
pub use game::{Game, GameState};
pub use hand::{HAND_SIZE, Hand};
pub use options::GameOptions;
pub use player::{PLAYER_COUNT, Player, Seat, deal};
pub use trick::{TRICKS_PER_HAND, Trick, resolve_trick};
