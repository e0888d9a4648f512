//! Card types, rank labels, and same-suit ordering.
//!
//! Ranks are plain numbers from 1 to 13. Under this engine's house rule the
//! Ace (1) is the lowest card of its suit and the King (13) the highest.

use alloc::borrow::Cow;
use alloc::format;
use core::cmp::Ordering;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in the order used to build a deck.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the suit's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every rank, lowest first.
pub const RANKS: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the display label for a rank.
///
/// Court cards and the Ace are named; every other rank is its numeral.
///
/// ```
/// use bridgers::card::rank_label;
///
/// assert_eq!(rank_label(1), "Ace");
/// assert_eq!(rank_label(7), "7");
/// assert_eq!(rank_label(13), "King");
/// ```
#[must_use]
pub fn rank_label(rank: u8) -> Cow<'static, str> {
    match rank {
        1 => Cow::Borrowed("Ace"),
        11 => Cow::Borrowed("Jack"),
        12 => Cow::Borrowed("Queen"),
        13 => Cow::Borrowed("King"),
        _ => Cow::Owned(format!("{rank}")),
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Decks built by
    /// [`Deck::build`](crate::deck::Deck::build) only ever hold ranks 1..=13.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates the card at `index` of the canonical deck enumeration.
    ///
    /// The suit cycles every 4 indices and the rank every 13; because the two
    /// periods are coprime, any 52 consecutive indices yield every card once.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            suit: Suit::ALL[index % Suit::ALL.len()],
            rank: RANKS[index % RANKS.len()],
        }
    }

    /// Returns the label of this card's rank.
    #[must_use]
    pub fn rank_label(&self) -> Cow<'static, str> {
        rank_label(self.rank)
    }

    /// Compares two cards of the same suit by rank.
    ///
    /// Returns `None` when the suits differ: a card of another suit never
    /// contests a trick, so it has no order relative to this one.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        (self.suit == other.suit).then(|| self.rank.cmp(&other.rank))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_label(), self.suit)
    }
}
