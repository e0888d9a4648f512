//! Game configuration options.

use crate::player::Seat;

/// Configuration options for a hand.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bridgers::{GameOptions, Seat};
///
/// let options = GameOptions::default()
///     .with_dealer(Seat::South)
///     .with_opening_leader(Seat::West);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Seat that shuffles and deals. `None` picks one at random.
    pub dealer: Option<Seat>,
    /// Seat that leads the first trick. `None` picks one at random,
    /// independently of the dealer.
    pub opening_leader: Option<Seat>,
}

impl GameOptions {
    /// Fixes the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use bridgers::{GameOptions, Seat};
    ///
    /// let options = GameOptions::default().with_dealer(Seat::East);
    /// assert_eq!(options.dealer, Some(Seat::East));
    /// ```
    #[must_use]
    pub const fn with_dealer(mut self, dealer: Seat) -> Self {
        self.dealer = Some(dealer);
        self
    }

    /// Fixes the seat that leads the first trick.
    ///
    /// # Example
    ///
    /// ```
    /// use bridgers::{GameOptions, Seat};
    ///
    /// let options = GameOptions::default().with_opening_leader(Seat::North);
    /// assert_eq!(options.opening_leader, Some(Seat::North));
    /// ```
    #[must_use]
    pub const fn with_opening_leader(mut self, leader: Seat) -> Self {
        self.opening_leader = Some(leader);
        self
    }
}
