//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Kalah is strictly a two-player game, so players are a closed enum rather
//! than an index. Which pits and which house a player owns is answered by
//! [`PitLayout`](super::PitLayout), always in terms of a `Player`.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `Player`, with no bounds to check.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One of the two Kalah players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first. Owns the low half of the board.
    #[serde(rename = "P1")]
    One,
    /// Owns the high half of the board, up to and including the last house.
    #[serde(rename = "P2")]
    Two,
}

impl Player {
    /// Get the opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Get the 0-based index of this player.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Get the 1-based player number used in messages and bindings.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Iterate over both players, `One` first.
    ///
    /// ```
    /// use kalah::core::Player;
    ///
    /// let players: Vec<_> = Player::all().collect();
    /// assert_eq!(players, vec![Player::One, Player::Two]);
    /// ```
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::One, Player::Two].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// One value per player.
///
/// ## Example
///
/// ```
/// use kalah::core::{Player, PlayerPair};
///
/// let houses = PlayerPair::new(|player| u32::from(player.number()) * 10);
///
/// assert_eq!(houses[Player::One], 10);
/// assert_eq!(houses[Player::Two], 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Get a reference to a player's value.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}
