//! Pit index arithmetic.
//!
//! ## Index Layout
//!
//! Pits are numbered from 1. For `n` pits per player:
//! - `1..=n`: Player One's sowing pits
//! - `n + 1`: Player One's house
//! - `n + 2..=2n + 1`: Player Two's sowing pits
//! - `2n + 2`: Player Two's house
//!
//! Sowing runs in increasing index order and wraps from the last house back
//! to pit 1. Pit `p` faces pit `2n + 2 - p` across the board.
//!
//! ```
//! use kalah::core::{PitLayout, Player};
//!
//! let layout = PitLayout::new(6);
//!
//! assert_eq!(layout.house(Player::One), 7);
//! assert_eq!(layout.house(Player::Two), 14);
//! assert_eq!(layout.owner(9), Some(Player::Two));
//! assert_eq!(layout.opposite(5), 9);
//! assert_eq!(layout.next(14), 1);
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Index of the first pit on every board.
pub const FIRST_PIT: usize = 1;

/// Index arithmetic for a board with a given number of pits per player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitLayout {
    pits_per_player: usize,
}

impl PitLayout {
    /// Create a layout with `pits_per_player` sowing pits on each side.
    #[must_use]
    pub const fn new(pits_per_player: usize) -> Self {
        assert!(pits_per_player > 0, "Must have at least 1 pit per player");
        Self { pits_per_player }
    }

    /// Recover the layout of a board from its slot count.
    ///
    /// Returns `None` unless `slots` is even and leaves at least one sowing
    /// pit per player.
    #[must_use]
    pub const fn from_slot_count(slots: usize) -> Option<Self> {
        if slots < 4 || slots % 2 != 0 {
            return None;
        }
        Some(Self::new((slots - 2) / 2))
    }

    /// Sowing pits per player.
    #[must_use]
    pub const fn pits_per_player(self) -> usize {
        self.pits_per_player
    }

    /// Index of the first pit.
    #[must_use]
    pub const fn first_pit(self) -> usize {
        FIRST_PIT
    }

    /// Index of a player's house.
    #[must_use]
    pub const fn house(self, player: Player) -> usize {
        match player {
            Player::One => FIRST_PIT + self.pits_per_player,
            Player::Two => FIRST_PIT + 2 * self.pits_per_player + 1,
        }
    }

    /// Index of the last slot on the board (Player Two's house).
    #[must_use]
    pub const fn last_index(self) -> usize {
        self.house(Player::Two)
    }

    /// Number of slots on the board, houses included.
    #[must_use]
    pub const fn slot_count(self) -> usize {
        2 * self.pits_per_player + 2
    }

    /// Check whether an index is on the board.
    #[must_use]
    pub const fn contains(self, pit: usize) -> bool {
        pit >= FIRST_PIT && pit <= self.last_index()
    }

    /// Check whether an index is either player's house.
    #[must_use]
    pub const fn is_house(self, pit: usize) -> bool {
        pit == self.house(Player::One) || pit == self.house(Player::Two)
    }

    /// Owner of a sowing pit.
    ///
    /// Returns `None` for houses and for indices off the board.
    #[must_use]
    pub fn owner(self, pit: usize) -> Option<Player> {
        Player::all().find(|&player| self.sowing_pits(player).contains(&pit))
    }

    /// A player's sowing pits, in sowing order.
    #[must_use]
    pub fn sowing_pits(self, player: Player) -> RangeInclusive<usize> {
        let house = self.house(player);
        house - self.pits_per_player..=house - 1
    }

    /// Index sown after `pit`, wrapping from the last house to the first pit.
    #[must_use]
    pub const fn next(self, pit: usize) -> usize {
        if pit == self.last_index() {
            FIRST_PIT
        } else {
            pit + 1
        }
    }

    /// The sowing pit facing `pit` across the board.
    ///
    /// # Panics
    ///
    /// Houses have no opposite pit. Passing a house (or an index off the
    /// board) is a caller bug, not a player error.
    #[must_use]
    pub fn opposite(self, pit: usize) -> usize {
        assert!(
            self.owner(pit).is_some(),
            "Pit {pit} has no opposite pit: houses do not face anything"
        );
        // The sowing pits span FIRST_PIT..=last_index() - 1.
        FIRST_PIT + (self.last_index() - 1) - pit
    }

    /// Array offset of a pit index.
    pub(crate) const fn slot(self, pit: usize) -> usize {
        pit - FIRST_PIT
    }
}

impl Default for PitLayout {
    fn default() -> Self {
        Self::new(super::config::DEFAULT_PITS_PER_PLAYER)
    }
}
