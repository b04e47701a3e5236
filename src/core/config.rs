//! Board configuration.
//!
//! Two numbers shape a Kalah board: how many sowing pits each player has and
//! how many stones start in each of them. Everything else (slot count, house
//! positions, total stones) is derived, so the engine runs unchanged on any
//! board size.
//!
//! A config is validated whenever it is built, deserialized included: both
//! numbers are at least 1 and the whole board fits in `u32` stones.

use serde::{Deserialize, Serialize};

use super::layout::PitLayout;
use crate::error::ConfigError;

/// Sowing pits per player in standard Kalah.
pub const DEFAULT_PITS_PER_PLAYER: usize = 6;

/// Stones per sowing pit at the start of standard Kalah.
pub const DEFAULT_INITIAL_STONES: u32 = 6;

/// Size of a Kalah board.
///
/// ## Example
///
/// ```
/// use kalah::core::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.slot_count(), 14);
/// assert_eq!(config.total_stones(), 48);
///
/// let small = BoardConfig::default()
///     .with_pits_per_player(4)
///     .with_initial_stones(3);
/// assert_eq!(small.slot_count(), 10);
/// assert_eq!(small.total_stones(), 24);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    pits_per_player: usize,
    initial_stones: u32,
}

impl BoardConfig {
    /// Create a new board configuration.
    ///
    /// # Panics
    ///
    /// On sizes rejected by [`BoardConfig::try_new`].
    pub fn new(pits_per_player: usize, initial_stones: u32) -> Self {
        match Self::try_new(pits_per_player, initial_stones) {
            Ok(config) => config,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a new board configuration, rejecting empty or oversized boards.
    pub fn try_new(pits_per_player: usize, initial_stones: u32) -> Result<Self, ConfigError> {
        if pits_per_player == 0 {
            return Err(ConfigError::NoPits);
        }
        if initial_stones == 0 {
            return Err(ConfigError::NoStones);
        }
        if board_stones(pits_per_player, initial_stones).is_none() {
            return Err(ConfigError::TooManyStones {
                pits_per_player,
                initial_stones,
            });
        }

        Ok(Self {
            pits_per_player,
            initial_stones,
        })
    }

    /// Set the number of sowing pits per player.
    #[must_use]
    pub fn with_pits_per_player(self, pits: usize) -> Self {
        Self::new(pits, self.initial_stones)
    }

    /// Set the number of stones each sowing pit starts with.
    #[must_use]
    pub fn with_initial_stones(self, stones: u32) -> Self {
        Self::new(self.pits_per_player, stones)
    }

    /// Sowing pits per player (houses excluded).
    #[must_use]
    pub fn pits_per_player(&self) -> usize {
        self.pits_per_player
    }

    /// Stones placed in every sowing pit when a board is created.
    #[must_use]
    pub fn initial_stones(&self) -> u32 {
        self.initial_stones
    }

    /// Get the pit layout for this board size.
    #[must_use]
    pub fn layout(&self) -> PitLayout {
        PitLayout::new(self.pits_per_player)
    }

    /// Number of slots on the board, houses included.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.layout().slot_count()
    }

    /// Stones on the board for the whole game.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        // Checked on construction.
        board_stones(self.pits_per_player, self.initial_stones).unwrap_or(u32::MAX)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PITS_PER_PLAYER, DEFAULT_INITIAL_STONES)
    }
}

/// Unvalidated wire form of a [`BoardConfig`].
#[derive(Deserialize)]
struct RawBoardConfig {
    pits_per_player: usize,
    initial_stones: u32,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        Self::try_new(raw.pits_per_player, raw.initial_stones)
    }
}

/// Stones on both sides at the start, `None` if that overflows `u32`.
fn board_stones(pits_per_player: usize, initial_stones: u32) -> Option<u32> {
    u32::try_from(pits_per_player)
        .ok()?
        .checked_mul(2)?
        .checked_mul(initial_stones)
}
