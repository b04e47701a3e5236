//! What a move did, and how a game ended.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One house strictly exceeds the other.
    Winner(Player),
    /// Equal houses.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Summary of an applied move.
///
/// The board already reflects everything listed here; the report only saves
/// callers from diffing states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The player who moved.
    pub player: Player,

    /// The pit the stones were lifted from.
    pub pit: usize,

    /// Stones lifted and sown.
    pub sown: u32,

    /// Last pit a stone was sown into.
    pub landing_pit: usize,

    /// Stones moved to the mover's house by a capture, the landing stone
    /// included. `None` when no capture happened.
    pub captured: Option<u32>,

    /// The move ended in the mover's own house and they move again.
    pub extra_turn: bool,

    /// Set when this move ended the game.
    pub result: Option<GameResult>,
}
