//! Serializable responses for API layers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::repository::GameId;
use crate::core::{Board, Player};

/// Response to creating a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCreated {
    pub id: GameId,
}

/// Public view of a stored game.
///
/// Serializes with camelCase keys:
///
/// ```json
/// {"id":0,"status":{"1":6,...,"14":0},"gameFinished":false,"whoseTurn":"P1","winner":null}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub id: GameId,
    /// Pit index to stone count.
    pub status: BTreeMap<usize, u32>,
    pub game_finished: bool,
    pub whose_turn: Player,
    pub winner: Option<Player>,
}

impl GameStateView {
    /// Map a board into its public view.
    #[must_use]
    pub fn new(id: GameId, board: &Board) -> Self {
        Self {
            id,
            status: board.status(),
            game_finished: board.is_finished(),
            whose_turn: board.turn(),
            winner: board.winner(),
        }
    }
}
