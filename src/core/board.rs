//! Board state: pits, turn, and result.
//!
//! ## Board
//!
//! The board is the only mutable state in a game:
//! - Stone counts for every slot, houses included
//! - Whose turn it is
//! - Whether the game is over, and who won
//!
//! Pits live in a `SmallVec` sized for the standard 14-slot board, so the
//! common case never allocates. Other board sizes spill to the heap.
//!
//! ## BoardSnapshot
//!
//! Plain serializable form of a board. `Board` serializes through it and
//! validates it on the way back in, so a stored board can never come back
//! in a state the rules could not have produced structurally.
//!
//! Moves are applied by the rules engine, see [`crate::rules`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::BoardConfig;
use super::layout::PitLayout;
use super::player::{Player, PlayerPair};
use crate::error::SnapshotError;

/// Slots stored inline before spilling to the heap (the standard board).
pub const INLINE_SLOTS: usize = 14;

/// Stone counts for every slot, index 0 holding pit 1.
pub type Pits = SmallVec<[u32; INLINE_SLOTS]>;

/// A Kalah board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct Board {
    pub(crate) layout: PitLayout,
    pub(crate) pits: Pits,
    pub(crate) turn: Player,
    pub(crate) finished: bool,
    pub(crate) winner: Option<Player>,
}

impl Board {
    /// Create a standard 6-pit, 6-stone board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Create a board of the given size.
    ///
    /// Every sowing pit starts with `initial_stones`, both houses are empty,
    /// and Player One moves first.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        let layout = config.layout();
        let pits = (layout.first_pit()..=layout.last_index())
            .map(|pit| {
                if layout.is_house(pit) {
                    0
                } else {
                    config.initial_stones()
                }
            })
            .collect();

        Self {
            layout,
            pits,
            turn: Player::One,
            finished: false,
            winner: None,
        }
    }

    /// Restore an ongoing position.
    ///
    /// `pits` lists every slot in index order: Player One's pits, Player
    /// One's house, Player Two's pits, Player Two's house. The board size is
    /// taken from its length.
    ///
    /// ```
    /// use kalah::core::{Board, Player};
    ///
    /// let board = Board::from_pits(&[0, 1, 1, 1, 1, 8, 0, 1, 1, 1, 1, 1, 3, 0], Player::One)?;
    /// assert_eq!(board.pit(6), Some(8));
    /// # Ok::<(), kalah::SnapshotError>(())
    /// ```
    pub fn from_pits(pits: &[u32], turn: Player) -> Result<Self, SnapshotError> {
        Self::try_from(BoardSnapshot {
            pits: Pits::from_slice(pits),
            turn,
            finished: false,
            winner: None,
        })
    }

    /// Get the pit layout.
    #[must_use]
    pub fn layout(&self) -> PitLayout {
        self.layout
    }

    /// Stone counts for every slot. Index 0 holds pit 1.
    #[must_use]
    pub fn pits(&self) -> &[u32] {
        &self.pits
    }

    /// Stones in a pit, or `None` if the index is off the board.
    #[must_use]
    pub fn pit(&self, pit: usize) -> Option<u32> {
        self.layout
            .contains(pit)
            .then(|| self.pits[self.layout.slot(pit)])
    }

    /// Pit index to stone count, for wire formats keyed by index.
    #[must_use]
    pub fn status(&self) -> BTreeMap<usize, u32> {
        (self.layout.first_pit()..)
            .zip(self.pits.iter().copied())
            .collect()
    }

    /// Player allowed to move next.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Winner of a finished game. `None` while playing and on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Stones in a player's house.
    #[must_use]
    pub fn house(&self, player: Player) -> u32 {
        self.stones(self.layout.house(player))
    }

    /// Both house totals.
    #[must_use]
    pub fn houses(&self) -> PlayerPair<u32> {
        PlayerPair::new(|player| self.house(player))
    }

    /// Stones still in a player's sowing pits.
    #[must_use]
    pub fn side_stones(&self, player: Player) -> u32 {
        self.layout
            .sowing_pits(player)
            .map(|pit| self.stones(pit))
            .sum()
    }

    /// Stones on the whole board.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Player with the strictly larger house, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        let houses = self.houses();
        match houses[Player::One].cmp(&houses[Player::Two]) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Plain serializable copy of this board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self.clone())
    }

    // === Pit mutation (rules engine only) ===

    pub(crate) fn stones(&self, pit: usize) -> u32 {
        self.pits[self.layout.slot(pit)]
    }

    /// Empty a pit and return what it held.
    pub(crate) fn take(&mut self, pit: usize) -> u32 {
        std::mem::take(&mut self.pits[self.layout.slot(pit)])
    }

    pub(crate) fn add(&mut self, pit: usize, stones: u32) {
        self.pits[self.layout.slot(pit)] += stones;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable form of a [`Board`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Every slot in index order, starting at pit 1.
    pub pits: Pits,
    pub turn: Player,
    pub finished: bool,
    pub winner: Option<Player>,
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        Self {
            pits: board.pits,
            turn: board.turn,
            finished: board.finished,
            winner: board.winner,
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = SnapshotError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let layout = PitLayout::from_slot_count(snapshot.pits.len())
            .ok_or(SnapshotError::InvalidSlotCount(snapshot.pits.len()))?;

        // Stones are conserved by every move, so a total that fits in `u32`
        // keeps every later house addition in range.
        snapshot
            .pits
            .iter()
            .try_fold(0u32, |total, &stones| total.checked_add(stones))
            .ok_or(SnapshotError::TooManyStones)?;

        let board = Self {
            layout,
            pits: snapshot.pits,
            turn: snapshot.turn,
            finished: snapshot.finished,
            winner: snapshot.winner,
        };

        if !board.finished {
            if board.winner.is_some() {
                return Err(SnapshotError::WinnerBeforeFinish);
            }
            // The engine ends the game as soon as either side runs dry.
            if Player::all().any(|player| board.side_stones(player) == 0) {
                return Err(SnapshotError::ExhaustedSideNotFinished);
            }
            return Ok(board);
        }

        if Player::all().any(|player| board.side_stones(player) > 0) {
            return Err(SnapshotError::StonesLeftAfterFinish);
        }
        let expected = board.leader();
        if board.winner != expected {
            return Err(SnapshotError::WinnerMismatch {
                recorded: board.winner,
                expected,
            });
        }

        Ok(board)
    }
}
