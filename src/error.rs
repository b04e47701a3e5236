use crate::core::Player;
use crate::service::GameId;

/// Reasons a move is rejected.
///
/// All variants are validation failures: the board is left untouched and the
/// caller decides how to report them. Checks run in declaration order and the
/// first failing one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is already finished")]
    GameFinished,

    #[error("pit {pit} is not on the board")]
    PitOutOfBounds { pit: usize },

    #[error("pit {pit} is a house and cannot be moved")]
    CantMoveHouse { pit: usize },

    #[error("pit {pit} belongs to {owner}")]
    NotYourPit { pit: usize, owner: Player },

    #[error("pit {pit} is empty")]
    EmptyPit { pit: usize },
}

/// Reasons a board size is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Must have at least 1 pit per player")]
    NoPits,

    #[error("Must start with at least 1 stone per pit")]
    NoStones,

    #[error("{pits_per_player} pits of {initial_stones} stones per player exceed {} stones", u32::MAX)]
    TooManyStones {
        pits_per_player: usize,
        initial_stones: u32,
    },
}

/// Reasons a stored board cannot be restored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("a board needs an even number of at least 4 slots, got {0}")]
    InvalidSlotCount(usize),

    #[error("board holds more than {} stones", u32::MAX)]
    TooManyStones,

    #[error("unfinished board has a side with no stones left to move")]
    ExhaustedSideNotFinished,

    #[error("finished board still has stones in sowing pits")]
    StonesLeftAfterFinish,

    #[error("unfinished board cannot have a winner")]
    WinnerBeforeFinish,

    #[error("recorded winner {recorded:?} disagrees with house totals (expected {expected:?})")]
    WinnerMismatch {
        recorded: Option<Player>,
        expected: Option<Player>,
    },
}

/// Errors surfaced by [`GameService`](crate::service::GameService).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("game {0} does not exist")]
    GameNotFound(GameId),

    #[error(transparent)]
    Move(#[from] MoveError),
}
