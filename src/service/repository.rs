//! Board storage keyed by game identifier.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Board;

/// Opaque identifier of a stored game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where boards live between moves.
///
/// Implementations own identifier allocation and storage. The service
/// only ever stores boards that passed through the rules engine.
pub trait GameRepository {
    /// Allocate an identifier for a new game.
    fn next_id(&mut self) -> GameId;

    /// Load a game. Returns `None` if no game has this identifier.
    fn find(&self, id: GameId) -> Option<Board>;

    /// Store a game, replacing any previous board under the same id.
    fn save(&mut self, id: GameId, board: Board);
}

/// Process-local repository backed by a hash map.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    games: FxHashMap<GameId, Board>,
    next_id: u64,
}

impl InMemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check if no games are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Delete a game, returning its last stored board.
    pub fn remove(&mut self, id: GameId) -> Option<Board> {
        self.games.remove(&id)
    }
}

impl GameRepository for InMemoryRepository {
    fn next_id(&mut self) -> GameId {
        let id = GameId(self.next_id);
        self.next_id += 1;
        id
    }

    fn find(&self, id: GameId) -> Option<Board> {
        self.games.get(&id).cloned()
    }

    fn save(&mut self, id: GameId, board: Board) {
        self.games.insert(id, board);
    }
}
