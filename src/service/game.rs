//! Game service: create games and apply moves by identifier.

use tracing::{debug, info};

use super::repository::{GameId, GameRepository, InMemoryRepository};
use super::view::{GameCreated, GameStateView};
use crate::core::{Board, BoardConfig};
use crate::error::ServiceError;

/// Entry point for API layers.
///
/// Loads a board, runs it through the rules engine, stores the result and
/// returns the public view. Move errors are passed through unchanged.
///
/// Mutating methods take `&mut self`, so moves on one service are
/// serialized by the borrow checker. Share a service across threads by
/// wrapping it in a mutex.
///
/// ```
/// use kalah::service::GameService;
///
/// let mut service = GameService::default();
/// let game = service.create_game();
///
/// let view = service.make_move(game.id, 3)?;
/// assert_eq!(view.status[&3], 0);
/// assert!(!view.game_finished);
/// # Ok::<(), kalah::ServiceError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GameService<R = InMemoryRepository> {
    repository: R,
    config: BoardConfig,
}

impl<R: GameRepository> GameService<R> {
    /// Create a service creating standard boards.
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, BoardConfig::default())
    }

    /// Create a service creating boards of the given size.
    pub fn with_config(repository: R, config: BoardConfig) -> Self {
        Self { repository, config }
    }

    /// Board size used for new games.
    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Get the underlying repository.
    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Start a new game and store it.
    pub fn create_game(&mut self) -> GameCreated {
        let id = self.repository.next_id();
        self.repository.save(id, Board::with_config(self.config));

        info!(%id, pits_per_player = self.config.pits_per_player(), "created game");
        GameCreated { id }
    }

    /// Apply a move to a stored game.
    ///
    /// The game is only stored again if the move was legal.
    pub fn make_move(&mut self, id: GameId, pit: usize) -> Result<GameStateView, ServiceError> {
        let mut board = self.load(id)?;
        board.make_move(pit)?;

        let view = GameStateView::new(id, &board);
        self.repository.save(id, board);
        Ok(view)
    }

    /// Get the current view of a stored game.
    pub fn game(&self, id: GameId) -> Result<GameStateView, ServiceError> {
        let board = self.load(id)?;
        Ok(GameStateView::new(id, &board))
    }

    fn load(&self, id: GameId) -> Result<Board, ServiceError> {
        self.repository.find(id).ok_or_else(|| {
            debug!(%id, "game not found");
            ServiceError::GameNotFound(id)
        })
    }
}

impl Default for GameService<InMemoryRepository> {
    fn default() -> Self {
        Self::new(InMemoryRepository::new())
    }
}
