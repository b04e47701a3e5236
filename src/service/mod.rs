//! Game service for API layers.
//!
//! The rules engine knows nothing about identifiers or storage. This module
//! is the thin layer that does:
//! - `GameRepository`: stores boards by `GameId` (in memory by default)
//! - `GameService`: creates games and applies moves by identifier
//! - `GameStateView`: the serializable view returned after each move
//!
//! Transport (HTTP routes, status codes, localized messages) is left to the
//! embedding application.

mod game;
mod repository;
mod view;

pub use game::GameService;
pub use repository::{GameId, GameRepository, InMemoryRepository};
pub use view::{GameCreated, GameStateView};
