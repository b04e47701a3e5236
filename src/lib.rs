//! # kalah
//!
//! A rules engine for Kalah, the two-player Mancala game.
//!
//! ## Design Principles
//!
//! 1. **One Mutator**: `Board::make_move` is the only way state changes.
//!    Every rejected move leaves the board untouched.
//!
//! 2. **Size-Agnostic**: Pit indices are derived from `BoardConfig`.
//!    The standard 6 pits x 6 stones board is only the default.
//!
//! 3. **No I/O**: The engine never touches storage or the network.
//!    Callers own persistence, the `service` module shows the shape.
//!
//! ## Board Layout
//!
//! ```text
//!        13  12  11  10   9   8
//!   14                           7
//!         1   2   3   4   5   6
//! ```
//!
//! Player One owns pits 1-6 and house 7, Player Two owns pits 8-13 and
//! house 14. Stones are sown counter-clockwise in increasing index order.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, pit layout, board state
//! - `rules`: Move validation and application, game results
//! - `service`: Game identifiers, repositories, serializable views
//! - `error`: Config, move, snapshot and service errors
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod error;
pub mod rules;
pub mod service;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, BoardSnapshot, PitLayout, Player, PlayerPair,
};

pub use crate::rules::{GameResult, MoveReport};

pub use crate::error::{ConfigError, MoveError, ServiceError, SnapshotError};

pub use crate::service::{
    GameCreated, GameId, GameRepository, GameService, GameStateView, InMemoryRepository,
};
