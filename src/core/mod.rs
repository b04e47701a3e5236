//! Core board types: players, configuration, pit layout, board state.
//!
//! Board size is never hardcoded here. Everything is derived from
//! `BoardConfig`, so the standard 6x6 game is just the default.

pub mod board;
pub mod config;
pub mod layout;
pub mod player;

pub use board::{Board, BoardSnapshot, Pits, INLINE_SLOTS};
pub use config::{BoardConfig, DEFAULT_INITIAL_STONES, DEFAULT_PITS_PER_PLAYER};
pub use layout::{PitLayout, FIRST_PIT};
pub use player::{Player, PlayerPair};
