//! Kalah rules.
//!
//! The rules are implemented directly on [`Board`](crate::core::Board):
//! - `make_move` validates and applies a move
//! - `validate_move` / `legal_moves` answer legality without mutating
//! - `outcome` reports how a finished game ended
//!
//! [`MoveReport`] summarizes what a successful move did.

pub mod engine;
pub mod outcome;

pub use outcome::{GameResult, MoveReport};
