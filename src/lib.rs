// Part of caissa, a chess rules engine. See LICENSE for license information.

//! A chess rules engine: board state, legality analysis and move generation.
//!
//! `caissa_core` has no notion of search, evaluation, or a protocol like
//! UCI — it answers exactly one question, "given this position, what is
//! legal, and what happens if I play this move", and nothing more. See
//! [`board::Board`] for the entry point.

pub mod board;
pub mod coverage;
pub mod error;
pub mod geometry;
pub mod movegen;
pub mod notation;
pub mod piece;
pub mod rays;

pub use board::{Board, RequestOutcome, Status};
pub use geometry::Square;
pub use movegen::Move;
pub use piece::{Cell, Piece, Side};
