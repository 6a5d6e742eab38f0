//! Board-state normalization.
//!
//! Turns the placement string a board recognizer returns into a canonical
//! position: rotated so white sits at the bottom, castling rights inferred
//! from the home ranks, and the side to move taken from the caller.
//!
//! # Architecture
//! - `rank`: run-length rank expansion
//! - `orientation`: flip decision strategies and the 180 degree rotation
//! - `castling`: castling availability from king/rook home squares
//! - `assemble`: the full `<board> <side> <castling> - 0 1` position
//!
//! Everything here is pure and safe to call from any thread.

mod assemble;
mod castling;
mod orientation;
mod rank;

pub use assemble::{assemble, assemble_with, Position};
pub use castling::{infer_castling, CastlingRights};
pub use orientation::{
    correct_orientation, flip_board, HalfCounts, KingOnHomeRank, Orientation, OrientationStrategy,
    ParseOrientationError, PieceDensity,
};
pub use rank::{cell_at, expand_rank, Cell};

/// Reasons normalization produces no usable position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("recognizer returned no board")]
    EmptyRecognition,
    #[error("invalid position {fen:?}: {reason}")]
    InvalidPosition { fen: String, reason: String },
}
