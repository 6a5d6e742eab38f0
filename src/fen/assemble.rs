//! Build a complete position from raw recognizer output.

use super::castling::{infer_castling, CastlingRights};
use super::orientation::{correct_orientation, Orientation, OrientationStrategy};
use super::NormalizeError;
use crate::types::{Board, Side};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// A normalized snapshot, ready for the engine.
///
/// En passant, halfmove clock and fullmove number are fixed placeholders:
/// a single screenshot carries no game history.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    board: String,
    side: Side,
    castling: CastlingRights,
}

impl Position {
    /// Placement field in canonical orientation
    pub fn board(&self) -> &str {
        &self.board
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Check the position with the `chess` crate's FEN parser.
    pub fn validate(&self) -> Result<Board, NormalizeError> {
        let fen = self.to_string();
        Board::from_str(&fen).map_err(|e| NormalizeError::InvalidPosition {
            fen,
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} - 0 1", self.board, self.side, self.castling)
    }
}

/// Assemble with the default piece-density orientation check.
pub fn assemble(raw: &str, side: Side) -> Result<Position, NormalizeError> {
    assemble_with(raw, side, &Orientation::default())
}

/// Assemble a [`Position`] from recognizer output.
///
/// Only the first whitespace-delimited token is kept; whatever side, castling
/// or counters the recognizer appended are discarded.
pub fn assemble_with<S: OrientationStrategy + ?Sized>(
    raw: &str,
    side: Side,
    strategy: &S,
) -> Result<Position, NormalizeError> {
    let placement = raw
        .split_whitespace()
        .next()
        .ok_or(NormalizeError::EmptyRecognition)?;

    let board = correct_orientation(placement, strategy);
    let castling = infer_castling(&board);
    let position = Position { board, side, castling };
    info!(fen = %position, "assembled position");
    Ok(position)
}
