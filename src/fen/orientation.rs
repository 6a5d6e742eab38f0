//! Orientation correction for recognized boards.
//!
//! The recognizer reports ranks top-to-bottom as it saw them on screen, so a
//! board photographed from black's side comes back rotated by 180 degrees.
//! Deciding *whether* to rotate is a heuristic and lives behind
//! [`OrientationStrategy`]; the rotation itself ([`flip_board`]) is exact.

use crate::types::{piece_color, Color, BOARD_SIZE};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Decides whether a board with exactly eight ranks needs rotating.
pub trait OrientationStrategy {
    /// `ranks` is ordered top (index 0) to bottom (index 7)
    fn needs_flip(&self, ranks: &[&str]) -> bool;
}

/// Compare where each side's material sits.
///
/// Flips when white has more pieces in the top half than in the bottom half,
/// or black has more in the bottom half than in the top half. Assumes each
/// side's material mostly stays on its own half, which can misfire in
/// endgames with far-advanced pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceDensity;

/// Flip unless the bottom rank holds the white king.
///
/// Fails once the king has left its home rank.
#[derive(Debug, Clone, Copy, Default)]
pub struct KingOnHomeRank;

/// Material counts per half of the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfCounts {
    pub white_top: usize,
    pub white_bottom: usize,
    pub black_top: usize,
    pub black_bottom: usize,
}

impl HalfCounts {
    pub fn count(ranks: &[&str]) -> Self {
        let half = ranks.len() / 2;
        let mut counts = HalfCounts::default();
        for (i, rank) in ranks.iter().enumerate() {
            let top = i < half;
            for c in rank.chars() {
                match (piece_color(c), top) {
                    (Some(Color::White), true) => counts.white_top += 1,
                    (Some(Color::White), false) => counts.white_bottom += 1,
                    (Some(Color::Black), true) => counts.black_top += 1,
                    (Some(Color::Black), false) => counts.black_bottom += 1,
                    (None, _) => {}
                }
            }
        }
        counts
    }
}

impl OrientationStrategy for PieceDensity {
    fn needs_flip(&self, ranks: &[&str]) -> bool {
        let counts = HalfCounts::count(ranks);
        let flip = counts.white_top > counts.white_bottom || counts.black_bottom > counts.black_top;
        debug!(
            white_top = counts.white_top,
            white_bottom = counts.white_bottom,
            black_top = counts.black_top,
            black_bottom = counts.black_bottom,
            flip,
            "piece density"
        );
        flip
    }
}

impl OrientationStrategy for KingOnHomeRank {
    fn needs_flip(&self, ranks: &[&str]) -> bool {
        ranks.last().map_or(false, |bottom| !bottom.contains('K'))
    }
}

/// Runtime choice between the available strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    PieceDensity,
    KingOnHomeRank,
}

impl OrientationStrategy for Orientation {
    fn needs_flip(&self, ranks: &[&str]) -> bool {
        match self {
            Orientation::PieceDensity => PieceDensity.needs_flip(ranks),
            Orientation::KingOnHomeRank => KingOnHomeRank.needs_flip(ranks),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown orientation strategy {0:?}, expected 'density' or 'king'")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "density" | "piece-density" => Ok(Orientation::PieceDensity),
            "king" | "king-on-home-rank" => Ok(Orientation::KingOnHomeRank),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::PieceDensity => write!(f, "density"),
            Orientation::KingOnHomeRank => write!(f, "king"),
        }
    }
}

/// Rotate a placement string by 180 degrees: rank order and square order
/// within each rank are both reversed.
pub fn flip_board(board: &str) -> String {
    board
        .split('/')
        .rev()
        .map(|rank| rank.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join("/")
}

/// Put `board` into canonical orientation (rank 8 first, white at the bottom).
///
/// Boards that do not split into exactly eight ranks are returned unchanged.
pub fn correct_orientation<S: OrientationStrategy + ?Sized>(board: &str, strategy: &S) -> String {
    let ranks: Vec<&str> = board.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        debug!(ranks = ranks.len(), "board shape not 8 ranks, orientation left as is");
        return board.to_string();
    }
    if strategy.needs_flip(&ranks) {
        debug!(board, "rotating board");
        flip_board(board)
    } else {
        board.to_string()
    }
}
