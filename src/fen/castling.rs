//! Castling availability inferred from piece placement.
//!
//! A single screenshot carries no history, so a right is granted whenever the
//! king and the matching rook stand on their home squares. A rook that left
//! and came back is indistinguishable from one that never moved.

use super::rank::{cell_at, expand_rank};
use crate::types::BOARD_SIZE;
use std::fmt;

const KING_FILE: usize = 4;
const KINGSIDE_ROOK_FILE: usize = 7;
const QUEENSIDE_ROOK_FILE: usize = 0;

/// Castling availability, rendered in the fixed `KQkq` order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.white_kingside || self.white_queenside || self.black_kingside || self.black_queenside)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let flags = [
            (self.white_kingside, 'K'),
            (self.white_queenside, 'Q'),
            (self.black_kingside, 'k'),
            (self.black_queenside, 'q'),
        ];
        for (set, c) in flags {
            if set {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// Rights for one side given its expanded home rank: (kingside, queenside)
///
/// A home rank shorter than eight squares grants that side nothing.
fn home_rank_rights(rank: &str, king: char, rook: char) -> (bool, bool) {
    let cells = expand_rank(rank);
    if cells.len() < BOARD_SIZE || cell_at(&cells, KING_FILE) != Some(king) {
        return (false, false);
    }
    (
        cell_at(&cells, KINGSIDE_ROOK_FILE) == Some(rook),
        cell_at(&cells, QUEENSIDE_ROOK_FILE) == Some(rook),
    )
}

/// Infer castling rights from a board already in canonical orientation.
///
/// Boards without exactly eight ranks get no rights at all.
pub fn infer_castling(board: &str) -> CastlingRights {
    let ranks: Vec<&str> = board.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return CastlingRights::NONE;
    }

    let (white_kingside, white_queenside) = home_rank_rights(ranks[BOARD_SIZE - 1], 'K', 'R');
    let (black_kingside, black_queenside) = home_rank_rights(ranks[0], 'k', 'r');

    CastlingRights {
        white_kingside,
        white_queenside,
        black_kingside,
        black_queenside,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let rights = infer_castling("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(rights, CastlingRights::ALL);
        assert_eq!(rights.to_string(), "KQkq");
    }

    #[test]
    fn test_order_for_subsets() {
        assert_eq!(infer_castling("4k2r/8/8/8/8/8/8/R3K3").to_string(), "Qk");
        assert_eq!(infer_castling("r3k3/8/8/8/8/8/8/4K2R").to_string(), "Kq");
        assert_eq!(infer_castling("r3k2r/8/8/8/8/8/8/4K3").to_string(), "kq");
    }

    #[test]
    fn test_king_gates_rights() {
        // Rooks untouched on a1/h1, king on f1
        let rights = infer_castling("r3k2r/8/8/8/8/8/8/R4K1R");
        assert!(!rights.white_kingside);
        assert!(!rights.white_queenside);
        assert_eq!(rights.to_string(), "kq");
    }

    #[test]
    fn test_no_rights_placeholder() {
        assert_eq!(infer_castling("8/8/4k3/8/8/4K3/8/8").to_string(), "-");
        assert_eq!(CastlingRights::default().to_string(), "-");
    }

    #[test]
    fn test_short_home_rank() {
        // Truncated rank: king on e1 and rook on a1, h1 missing
        assert_eq!(infer_castling("8/8/8/8/8/8/8/R3K").to_string(), "-");
        // Only the truncated side loses its rights
        assert_eq!(infer_castling("r3k/8/8/8/8/8/8/R3K2R").to_string(), "KQ");
    }

    #[test]
    fn test_malformed_shape() {
        assert_eq!(infer_castling("r3k2r/R3K2R"), CastlingRights::NONE);
        assert_eq!(infer_castling(""), CastlingRights::NONE);
    }
}
