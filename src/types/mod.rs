//! Core types shared by the normalizer, the engine protocol and the replay layer.
//!
//! # Design Principles
//! - Re-export `chess` crate types as the canonical board/move/square types
//! - Define assistant-specific types (`Side`, `Depth`, `Score`) on top of them

mod depth;
mod score;
mod side;

pub use depth::{Depth, DEFAULT_DEPTH, MAX_DEPTH};
pub use score::Score;
pub use side::{ParseSideError, Side};

// Re-export chess crate types as canonical types
pub use chess::{
    Board,
    ChessMove as Move,
    Square,
    Piece,
    Color,
};

/// Piece letters used in the placement field, white first.
pub const WHITE_PIECES: [char; 6] = ['K', 'Q', 'R', 'B', 'N', 'P'];
pub const BLACK_PIECES: [char; 6] = ['k', 'q', 'r', 'b', 'n', 'p'];

/// Number of files (and ranks) on the board
pub const BOARD_SIZE: usize = 8;

/// Owner of a piece letter, if it is one of the twelve piece symbols.
#[inline]
pub fn piece_color(symbol: char) -> Option<Color> {
    if WHITE_PIECES.contains(&symbol) {
        Some(Color::White)
    } else if BLACK_PIECES.contains(&symbol) {
        Some(Color::Black)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_color() {
        assert_eq!(piece_color('K'), Some(Color::White));
        assert_eq!(piece_color('p'), Some(Color::Black));
        assert_eq!(piece_color('3'), None);
        assert_eq!(piece_color('x'), None);
    }
}
