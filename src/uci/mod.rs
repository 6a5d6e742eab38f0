//! UCI (Universal Chess Interface) client side.
//!
//! The assistant drives an external engine: it sends `position fen` and
//! `go depth`, then reads `info`/`bestmove` lines back.
//! See: http://wbec-ridderkerk.nl/html/UCIProtocol.html

mod parser;
mod session;

pub use parser::{parse_engine_line, EngineLine, InfoLine};
pub use session::UciSession;

use crate::types::{Depth, Move, Piece, Score, Square};
use std::fmt;
use std::io;
use std::str::FromStr;

/// Errors talking to the engine
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    #[error("engine i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("engine closed its output before {0}")]
    Closed(&'static str),
    #[error("malformed move {0:?}")]
    MalformedMove(String),
}

/// A move as the engine prints it: origin, destination, optional promotion.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EngineMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl EngineMove {
    /// Parse `e2e4` / `e7e8q`. The null move (`0000`, `(none)`) yields `Ok(None)`.
    pub fn parse(s: &str) -> Result<Option<Self>, UciError> {
        let s = s.trim();
        if s == "0000" || s == "(none)" {
            return Ok(None);
        }
        s.parse().map(Some)
    }

    /// Convert to the `chess` crate's move type
    #[inline]
    pub fn to_chess_move(self) -> Move {
        Move::new(self.from, self.to, self.promotion)
    }
}

impl FromStr for EngineMove {
    type Err = UciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || UciError::MalformedMove(s.to_string());
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(malformed());
        }

        let from = Square::from_str(&s[0..2]).map_err(|_| malformed())?;
        let to = Square::from_str(&s[2..4]).map_err(|_| malformed())?;

        let promotion = match s.as_bytes().get(4) {
            None => None,
            Some(b'q') | Some(b'Q') => Some(Piece::Queen),
            Some(b'r') | Some(b'R') => Some(Piece::Rook),
            Some(b'b') | Some(b'B') => Some(Piece::Bishop),
            Some(b'n') | Some(b'N') => Some(Piece::Knight),
            Some(_) => return Err(malformed()),
        };

        Ok(Self { from, to, promotion })
    }
}

impl fmt::Display for EngineMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            let c = match promo {
                Piece::Queen => 'q',
                Piece::Rook => 'r',
                Piece::Bishop => 'b',
                Piece::Knight => 'n',
                Piece::Pawn => 'p',
                Piece::King => 'k',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// What one search produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// `None` when the engine had no legal move to offer
    pub best_move: Option<EngineMove>,
    /// Last score reported in an `info` line
    pub score: Option<Score>,
    /// Last completed depth reported in an `info` line
    pub depth: Option<Depth>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        let m: EngineMove = "e2e4".parse().unwrap();
        assert_eq!(m.from, Square::E2);
        assert_eq!(m.to, Square::E4);
        assert_eq!(m.promotion, None);
        assert_eq!(m.to_string(), "e2e4");
    }

    #[test]
    fn test_parse_promotion() {
        let m: EngineMove = "e7e8q".parse().unwrap();
        assert_eq!(m.promotion, Some(Piece::Queen));
        assert_eq!(m.to_string(), "e7e8q");
        assert_eq!(m.to_chess_move().get_promotion(), Some(Piece::Queen));
    }

    #[test]
    fn test_null_move() {
        assert_eq!(EngineMove::parse("0000").unwrap(), None);
        assert_eq!(EngineMove::parse("(none)").unwrap(), None);
    }

    #[test]
    fn test_malformed_moves() {
        for s in ["e2", "e2e9", "i1a1", "e7e8x", "e2e4e5", "é2e4"] {
            assert!(s.parse::<EngineMove>().is_err(), "{}", s);
        }
    }
}
