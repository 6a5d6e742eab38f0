//! Score reported by the engine in `info` lines.
//!
//! Engines report either a centipawn value or a mate distance in moves,
//! both from the point of view of the side to move.

use std::fmt;

/// An engine evaluation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Score {
    /// Centipawns for the side to move
    Cp(i32),
    /// Mate in N moves (negative when the side to move gets mated)
    Mate(i32),
}

impl Score {
    /// Build from the two tokens following `score` (`cp 35`, `mate -2`)
    pub fn from_tokens(kind: &str, value: &str) -> Option<Self> {
        let v = value.parse::<i32>().ok()?;
        match kind {
            "cp" => Some(Score::Cp(v)),
            "mate" => Some(Score::Mate(v)),
            _ => None,
        }
    }

    /// Human readable pawn units, e.g. "+0.35", "-1.20", "#3", "#-2"
    pub fn pretty(self) -> String {
        match self {
            Score::Cp(cp) => {
                let pawns = cp as f64 / 100.0;
                if pawns >= 0.0 {
                    format!("+{:.2}", pawns)
                } else {
                    format!("{:.2}", pawns)
                }
            }
            Score::Mate(n) => format!("#{}", n),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Cp(cp) => write!(f, "cp {}", cp),
            Score::Mate(n) => write!(f, "mate {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() {
        assert_eq!(Score::from_tokens("cp", "35"), Some(Score::Cp(35)));
        assert_eq!(Score::from_tokens("mate", "-2"), Some(Score::Mate(-2)));
        assert_eq!(Score::from_tokens("lowerbound", "2"), None);
        assert_eq!(Score::from_tokens("cp", "x"), None);
    }

    #[test]
    fn test_pretty() {
        assert_eq!(Score::Cp(35).pretty(), "+0.35");
        assert_eq!(Score::Cp(-120).pretty(), "-1.20");
        assert_eq!(Score::Mate(3).pretty(), "#3");
        assert_eq!(Score::Mate(-1).pretty(), "#-1");
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::Cp(0).to_string(), "cp 0");
        assert_eq!(Score::Mate(-4).to_string(), "mate -4");
    }
}
