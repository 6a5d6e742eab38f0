//! Side to move, as chosen by the player.

use super::Color;
use std::fmt;
use std::str::FromStr;

/// Which side moves next. Always supplied by the caller, never read from the image.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// FEN letter
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    #[inline]
    pub const fn to_color(self) -> Color {
        match self {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid side to move {0:?}, expected 'w' or 'b'")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Side::White),
            "b" | "black" => Ok(Side::Black),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_side() {
        assert_eq!(" W ".parse::<Side>(), Ok(Side::White));
        assert_eq!("black".parse::<Side>(), Ok(Side::Black));
        assert!("x".parse::<Side>().is_err());
        assert!("".parse::<Side>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Side::White.to_string(), "w");
        assert_eq!(Side::Black.to_string(), "b");
        assert_eq!(Side::Black.to_color(), Color::Black);
        assert_eq!(Side::White.name(), "White");
    }
}
