//! Engine output parser.

use super::{EngineMove, UciError};
use crate::types::{Depth, Score};

/// Fields of an `info` line the assistant cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoLine {
    pub depth: Option<Depth>,
    pub score: Option<Score>,
    /// Principal variation as raw move text
    pub pv: Vec<String>,
}

/// Parsed engine output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineLine {
    /// "id name X" / "id author Y"
    Id { key: String, value: String },
    /// "uciok" - handshake finished
    UciOk,
    /// "readyok" - answer to "isready"
    ReadyOk,
    /// "info ..." - search progress
    Info(InfoLine),
    /// "bestmove <move> [ponder <move>]"
    BestMove {
        best: Option<EngineMove>,
        ponder: Option<EngineMove>,
    },
    /// Anything else (options, copyright banners, blank lines)
    Unknown(String),
}

/// Parse one line of engine output.
///
/// Only a `bestmove` line with an unreadable move is an error; unrecognized
/// lines come back as [`EngineLine::Unknown`].
pub fn parse_engine_line(line: &str) -> Result<EngineLine, UciError> {
    let line = line.trim();
    let mut parts = line.split_whitespace();

    let parsed = match parts.next() {
        Some("id") => {
            let key = parts.next().unwrap_or_default().to_string();
            let value = parts.collect::<Vec<_>>().join(" ");
            EngineLine::Id { key, value }
        }
        Some("uciok") => EngineLine::UciOk,
        Some("readyok") => EngineLine::ReadyOk,
        Some("info") => EngineLine::Info(parse_info(&mut parts)),
        Some("bestmove") => parse_bestmove(&mut parts)?,
        _ => EngineLine::Unknown(line.to_string()),
    };
    Ok(parsed)
}

fn parse_info<'a>(parts: &mut impl Iterator<Item = &'a str>) -> InfoLine {
    let mut info = InfoLine::default();

    let tokens: Vec<&str> = parts.collect();
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                if let Some(d) = tokens.get(i).and_then(|t| t.parse::<i32>().ok()) {
                    info.depth = Some(Depth::new(d));
                }
            }
            "score" => {
                if let (Some(kind), Some(value)) = (tokens.get(i + 1), tokens.get(i + 2)) {
                    info.score = Score::from_tokens(kind, value);
                }
                i += 2;
            }
            "pv" => {
                info.pv = tokens[i + 1..].iter().map(|t| t.to_string()).collect();
                break;
            }
            // Free text until end of line
            "string" => break,
            _ => {}
        }
        i += 1;
    }

    info
}

fn parse_bestmove<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<EngineLine, UciError> {
    let best = match parts.next() {
        Some(m) => EngineMove::parse(m)?,
        None => None,
    };

    let ponder = match (parts.next(), parts.next()) {
        (Some("ponder"), Some(m)) => EngineMove::parse(m).ok().flatten(),
        _ => None,
    };

    Ok(EngineLine::BestMove { best, ponder })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_handshake_lines() {
        assert_eq!(parse_engine_line("uciok").unwrap(), EngineLine::UciOk);
        assert_eq!(parse_engine_line("readyok\r").unwrap(), EngineLine::ReadyOk);
        assert_eq!(
            parse_engine_line("id name Stockfish 16").unwrap(),
            EngineLine::Id { key: "name".into(), value: "Stockfish 16".into() }
        );
    }

    #[test]
    fn test_info_line() {
        let line = "info depth 15 seldepth 21 multipv 1 score cp 34 nodes 412 nps 9000 pv e2e4 e7e5 g1f3";
        match parse_engine_line(line).unwrap() {
            EngineLine::Info(info) => {
                assert_eq!(info.depth, Some(Depth::new(15)));
                assert_eq!(info.score, Some(Score::Cp(34)));
                assert_eq!(info.pv, vec!["e2e4", "e7e5", "g1f3"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_info_mate_and_bound() {
        match parse_engine_line("info depth 9 score mate -3 upperbound nodes 10").unwrap() {
            EngineLine::Info(info) => {
                assert_eq!(info.score, Some(Score::Mate(-3)));
                assert!(info.pv.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_info_string_ignored() {
        match parse_engine_line("info string depth 99 NNUE enabled").unwrap() {
            EngineLine::Info(info) => assert_eq!(info, InfoLine::default()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bestmove() {
        match parse_engine_line("bestmove e2e4 ponder e7e5").unwrap() {
            EngineLine::BestMove { best, ponder } => {
                assert_eq!(best.map(|m| m.to), Some(Square::E4));
                assert_eq!(ponder.map(|m| m.from), Some(Square::E7));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            parse_engine_line("bestmove (none)").unwrap(),
            EngineLine::BestMove { best: None, ponder: None }
        );
        assert!(parse_engine_line("bestmove zz").is_err());
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            parse_engine_line("option name Hash type spin").unwrap(),
            EngineLine::Unknown("option name Hash type spin".into())
        );
    }
}
