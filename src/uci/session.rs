//! UCI conversation with an engine over a pair of streams.

use super::parser::{parse_engine_line, EngineLine};
use super::{SearchReport, UciError};
use crate::types::Depth;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Drives one engine through its stdin/stdout (or any stream pair).
///
/// Starting and stopping the engine process is left to the caller.
pub struct UciSession<R, W> {
    reader: R,
    writer: W,
    /// Engine name from "id name"
    name: Option<String>,
    /// Handshake completed
    ready: bool,
}

impl<R: BufRead, W: Write> UciSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            name: None,
            ready: false,
        }
    }

    /// Engine name reported during the handshake
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Send a command line to the engine
    fn send(&mut self, msg: &str) -> Result<(), UciError> {
        debug!("> {}", msg);
        writeln!(self.writer, "{}", msg)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read the next line, failing on end of stream
    fn recv(&mut self, waiting_for: &'static str) -> Result<EngineLine, UciError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(UciError::Closed(waiting_for));
        }
        debug!("< {}", line.trim_end());
        parse_engine_line(&line)
    }

    /// "uci" / "uciok" then "isready" / "readyok". Runs once per session.
    pub fn handshake(&mut self) -> Result<(), UciError> {
        if self.ready {
            return Ok(());
        }

        self.send("uci")?;
        loop {
            match self.recv("uciok")? {
                EngineLine::UciOk => break,
                EngineLine::Id { key, value } if key == "name" => self.name = Some(value),
                _ => {}
            }
        }

        self.send("isready")?;
        while self.recv("readyok")? != EngineLine::ReadyOk {}

        info!(engine = self.name.as_deref().unwrap_or("unknown"), "engine ready");
        self.ready = true;
        Ok(())
    }

    /// Search `fen` to a fixed depth and wait for the best move.
    pub fn search_fen(&mut self, fen: &str, depth: Depth) -> Result<SearchReport, UciError> {
        self.handshake()?;
        self.send(&format!("position fen {}", fen))?;
        self.send(&format!("go depth {}", depth.clamped()))?;

        let mut report = SearchReport::default();
        loop {
            match self.recv("bestmove")? {
                EngineLine::Info(info) => {
                    if info.depth.is_some() {
                        report.depth = info.depth;
                    }
                    if info.score.is_some() {
                        report.score = info.score;
                    }
                }
                EngineLine::BestMove { best, .. } => {
                    report.best_move = best;
                    return Ok(report);
                }
                _ => {}
            }
        }
    }

    /// Ask the engine to exit
    pub fn quit(&mut self) -> Result<(), UciError> {
        self.send("quit")
    }

    /// Hand back the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
