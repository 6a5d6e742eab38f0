//! Normalize recognizer output from the command line.
//!
//! ```bash
//! chessassist "RNBKQBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbkqbnr w - - 0 1" w
//! echo "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b" | chessassist
//! ```
//!
//! With arguments, the last one is the side to move and the rest is the raw
//! recognizer output. Without arguments every stdin line is handled the same
//! way (last token = side). `CHESSASSIST_VALIDATE=1` rejects positions the
//! `chess` crate cannot load.

use anyhow::{bail, Context, Result};
use chessassist::config::AssistantConfig;
use chessassist::fen::{assemble_with, Position};
use chessassist::types::Side;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("info string error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AssistantConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        return run_stdin(&config);
    }
    if args.len() < 2 {
        bail!("usage: chessassist <recognizer output> <w|b>");
    }

    let (side_arg, raw) = args.split_last().context("missing side to move")?;
    let side: Side = side_arg.parse()?;
    println!("{}", normalize(&raw.join(" "), side, &config)?);
    Ok(())
}

/// Assemble and, when configured, check the position with the `chess` crate.
fn normalize(raw: &str, side: Side, config: &AssistantConfig) -> Result<Position> {
    let position = assemble_with(raw, side, &config.orientation)?;
    if config.validate {
        position.validate()?;
    }
    Ok(position)
}

/// One position per input line; bad lines are reported and skipped.
fn run_stdin(config: &AssistantConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match normalize_line(line, config) {
            Ok(fen) => {
                writeln!(out, "{}", fen)?;
                out.flush()?;
            }
            Err(e) => eprintln!("info string {}: {:#}", line, e),
        }
    }
    Ok(())
}

fn normalize_line(line: &str, config: &AssistantConfig) -> Result<String> {
    let (raw, side) = line
        .rsplit_once(char::is_whitespace)
        .context("expected '<recognizer output> <w|b>'")?;
    let side: Side = side.parse()?;
    Ok(normalize(raw, side, config)?.to_string())
}
