//! The capture → recognize → normalize → search → replay loop.

use crate::actuator::{replay_move, Actuator};
use crate::capture::ScreenCapture;
use crate::config::AssistantConfig;
use crate::engine::Engine;
use crate::fen::{assemble_with, Position};
use crate::recognizer::{Credential, Recognizer, RecognizerError};
use crate::types::Side;
use crate::uci::EngineMove;
use std::fmt;
use tracing::{info, warn};

/// Result of one "play next move" request, shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    CaptureFailed,
    /// Nothing recognized and no board rectangle on screen
    BoardNotFound,
    /// A board rectangle was found but the recognizer returned nothing
    ExtractionFailed,
    EngineFailed(String),
    NoMove,
    Played(EngineMove),
    /// Best move known but no board rectangle to click on
    NotPlayed(EngineMove),
    /// Board located but the clicks failed
    ReplayFailed(EngineMove, String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::CaptureFailed => write!(f, "Screenshot failed!"),
            Status::BoardNotFound => write!(
                f,
                "Cannot find the Board.\nTry clearing the area around the chessboard."
            ),
            Status::ExtractionFailed => write!(f, "FEN extraction failed!"),
            Status::EngineFailed(e) => write!(f, "Engine error: {}", e),
            Status::NoMove => write!(f, "No valid move found!"),
            Status::Played(mv) => write!(f, "Best Move: {}\nMove Played: {}", mv, mv),
            Status::NotPlayed(mv) => write!(
                f,
                "Best move: {}\n\nThe board could not be located on screen, so the move was not played.",
                mv
            ),
            Status::ReplayFailed(mv, e) => write!(
                f,
                "Best move: {}\n\nThe move could not be played: {}",
                mv, e
            ),
        }
    }
}

/// Owns the collaborators for one playing session.
pub struct Assistant<C, R, E, A> {
    capture: C,
    recognizer: R,
    engine: E,
    actuator: A,
    credential: Credential,
    config: AssistantConfig,
    /// Position sent to the engine on the last request
    last_position: Option<Position>,
}

impl<C, R, E, A> Assistant<C, R, E, A>
where
    C: ScreenCapture,
    R: Recognizer,
    E: Engine,
    A: Actuator,
{
    pub fn new(capture: C, recognizer: R, engine: E, actuator: A, credential: Credential) -> Self {
        Self {
            capture,
            recognizer,
            engine,
            actuator,
            credential,
            config: AssistantConfig::default(),
            last_position: None,
        }
    }

    pub fn with_config(mut self, config: AssistantConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Swap in a refreshed credential
    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = credential;
    }

    pub fn last_position(&self) -> Option<&Position> {
        self.last_position.as_ref()
    }

    /// Find the best move for `side` on the current screen and play it.
    pub fn play_next_move(&mut self, side: Side) -> Status {
        self.last_position = None;

        let capture = match self.capture.capture() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "capture failed");
                return Status::CaptureFailed;
            }
        };

        // Service failures and "no board" look the same from here
        let raw = if self.credential.is_empty() {
            warn!(error = %RecognizerError::MissingCredential, "recognizer not called");
            String::new()
        } else {
            match self.recognizer.recognize(&capture.image, &self.credential) {
                Ok(raw) => raw.unwrap_or_default(),
                Err(e) => {
                    warn!(error = %e, "recognizer failed");
                    String::new()
                }
            }
        };

        let position = match assemble_with(&raw, side, &self.config.orientation) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, region = capture.region.is_some(), "no position");
                return match capture.region {
                    Some(_) => Status::ExtractionFailed,
                    None => Status::BoardNotFound,
                };
            }
        };

        if self.config.validate {
            if let Err(e) = position.validate() {
                warn!(error = %e, "position rejected by validator, searching anyway");
            }
        }

        let report = match self.engine.search(&position, self.config.depth) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "engine failed");
                self.last_position = Some(position);
                return Status::EngineFailed(e.to_string());
            }
        };
        self.last_position = Some(position);

        let Some(mv) = report.best_move else {
            return Status::NoMove;
        };
        info!(
            side = side.name(),
            best_move = %mv,
            score = %report.score.map(|s| s.pretty()).unwrap_or_default(),
            "engine answered"
        );

        let Some(region) = capture.region else {
            return Status::NotPlayed(mv);
        };
        match replay_move(&mut self.actuator, &region, mv, side, self.config.click_pause) {
            Ok(()) => Status::Played(mv),
            Err(e) => {
                warn!(error = %e, "replay failed");
                Status::ReplayFailed(mv, e.to_string())
            }
        }
    }
}
