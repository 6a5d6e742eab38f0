//! Chess playing assistant.
//!
//! Reads a chessboard off the screen through an external recognizer,
//! normalizes the recognized position, asks a UCI engine for the best move
//! and replays it with pointer clicks.
//!
//! The heart of the crate is [`fen`]: a pure normalizer that fixes board
//! orientation and infers castling rights from a raw placement string. The
//! other modules define the collaborator seams around it.

pub mod actuator;
pub mod assistant;
pub mod capture;
pub mod config;
pub mod engine;
pub mod fen;
pub mod recognizer;
pub mod types;
pub mod uci;

pub use assistant::{Assistant, Status};
pub use config::AssistantConfig;
pub use fen::{assemble, NormalizeError, Position};
pub use types::Side;
