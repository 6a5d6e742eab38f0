//! Replaying an engine move as two pointer clicks on the board.

use crate::capture::BoardRegion;
use crate::types::{Side, Square};
use crate::uci::EngineMove;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ActuatorError {
    #[error("pointer input failed: {0}")]
    Input(String),
}

/// Simulated pointer input.
pub trait Actuator {
    fn click(&mut self, x: u32, y: u32) -> Result<(), ActuatorError>;

    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<A: Actuator + ?Sized> Actuator for &mut A {
    fn click(&mut self, x: u32, y: u32) -> Result<(), ActuatorError> {
        (**self).click(x, y)
    }

    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration)
    }
}

/// Screen cell (col, row) of `square`, counted from the top-left corner.
///
/// The player's own pieces are drawn at the bottom, so playing black turns
/// the board around.
pub fn board_cell(square: Square, side: Side) -> (u8, u8) {
    let file = square.get_file().to_index() as u8;
    let rank = square.get_rank().to_index() as u8;
    match side {
        Side::White => (file, 7 - rank),
        Side::Black => (7 - file, rank),
    }
}

/// Click the origin square, wait, then click the destination square.
pub fn replay_move<A: Actuator + ?Sized>(
    actuator: &mut A,
    region: &BoardRegion,
    mv: EngineMove,
    side: Side,
    pause: Duration,
) -> Result<(), ActuatorError> {
    let (from_col, from_row) = board_cell(mv.from, side);
    let (to_col, to_row) = board_cell(mv.to, side);
    let (fx, fy) = region.square_center(from_col, from_row);
    let (tx, ty) = region.square_center(to_col, to_row);

    debug!(%mv, from = ?(fx, fy), to = ?(tx, ty), "replaying move");
    actuator.click(fx, fy)?;
    actuator.pause(pause);
    actuator.click(tx, ty)?;
    Ok(())
}
