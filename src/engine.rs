//! Move-search collaborator.

use crate::fen::Position;
use crate::types::Depth;
use crate::uci::{SearchReport, UciError, UciSession};
use std::io::{BufRead, Write};

/// Something that can suggest a move for a position.
pub trait Engine {
    fn search(&mut self, position: &Position, depth: Depth) -> Result<SearchReport, UciError>;
}

impl<R: BufRead, W: Write> Engine for UciSession<R, W> {
    fn search(&mut self, position: &Position, depth: Depth) -> Result<SearchReport, UciError> {
        self.search_fen(&position.to_string(), depth)
    }
}

impl<E: Engine + ?Sized> Engine for &mut E {
    fn search(&mut self, position: &Position, depth: Depth) -> Result<SearchReport, UciError> {
        (**self).search(position, depth)
    }
}
