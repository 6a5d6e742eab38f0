//! Search depth requested from the engine.

use std::fmt;

/// Deepest search the assistant will ask for
pub const MAX_DEPTH: i32 = 128;

/// Depth used when nothing else is configured
pub const DEFAULT_DEPTH: i32 = 15;

/// Search depth (in plies) passed to `go depth`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct Depth(pub i32);

impl Depth {
    pub const ONE: Depth = Depth(1);
    pub const MAX: Depth = Depth(MAX_DEPTH);

    #[inline]
    pub const fn new(d: i32) -> Self {
        Depth(d)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Clamp into the range an engine accepts (1..=MAX_DEPTH)
    #[inline]
    pub fn clamped(self) -> Self {
        Depth(self.0.clamp(1, MAX_DEPTH))
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth(DEFAULT_DEPTH)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
