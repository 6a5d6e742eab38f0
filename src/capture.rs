//! Screen capture collaborator and the detected board rectangle.

/// Smallest side length (pixels) accepted as an on-screen board
pub const MIN_BOARD_SIDE: u32 = 300;

/// Accepted width/height ratio for a board rectangle
const ASPECT_RANGE: (f64, f64) = (0.8, 1.2);

/// Screen rectangle covering the 8x8 board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BoardRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoardRegion {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Accept a bounding box only if it looks like a board: roughly square
    /// and larger than [`MIN_BOARD_SIDE`] on both sides.
    pub fn from_bounds(x: u32, y: u32, width: u32, height: u32) -> Option<Self> {
        if width <= MIN_BOARD_SIDE || height <= MIN_BOARD_SIDE {
            return None;
        }
        let aspect = width as f64 / height as f64;
        if aspect < ASPECT_RANGE.0 || aspect > ASPECT_RANGE.1 {
            return None;
        }
        Some(Self::new(x, y, width, height))
    }

    /// Pixel size of one square (integer division, as drawn)
    #[inline]
    pub const fn square_size(&self) -> (u32, u32) {
        (self.width / 8, self.height / 8)
    }

    /// Screen coordinates of the center of the cell at (`col`, `row`), both
    /// counted from the top-left corner of the region.
    pub fn square_center(&self, col: u8, row: u8) -> (u32, u32) {
        let (sw, sh) = self.square_size();
        (
            self.x.saturating_add((col as u32).saturating_mul(sw)).saturating_add(sw / 2),
            self.y.saturating_add((row as u32).saturating_mul(sh)).saturating_add(sh / 2),
        )
    }
}

/// One screenshot plus the board rectangle found in it, if any.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    /// Encoded image bytes handed to the recognizer
    pub image: Vec<u8>,
    pub region: Option<BoardRegion>,
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("no display available")]
    NoDisplay,
    #[error("screenshot failed: {0}")]
    Failed(String),
}

/// Takes screenshots and locates the board in them.
pub trait ScreenCapture {
    fn capture(&mut self) -> Result<Capture, CaptureError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounds() {
        assert!(BoardRegion::from_bounds(0, 0, 640, 640).is_some());
        assert!(BoardRegion::from_bounds(0, 0, 640, 560).is_some());
        // Too small
        assert!(BoardRegion::from_bounds(0, 0, 300, 300).is_none());
        // Too wide
        assert!(BoardRegion::from_bounds(0, 0, 900, 500).is_none());
    }

    #[test]
    fn test_square_center() {
        let region = BoardRegion::new(100, 50, 800, 800);
        assert_eq!(region.square_size(), (100, 100));
        assert_eq!(region.square_center(0, 0), (150, 100));
        assert_eq!(region.square_center(7, 7), (850, 800));
    }

    #[test]
    fn test_square_center_uneven_size() {
        // 805 / 8 = 100, remainder ignored
        let region = BoardRegion::new(0, 0, 805, 805);
        assert_eq!(region.square_center(1, 2), (150, 250));
    }

    #[test]
    fn test_square_center_near_screen_edge() {
        // Bogus region near the coordinate limit clamps instead of overflowing
        let region = BoardRegion::new(u32::MAX - 10, u32::MAX - 10, 800, 800);
        assert_eq!(region.square_center(7, 7), (u32::MAX, u32::MAX));
        assert_eq!(region.square_center(0, 0), (u32::MAX, u32::MAX));
    }
}
