//! Axis-aligned rectangle, the result type of viewport detection.

use super::Dimension;
use serde::{Deserialize, Serialize};

/// A rectangle in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size of this rectangle
    pub fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    /// Area in pixels
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Center point
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check whether the point lies inside this rectangle
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Map this rectangle from one coordinate space to another by
    /// proportional scaling. Used to project a reference-space region
    /// onto a viewport that is not the reference resolution.
    pub fn scaled_between(&self, from: Dimension, to: Dimension) -> Rect {
        if from == to {
            return *self;
        }
        let sx = to.width as f64 / from.width as f64;
        let sy = to.height as f64 / from.height as f64;
        Rect::new(
            (self.x as f64 * sx) as u32,
            (self.y as f64 * sy) as u32,
            (self.width as f64 * sx) as u32,
            (self.height as f64 * sy) as u32,
        )
    }

    /// Translate by an offset
    pub fn offset_by(&self, dx: u32, dy: u32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let rect = Rect::new(10, 20, 5, 5);
        assert!(rect.contains(10, 20));
        assert!(rect.contains(14, 24));
        assert!(!rect.contains(15, 24));
        assert!(!rect.contains(9, 20));
    }

    #[test]
    fn test_scaled_identity() {
        let rect = Rect::new(490, 154, 690, 547);
        let space = Dimension::new(1200, 720);
        assert_eq!(rect.scaled_between(space, space), rect);
    }

    #[test]
    fn test_scaled_half() {
        let rect = Rect::new(490, 154, 690, 547);
        let scaled = rect.scaled_between(Dimension::new(1200, 720), Dimension::new(600, 360));
        assert_eq!(scaled, Rect::new(245, 77, 345, 273));
    }
}
