use serde::{Deserialize, Serialize};

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    /// Create a new dimension
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel count of a raster with these dimensions
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check whether a raster of this size can hold `other` in full
    pub fn can_hold(&self, other: Dimension) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}
