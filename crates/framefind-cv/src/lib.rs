//! Framefind binary-raster engine
//!
//! Converts a captured frame into a dual bit-packed representation and
//! uses it to locate the game client's viewport inside a screenshot.

pub mod detection;
pub mod raster;
pub mod utils;

// Re-export commonly used types
pub use detection::{DetectionConfig, DetectionResult, ScreenLocator};
pub use raster::{BitMatrix, RasterError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

/// Core traits for the raster engine
pub mod traits {
    /// Decides whether a pixel counts as foreground against the
    /// reference color. Both values are 24-bit RGB with the alpha
    /// byte already stripped.
    pub trait PixelClassifier {
        fn is_foreground(&self, reference: u32, pixel: u32) -> bool;
    }

    impl<F> PixelClassifier for F
    where
        F: Fn(u32, u32) -> bool,
    {
        fn is_foreground(&self, reference: u32, pixel: u32) -> bool {
            self(reference, pixel)
        }
    }
}
