//! Locates the client viewport inside a captured frame.
//!
//! The client draws a near-white one-pixel border around its viewport.
//! Detection binarizes the frame against white and walks candidate
//! top-left positions in raster order, testing each catalog profile
//! ascending, using border and interior bit patterns instead of
//! pixel-by-pixel comparison.

use super::config::DetectionConfig;
use crate::raster::{BitMatrix, HighNibble};
use crate::utils::ImageUtils;
use crate::Result;
use anyhow::Context;
use framefind_core::{Rect, ScreenProfile};
use serde::Serialize;

/// Outcome of one detection pass. Absence of a viewport is a normal
/// outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionResult {
    /// Interior of the detected viewport, border excluded
    pub viewport: Option<Rect>,
    /// The catalog profile that matched
    pub profile: Option<ScreenProfile>,
    pub stats: DetectionStats,
}

/// Detection statistics
#[derive(Debug, Clone, Serialize)]
pub struct DetectionStats {
    pub positions_scanned: u64,
    pub processing_time_ms: u64,
}

/// Viewport locator over a binarized frame
pub struct ScreenLocator {
    config: DetectionConfig,
}

impl ScreenLocator {
    /// Create a new locator
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Binarize an RGB frame against the border color and detect.
    ///
    /// Uses the high-nibble classifier so borders survive compression
    /// artifacts.
    pub fn detect_image(&self, image: &image::RgbImage) -> Result<DetectionResult> {
        let pixels = ImageUtils::rgb_to_pixels(image);
        let matrix = BitMatrix::with_classifier(
            &pixels,
            image.width(),
            image.height(),
            self.config.border_color,
            HighNibble,
        )
        .context("Failed to binarize frame")?;
        Ok(self.detect(&matrix))
    }

    /// Detect on an already-built matrix, with statistics
    pub fn detect(&self, matrix: &BitMatrix) -> DetectionResult {
        let start = std::time::Instant::now();
        let (found, positions) = self.scan(matrix);
        let (viewport, profile) = match found {
            Some((rect, profile)) => (Some(rect), Some(profile)),
            None => (None, None),
        };
        DetectionResult {
            viewport,
            profile,
            stats: DetectionStats {
                positions_scanned: positions,
                processing_time_ms: start.elapsed().as_millis() as u64,
            },
        }
    }

    /// Just the viewport rectangle, if any
    pub fn locate(&self, matrix: &BitMatrix) -> Option<Rect> {
        self.scan(matrix).0.map(|(rect, _)| rect)
    }

    fn scan(&self, m: &BitMatrix) -> (Option<(Rect, ScreenProfile)>, u64) {
        let smallest = match self.config.profiles.first() {
            Some(profile) => *profile,
            None => return (None, 0),
        };
        let x_max = m.width().saturating_sub(smallest.width());
        let y_max = m.height().saturating_sub(smallest.height());

        let mut positions = 0u64;
        for y in 0..y_max {
            for x in 0..x_max {
                positions += 1;
                for profile in &self.config.profiles {
                    let (w, h) = (profile.width(), profile.height());
                    // the border frame is one pixel wider than the
                    // viewport on every side
                    if !m.all_along_row(x, y, w + 2) {
                        break;
                    }
                    if !m.all_along_col(x, y, h + 2) {
                        break;
                    }
                    // an open bottom or right edge only rules out this
                    // profile; a larger one may still close its frame
                    if !m.all_along_row(x, y + h + 1, w + 2) {
                        continue;
                    }
                    if !m.all_along_col(x + w + 1, y, h + 2) {
                        continue;
                    }
                    // fully-white interior columns mean an unbroken
                    // white field, not a framed viewport
                    if m.all_along_col(x + 1, y + 1, h) {
                        continue;
                    }
                    if m.all_along_col(x + w, y + 1, h) {
                        continue;
                    }
                    return (Some((Rect::new(x + 1, y + 1, w, h), *profile)), positions);
                }
            }
        }
        (None, positions)
    }
}

impl Default for ScreenLocator {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}
