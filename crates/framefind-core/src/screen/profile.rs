//! Catalog of supported client viewport resolutions.
//!
//! The client renders at a handful of fixed zoom levels of the
//! 1200x720 reference space. Detection tries these sizes in ascending
//! order, so the catalog ordering doubles as search priority.

use crate::geometry::Dimension;
use serde::{Deserialize, Serialize};

/// One supported client viewport resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenProfile {
    pub size: Dimension,
    /// Zoom level relative to the reference space, in percent
    pub zoom_percent: u32,
}

impl ScreenProfile {
    const fn new(width: u32, height: u32, zoom_percent: u32) -> Self {
        Self {
            size: Dimension::new(width, height),
            zoom_percent,
        }
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }
}

/// The coordinate space crop presets are expressed in (100% zoom).
pub const REFERENCE_SIZE: Dimension = Dimension::new(1200, 720);

/// Every viewport size the client can render at, smallest first.
pub const PROFILES: [ScreenProfile; 10] = [
    ScreenProfile::new(600, 360, 50),
    ScreenProfile::new(720, 432, 60),
    ScreenProfile::new(800, 480, 67),
    ScreenProfile::new(837, 502, 70),
    ScreenProfile::new(840, 504, 70),
    ScreenProfile::new(900, 540, 75),
    ScreenProfile::new(960, 576, 80),
    ScreenProfile::new(1074, 645, 90),
    ScreenProfile::new(1080, 648, 90),
    ScreenProfile::new(1200, 720, 100),
];
