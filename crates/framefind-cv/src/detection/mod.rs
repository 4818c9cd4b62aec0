//! High-level viewport detection module

pub mod config;
pub mod locator;

pub use config::DetectionConfig;
pub use locator::{DetectionResult, DetectionStats, ScreenLocator};
