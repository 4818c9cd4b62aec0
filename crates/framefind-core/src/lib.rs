//! Client-screen domain model: geometry value types, the catalog of
//! known game client viewport resolutions, and named crop presets.

pub mod geometry;
pub mod screen;

pub use geometry::{Dimension, Rect};
pub use screen::{CutPreset, ScreenProfile, PROFILES, REFERENCE_SIZE};
