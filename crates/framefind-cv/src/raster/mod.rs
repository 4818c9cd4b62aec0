//! Bit-packed raster representation and range queries

pub mod classify;
pub mod mask;
pub mod matrix;

pub use classify::{ExactColor, HighNibble};
pub use matrix::{BitMatrix, RasterError};
