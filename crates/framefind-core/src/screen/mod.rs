//! Static knowledge about the game client's screen

pub mod cut;
pub mod profile;

pub use cut::CutPreset;
pub use profile::{ScreenProfile, PROFILES, REFERENCE_SIZE};
