//! Named crop regions within the client viewport.

use crate::geometry::{Dimension, Rect};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A predefined crop region, expressed in the 1200x720 reference
/// space. Project it onto a detected viewport with
/// [`CutPreset::region_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutPreset {
    /// The remodel list, fleet girl portrait excluded
    UnitWithoutShip,
    /// The full remodel list
    Unit,
}

impl CutPreset {
    /// Crop region in reference-space coordinates
    pub fn region(&self) -> Rect {
        match self {
            CutPreset::UnitWithoutShip => Rect::new(490, 154, 345, 547),
            CutPreset::Unit => Rect::new(490, 154, 690, 547),
        }
    }

    /// Crop region scaled to a viewport of the given size
    pub fn region_for(&self, viewport: Dimension) -> Rect {
        self.region().scaled_between(super::REFERENCE_SIZE, viewport)
    }
}

impl FromStr for CutPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unit" => Ok(CutPreset::Unit),
            "unit-without-ship" => Ok(CutPreset::UnitWithoutShip),
            other => Err(format!("unknown cut preset: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_at_reference_size() {
        let region = CutPreset::Unit.region_for(crate::REFERENCE_SIZE);
        assert_eq!(region, Rect::new(490, 154, 690, 547));
    }

    #[test]
    fn test_region_scales_with_viewport() {
        let region = CutPreset::Unit.region_for(Dimension::new(600, 360));
        assert_eq!(region, Rect::new(245, 77, 345, 273));
    }

    #[test]
    fn test_parse() {
        assert_eq!("unit".parse::<CutPreset>().unwrap(), CutPreset::Unit);
        assert!("portrait".parse::<CutPreset>().is_err());
    }
}
