//! Detection configuration

use framefind_core::{ScreenProfile, PROFILES};
use serde::{Deserialize, Serialize};

/// Configuration for viewport detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Candidate viewport sizes, tried smallest-first at every
    /// position. Must be ascending; the first entry bounds the scan.
    pub profiles: Vec<ScreenProfile>,
    /// Color of the border frame the client draws around its viewport
    pub border_color: u32,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            profiles: PROFILES.to_vec(),
            border_color: 0xffffff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_full_catalog() {
        let config = DetectionConfig::default();
        assert_eq!(config.profiles.len(), PROFILES.len());
        assert_eq!(config.border_color, 0xffffff);
    }
}
