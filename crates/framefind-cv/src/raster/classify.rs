//! Provided pixel classification predicates.

use crate::traits::PixelClassifier;

/// Exact 24-bit equality. The default classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactColor;

impl PixelClassifier for ExactColor {
    fn is_foreground(&self, reference: u32, pixel: u32) -> bool {
        reference == pixel
    }
}

/// Compares only the top four bits of each channel. Tolerates the
/// compression artifacts a near-white client border picks up in JPEG
/// screenshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighNibble;

impl PixelClassifier for HighNibble {
    fn is_foreground(&self, reference: u32, pixel: u32) -> bool {
        (reference & 0xf0f0f0) == (pixel & 0xf0f0f0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        assert!(ExactColor.is_foreground(0xffffff, 0xffffff));
        assert!(!ExactColor.is_foreground(0xffffff, 0xfffffe));
    }

    #[test]
    fn test_high_nibble_tolerates_low_bits() {
        assert!(HighNibble.is_foreground(0xffffff, 0xf8fbfa));
        assert!(!HighNibble.is_foreground(0xffffff, 0xeffffe));
    }

    #[test]
    fn test_closure_classifier() {
        // closures satisfy the trait through the blanket impl
        let fuzzy = |a: u32, b: u32| a.abs_diff(b) < 4;
        assert!(fuzzy.is_foreground(0x10, 0x12));
        assert!(!fuzzy.is_foreground(0x10, 0x20));
    }
}
