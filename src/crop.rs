//! Applies a crop preset to a detected viewport.
//!
//! Presets are expressed in the 1200x720 reference space; here they
//! are scaled to the viewport's actual size before cutting, so crops
//! line up at every client zoom level.

use anyhow::Context;
use framefind_core::{CutPreset, Rect};
use framefind_cv::utils::ImageUtils;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Cut the preset region out of the detected viewport
pub fn crop_preset(image: &RgbImage, viewport: Rect, preset: CutPreset) -> RgbImage {
    let region = preset
        .region_for(viewport.size())
        .offset_by(viewport.x, viewport.y);
    image::imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image()
}

/// Crop, JPEG-encode, and write next to the source screenshot
pub fn save_preset_crop(
    image: &RgbImage,
    viewport: Rect,
    preset: CutPreset,
    source: &Path,
) -> anyhow::Result<PathBuf> {
    let cropped = crop_preset(image, viewport, preset);
    let data = ImageUtils::encode_jpeg(&cropped)?;
    let out = source.with_extension("cut.jpg");
    std::fs::write(&out, data).with_context(|| format!("Failed to write crop: {:?}", out))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_scales_to_viewport() {
        // 50% viewport at (101, 51)
        let image = RgbImage::from_pixel(1920, 1080, image::Rgb([10, 20, 30]));
        let viewport = Rect::new(101, 51, 600, 360);
        let cropped = crop_preset(&image, viewport, CutPreset::Unit);
        // reference region 690x547 halved
        assert_eq!(cropped.dimensions(), (345, 273));
    }

    #[test]
    fn test_crop_at_reference_size() {
        let image = RgbImage::from_pixel(1300, 800, image::Rgb([10, 20, 30]));
        let viewport = Rect::new(1, 1, 1200, 720);
        let cropped = crop_preset(&image, viewport, CutPreset::UnitWithoutShip);
        assert_eq!(cropped.dimensions(), (345, 547));
    }
}
