//! Conversions between image-crate buffers and the flat pixel form
//! the raster engine consumes.

use crate::Result;
use anyhow::{ensure, Context};
use image::codecs::jpeg::JpegEncoder;
use image::{RgbImage, RgbaImage};
use std::path::Path;

/// Re-encoding quality for saved crops
const JPEG_QUALITY: u8 = 90;

/// Image conversion utilities
pub struct ImageUtils;

impl ImageUtils {
    /// Load a screenshot from disk as a flat pixel buffer
    pub fn load_pixels<P: AsRef<Path>>(path: P) -> Result<(Vec<u32>, u32, u32)> {
        let img = image::open(&path)
            .with_context(|| format!("Failed to open image: {:?}", path.as_ref()))?
            .to_rgb8();
        let (width, height) = (img.width(), img.height());
        Ok((Self::rgb_to_pixels(&img), width, height))
    }

    /// Flatten an RGB image to row-major `u32` samples
    pub fn rgb_to_pixels(image: &RgbImage) -> Vec<u32> {
        image
            .pixels()
            .map(|p| ((p.0[0] as u32) << 16) | ((p.0[1] as u32) << 8) | p.0[2] as u32)
            .collect()
    }

    /// Flatten an RGBA image, dropping the alpha channel
    pub fn rgba_to_pixels(image: &RgbaImage) -> Vec<u32> {
        image
            .pixels()
            .map(|p| ((p.0[0] as u32) << 16) | ((p.0[1] as u32) << 8) | p.0[2] as u32)
            .collect()
    }

    /// Rebuild an RGB image from a flat pixel buffer
    pub fn pixels_to_rgb(pixels: &[u32], width: u32, height: u32) -> Result<RgbImage> {
        ensure!(
            pixels.len() == width as usize * height as usize,
            "pixel buffer holds {} samples, expected {}",
            pixels.len(),
            width as usize * height as usize
        );
        Ok(RgbImage::from_fn(width, height, |x, y| {
            let rgb = pixels[(x + y * width) as usize];
            image::Rgb([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8])
        }))
    }

    /// Encode an image as JPEG at the capture pipeline's quality
    pub fn encode_jpeg(image: &RgbImage) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
        encoder
            .encode_image(image)
            .context("Failed to encode JPEG")?;
        Ok(out)
    }
}
