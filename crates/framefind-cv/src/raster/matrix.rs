//! Dual-plane bit-packed raster.
//!
//! One classification pass over the source pixels fills two redundant
//! bit planes, one packed row-major and one column-major, so range
//! queries along either axis run over whole 64-bit words instead of
//! per-pixel tests.

use super::classify::ExactColor;
use super::mask::{bit_offset, mask_for_bit_range, word_index, WORD_BITS};
use crate::traits::PixelClassifier;
use framefind_core::Dimension;
use thiserror::Error;

/// Construction failures. Queries never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    #[error("invalid raster dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
    #[error("pixel buffer holds {actual} samples, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
}

/// A binarized image: every pixel classified as foreground or
/// background against a reference color, stored bit-packed along both
/// axes. Immutable once built.
#[derive(Debug, PartialEq, Eq)]
pub struct BitMatrix {
    /// Reference color, 24-bit RGB
    color: u32,
    width: u32,
    height: u32,
    /// Words per scanline in the row plane
    row_words: usize,
    /// Words per column in the column plane
    col_words: usize,
    row_plane: Vec<u64>,
    col_plane: Vec<u64>,
}

impl BitMatrix {
    /// Build from a row-major pixel buffer using exact color equality.
    ///
    /// `pixels` holds one `u32` RGB sample per pixel; any alpha byte
    /// is truncated on ingestion.
    pub fn from_pixels(
        pixels: &[u32],
        width: u32,
        height: u32,
        color: u32,
    ) -> Result<Self, RasterError> {
        Self::with_classifier(pixels, width, height, color, ExactColor)
    }

    /// Build with a caller-supplied classification predicate.
    pub fn with_classifier<C>(
        pixels: &[u32],
        width: u32,
        height: u32,
        color: u32,
        classifier: C,
    ) -> Result<Self, RasterError>
    where
        C: PixelClassifier + Sync,
    {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RasterError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }

        let color = color & 0xffffff;
        let row_words = (width as usize - 1) / WORD_BITS + 1;
        let col_words = (height as usize - 1) / WORD_BITS + 1;
        let (row_plane, col_plane) = fill_planes(
            pixels,
            width as usize,
            height as usize,
            color,
            &classifier,
            row_words,
            col_words,
        );

        Ok(Self {
            color,
            width,
            height,
            row_words,
            col_words,
            row_plane,
            col_plane,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    /// The reference color pixels were classified against
    pub fn reference_color(&self) -> u32 {
        self.color
    }

    /// Whether the pixel at `(x, y)` is foreground. Out-of-bounds
    /// coordinates are background.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        let idx = word_index(x as usize) + y as usize * self.row_words;
        match self.row_plane.get(idx) {
            Some(word) => word & (1u64 << bit_offset(x as usize)) != 0,
            None => false,
        }
    }

    /// Whether every pixel in `[x, x+width)` at row `y` is foreground
    pub fn all_along_row(&self, x: u32, y: u32, width: u32) -> bool {
        segment_all(
            &self.row_plane,
            x as usize,
            y as usize,
            width as usize,
            self.row_words,
        )
    }

    /// Whether any pixel in `[x, x+width)` at row `y` is foreground
    pub fn any_along_row(&self, x: u32, y: u32, width: u32) -> bool {
        segment_any(
            &self.row_plane,
            x as usize,
            y as usize,
            width as usize,
            self.row_words,
        )
    }

    /// Whether every pixel in `[y, y+height)` at column `x` is
    /// foreground. Runs against the column plane, so the cost is in
    /// words, not pixels.
    pub fn all_along_col(&self, x: u32, y: u32, height: u32) -> bool {
        segment_all(
            &self.col_plane,
            y as usize,
            x as usize,
            height as usize,
            self.col_words,
        )
    }

    /// Whether any pixel in `[y, y+height)` at column `x` is foreground
    pub fn any_along_col(&self, x: u32, y: u32, height: u32) -> bool {
        segment_any(
            &self.col_plane,
            y as usize,
            x as usize,
            height as usize,
            self.col_words,
        )
    }

    /// Whether the whole rectangle is foreground.
    ///
    /// Picks the plane whose scan touches fewer words, then issues one
    /// segment query per row or column, short-circuiting on the first
    /// failure.
    pub fn all_in_rect(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return true;
        }
        let (x, y) = (x as usize, y as usize);
        let (width, height) = (width as usize, height as usize);
        if row_scan_cost(x, width, height) > col_scan_cost(y, height, width) {
            (x..x + width).all(|col| {
                segment_all(&self.col_plane, y, col, height, self.col_words)
            })
        } else {
            (y..y + height).all(|row| {
                segment_all(&self.row_plane, x, row, width, self.row_words)
            })
        }
    }

    /// Whether any pixel in the rectangle is foreground
    pub fn any_in_rect(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        let (width, height) = (width as usize, height as usize);
        if row_scan_cost(x, width, height) > col_scan_cost(y, height, width) {
            (x..x + width).any(|col| {
                segment_any(&self.col_plane, y, col, height, self.col_words)
            })
        } else {
            (y..y + height).any(|row| {
                segment_any(&self.row_plane, x, row, width, self.row_words)
            })
        }
    }

    /// Reconstruct an image from the classification: foreground pixels
    /// take the reference color, background its complement.
    pub fn to_image(&self) -> image::RgbImage {
        let foreground = self.color;
        let background = self.color ^ 0xffffff;
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let rgb = if self.pixel(x, y) {
                foreground
            } else {
                background
            };
            image::Rgb([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8])
        })
    }

    #[cfg(test)]
    pub(crate) fn planes(&self) -> (&[u64], &[u64]) {
        (&self.row_plane, &self.col_plane)
    }
}

/// Words touched per row segment times row count
fn row_scan_cost(x: usize, width: usize, height: usize) -> usize {
    (word_index(x + width - 1) + 1 - word_index(x)) * height
}

/// Words touched per column segment times column count
fn col_scan_cost(y: usize, height: usize, width: usize) -> usize {
    (word_index(y + height - 1) + 1 - word_index(y)) * width
}

/// Test a packed segment `[a, a+size)` on line `b` for all-foreground.
/// A segment reaching past the allocated plane is never all-foreground.
fn segment_all(plane: &[u64], a: usize, b: usize, size: usize, words_per_line: usize) -> bool {
    if size == 0 {
        return true;
    }
    let base = b * words_per_line;
    let first = base + word_index(a);
    let last = base + word_index(a + size - 1);
    if last >= plane.len() {
        return false;
    }
    if first == last {
        let start = bit_offset(a);
        let mask = mask_for_bit_range(start, start + size);
        return plane[first] & mask == mask;
    }
    let head = mask_for_bit_range(bit_offset(a), WORD_BITS);
    if plane[first] & head != head {
        return false;
    }
    for word in &plane[first + 1..last] {
        if *word != u64::MAX {
            return false;
        }
    }
    let tail = mask_for_bit_range(0, a + size - word_index(a + size - 1) * WORD_BITS);
    plane[last] & tail == tail
}

/// Test a packed segment `[a, a+size)` on line `b` for any-foreground.
fn segment_any(plane: &[u64], a: usize, b: usize, size: usize, words_per_line: usize) -> bool {
    if size == 0 {
        return false;
    }
    let base = b * words_per_line;
    let first = base + word_index(a);
    let last = base + word_index(a + size - 1);
    if last >= plane.len() {
        return false;
    }
    if first == last {
        let start = bit_offset(a);
        return plane[first] & mask_for_bit_range(start, start + size) != 0;
    }
    if plane[first] & mask_for_bit_range(bit_offset(a), WORD_BITS) != 0 {
        return true;
    }
    for word in &plane[first + 1..last] {
        if *word != 0 {
            return true;
        }
    }
    plane[last] & mask_for_bit_range(0, a + size - word_index(a + size - 1) * WORD_BITS) != 0
}

#[cfg(not(feature = "parallel"))]
fn fill_planes<C>(
    pixels: &[u32],
    width: usize,
    height: usize,
    color: u32,
    classifier: &C,
    row_words: usize,
    col_words: usize,
) -> (Vec<u64>, Vec<u64>)
where
    C: PixelClassifier + Sync,
{
    let mut row_plane = vec![0u64; row_words * height];
    let mut col_plane = vec![0u64; col_words * width];
    for y in 0..height {
        for x in 0..width {
            let pixel = pixels[x + y * width] & 0xffffff;
            if classifier.is_foreground(color, pixel) {
                row_plane[word_index(x) + y * row_words] |= 1u64 << bit_offset(x);
                col_plane[word_index(y) + x * col_words] |= 1u64 << bit_offset(y);
            }
        }
    }
    (row_plane, col_plane)
}

/// Parallel fill: one rayon pass per plane. The classifier is pure, so
/// classifying twice yields identical planes.
#[cfg(feature = "parallel")]
fn fill_planes<C>(
    pixels: &[u32],
    width: usize,
    height: usize,
    color: u32,
    classifier: &C,
    row_words: usize,
    col_words: usize,
) -> (Vec<u64>, Vec<u64>)
where
    C: PixelClassifier + Sync,
{
    use rayon::prelude::*;

    let mut row_plane = vec![0u64; row_words * height];
    row_plane
        .par_chunks_mut(row_words)
        .enumerate()
        .for_each(|(y, words)| {
            for x in 0..width {
                if classifier.is_foreground(color, pixels[x + y * width] & 0xffffff) {
                    words[word_index(x)] |= 1u64 << bit_offset(x);
                }
            }
        });

    let mut col_plane = vec![0u64; col_words * width];
    col_plane
        .par_chunks_mut(col_words)
        .enumerate()
        .for_each(|(x, words)| {
            for y in 0..height {
                if classifier.is_foreground(color, pixels[x + y * width] & 0xffffff) {
                    words[word_index(y)] |= 1u64 << bit_offset(y);
                }
            }
        });

    (row_plane, col_plane)
}
