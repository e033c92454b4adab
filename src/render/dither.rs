//! # Monochrome Conversion
//!
//! Turns an 8-bit grayscale image into a two-level image whose samples are
//! either [`LIGHT`] (255) or [`DARK`] (0).
//!
//! ## Threshold
//!
//! Without dithering every sample is compared against [`THRESHOLD`]:
//! values strictly above 128 become light, everything else (128 included)
//! becomes dark.
//!
//! ## Floyd–Steinberg
//!
//! Error diffusion spreads the quantization error of each pixel to its
//! unvisited neighbours:
//!
//! ```text
//!              X    7/16
//!      3/16  5/16   1/16
//! ```
//!
//! This keeps the average tone of photographs, at the cost of a data
//! dependent (non-periodic) dot pattern.

use image::GrayImage;
use image::imageops::{self, BiLevel};

/// Samples strictly above this value are light.
pub const THRESHOLD: u8 = 128;

/// Sample value of a light (unprinted) pixel.
pub const LIGHT: u8 = 255;

/// Sample value of a dark (printed) pixel.
pub const DARK: u8 = 0;

/// Available conversion algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitheringAlgorithm {
    /// Hard threshold at 128
    None,
    /// Floyd–Steinberg error diffusion
    #[default]
    FloydSteinberg,
}

impl DitheringAlgorithm {
    pub fn from_flag(dither: bool) -> Self {
        if dither {
            DitheringAlgorithm::FloydSteinberg
        } else {
            DitheringAlgorithm::None
        }
    }
}

/// Classify a grayscale sample.
///
/// ```
/// use microprinter::render::dither::is_light;
///
/// assert!(!is_light(128));
/// assert!(is_light(129));
/// ```
#[inline]
pub fn is_light(value: u8) -> bool {
    value > THRESHOLD
}

/// Convert `image` in place so every sample is [`LIGHT`] or [`DARK`].
pub fn binarize(image: &mut GrayImage, algorithm: DitheringAlgorithm) {
    match algorithm {
        DitheringAlgorithm::None => threshold(image),
        DitheringAlgorithm::FloydSteinberg => imageops::dither(image, &BiLevel),
    }
}

fn threshold(image: &mut GrayImage) {
    for pixel in image.pixels_mut() {
        pixel.0[0] = if is_light(pixel.0[0]) { LIGHT } else { DARK };
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn uniform(width: u32, height: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([value]))
    }

    #[test]
    fn test_threshold_boundary() {
        let mut img = GrayImage::from_fn(4, 1, |x, _| Luma([[0, 127, 128, 129][x as usize]]));
        binarize(&mut img, DitheringAlgorithm::None);
        let values: Vec<u8> = img.pixels().map(|p| p.0[0]).collect();
        assert_eq!(values, vec![DARK, DARK, DARK, LIGHT]);
    }

    #[test]
    fn test_output_is_two_level() {
        let mut img = GrayImage::from_fn(32, 32, |x, y| Luma([((x * 8 + y) % 256) as u8]));
        binarize(&mut img, DitheringAlgorithm::FloydSteinberg);
        assert!(img.pixels().all(|p| p.0[0] == LIGHT || p.0[0] == DARK));
    }

    #[test]
    fn test_dither_preserves_extremes() {
        let mut black = uniform(16, 16, 0);
        binarize(&mut black, DitheringAlgorithm::FloydSteinberg);
        assert!(black.pixels().all(|p| p.0[0] == DARK));

        let mut white = uniform(16, 16, 255);
        binarize(&mut white, DitheringAlgorithm::FloydSteinberg);
        assert!(white.pixels().all(|p| p.0[0] == LIGHT));
    }

    #[test]
    fn test_dither_mid_gray_is_roughly_half() {
        let mut img = uniform(32, 32, 128);
        binarize(&mut img, DitheringAlgorithm::FloydSteinberg);
        let light = img.pixels().filter(|p| p.0[0] == LIGHT).count();
        assert!(
            (400..=624).contains(&light),
            "50% gray should light ~512 of 1024 pixels, got {}",
            light
        );
    }

    #[test]
    fn test_threshold_mid_gray_is_all_dark() {
        let mut img = uniform(8, 8, 128);
        binarize(&mut img, DitheringAlgorithm::None);
        assert!(img.pixels().all(|p| p.0[0] == DARK));
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(DitheringAlgorithm::from_flag(true), DitheringAlgorithm::FloydSteinberg);
        assert_eq!(DitheringAlgorithm::from_flag(false), DitheringAlgorithm::None);
    }
}
