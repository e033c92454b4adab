//! # Raster Preprocessor
//!
//! Normalizes an arbitrary source image into monochrome rows exactly as
//! wide as the print width.
//!
//! ## Pipeline
//!
//! ```text
//! DynamicImage ─► luma8 ─► binarize ─► rotate? ─► resize ─► MonoRows
//! ```
//!
//! 1. Convert to grayscale and binarize (threshold or Floyd–Steinberg)
//! 2. If `autorotate` is set and the image is landscape, rotate 90°
//!    counter-clockwise so the long side runs along the paper
//! 3. Resize to `width × round(width / src_width × fudgefactor × src_height)`
//!    with nearest-neighbour sampling, which keeps the image two-level
//! 4. Hand out rows one at a time through [`MonoRows`]

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};

use super::MonoRow;
use super::dither::{self, DitheringAlgorithm};
use crate::error::MicroprinterError;
use crate::protocol::Mode;

/// Default print width in dots (57mm paper at single density).
pub const DEFAULT_WIDTH: u32 = 288;

/// Largest output raster [`rasterize`] will allocate, in pixels.
pub const MAX_PIXELS: u64 = 1 << 28;

/// Image printing options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageOptions {
    /// Target width in dots
    pub width: u32,
    /// Density mode
    pub mode: Mode,
    /// Rotate landscape images to portrait
    pub autorotate: bool,
    /// Monochrome conversion algorithm
    pub dither: DitheringAlgorithm,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            mode: Mode::LowLow,
            autorotate: true,
            dither: DitheringAlgorithm::FloydSteinberg,
        }
    }
}

impl ImageOptions {
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn autorotate(mut self, enabled: bool) -> Self {
        self.autorotate = enabled;
        self
    }

    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = DitheringAlgorithm::from_flag(enabled);
        self
    }
}

/// Output height for a source of `src_width × src_height` scaled to
/// `target_width` in `mode`.
///
/// ```
/// use microprinter::protocol::Mode;
/// use microprinter::render::raster::scaled_height;
///
/// assert_eq!(scaled_height(100, 100, 288, Mode::HighHigh), 288);
/// assert_eq!(scaled_height(100, 100, 288, Mode::LowLow), 190); // 288 × 0.66
/// ```
///
/// Results beyond `u32::MAX` saturate.
pub fn scaled_height(src_width: u32, src_height: u32, target_width: u32, mode: Mode) -> u32 {
    let ratio = (target_width as f64 / src_width as f64) * mode.fudgefactor();
    (ratio * src_height as f64).round() as u32
}

/// Convert `image` into a forward-only producer of monochrome rows.
///
/// ## Errors
///
/// `InvalidDimension` if the target width is zero or exceeds the 16-bit
/// column counter, if the source image has no pixels, or if the scaled
/// raster would exceed [`MAX_PIXELS`].
pub fn rasterize(image: &DynamicImage, options: &ImageOptions) -> Result<MonoRows, MicroprinterError> {
    let width = options.width;
    if width == 0 {
        return Err(MicroprinterError::InvalidDimension(
            "print width must be greater than zero".to_string(),
        ));
    }
    if width > u32::from(u16::MAX) {
        return Err(MicroprinterError::InvalidDimension(format!(
            "print width {} exceeds {} dots",
            width,
            u16::MAX
        )));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(MicroprinterError::InvalidDimension(format!(
            "source image is empty ({}x{})",
            image.width(),
            image.height()
        )));
    }

    // Decided on raw dimensions, before any scaling
    let rotate = options.autorotate && image.width() > image.height();
    let (src_width, src_height) = if rotate {
        (image.height(), image.width())
    } else {
        (image.width(), image.height())
    };

    let height = scaled_height(src_width, src_height, width, options.mode);
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(MicroprinterError::InvalidDimension(format!(
            "scaled image {}x{} exceeds {} pixels",
            width, height, MAX_PIXELS
        )));
    }

    let mut gray = image.to_luma8();
    dither::binarize(&mut gray, options.dither);
    if rotate {
        gray = imageops::rotate270(&gray);
    }

    let resized = if height == 0 {
        GrayImage::new(width, 0)
    } else {
        imageops::resize(&gray, width, height, FilterType::Nearest)
    };

    log::debug!(
        "rasterized {}x{} source to {}x{} (mode {}, {:?})",
        image.width(),
        image.height(),
        resized.width(),
        resized.height(),
        options.mode,
        options.dither
    );

    Ok(MonoRows::new(resized))
}

/// Sequential, single-pass producer of monochrome rows.
///
/// Each row is exactly the print width long. Restarting requires calling
/// [`rasterize`] again.
#[derive(Debug)]
pub struct MonoRows {
    image: GrayImage,
    next_row: u32,
}

impl MonoRows {
    fn new(image: GrayImage) -> Self {
        Self { image, next_row: 0 }
    }

    /// Row width in dots.
    pub fn width(&self) -> usize {
        self.image.width() as usize
    }
}

impl Iterator for MonoRows {
    type Item = MonoRow;

    fn next(&mut self) -> Option<MonoRow> {
        if self.next_row >= self.image.height() {
            return None;
        }
        let y = self.next_row;
        self.next_row += 1;

        let row = (0..self.image.width())
            .map(|x| dither::is_light(self.image.get_pixel(x, y).0[0]))
            .collect();
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.image.height() - self.next_row) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonoRows {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn gray(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
    }

    fn threshold_options(width: u32, mode: Mode) -> ImageOptions {
        ImageOptions::default()
            .width(width)
            .mode(mode)
            .autorotate(false)
            .dither(false)
    }

    #[test]
    fn test_default_options() {
        let options = ImageOptions::default();
        assert_eq!(options.width, 288);
        assert_eq!(options.mode, Mode::LowLow);
        assert!(options.autorotate);
        assert_eq!(options.dither, DitheringAlgorithm::FloydSteinberg);
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = rasterize(&gray(10, 10, 0), &threshold_options(0, Mode::LowLow));
        assert!(matches!(result, Err(MicroprinterError::InvalidDimension(_))));
    }

    #[test]
    fn test_oversized_width_rejected() {
        let result = rasterize(&gray(10, 10, 0), &threshold_options(70_000, Mode::LowLow));
        assert!(matches!(result, Err(MicroprinterError::InvalidDimension(_))));
    }

    #[test]
    fn test_empty_source_rejected() {
        let empty = DynamicImage::ImageLuma8(GrayImage::new(0, 0));
        let result = rasterize(&empty, &threshold_options(16, Mode::LowLow));
        assert!(matches!(result, Err(MicroprinterError::InvalidDimension(_))));
    }

    #[test]
    fn test_zero_height_landscape_source_rejected() {
        // 10x0 counts as landscape; it must not be rotated into a 0-wide image
        let flat = DynamicImage::ImageLuma8(GrayImage::new(10, 0));
        let options = ImageOptions::default().width(16).dither(false);
        let result = rasterize(&flat, &options);
        assert!(matches!(result, Err(MicroprinterError::InvalidDimension(_))));
    }

    #[test]
    fn test_zero_width_portrait_source_rejected() {
        let thin = DynamicImage::ImageLuma8(GrayImage::new(0, 10));
        let result = rasterize(&thin, &ImageOptions::default().width(16));
        assert!(matches!(result, Err(MicroprinterError::InvalidDimension(_))));
    }

    #[test]
    fn test_oversized_output_rejected() {
        // 65535 / 1 × 0.66 × 100000 rows is far beyond MAX_PIXELS
        let result = rasterize(&gray(1, 100_000, 255), &threshold_options(65_535, Mode::LowLow));
        assert!(matches!(result, Err(MicroprinterError::InvalidDimension(_))));
    }

    #[test]
    fn test_scaled_height_saturates() {
        assert_eq!(scaled_height(1, u32::MAX, 65_535, Mode::HighHigh), u32::MAX);
    }

    #[test]
    fn test_output_dimensions_high_density() {
        let mut rows = rasterize(&gray(50, 30, 255), &threshold_options(100, Mode::HighHigh)).unwrap();
        assert_eq!(rows.width(), 100);
        assert_eq!(rows.len(), 60);
        assert!(rows.all(|row| row.len() == 100));
    }

    #[test]
    fn test_output_height_applies_fudgefactor() {
        // round(200/100 × 0.66 × 50) = 66
        let rows = rasterize(&gray(100, 50, 255), &threshold_options(200, Mode::HighLow)).unwrap();
        assert_eq!(rows.len(), 66);
    }

    #[test]
    fn test_scaled_height_rounds() {
        // 16/16 × 0.66 × 16 = 10.56
        assert_eq!(scaled_height(16, 16, 16, Mode::LowLow), 11);
        // 10/3 × 1.0 × 1 = 3.33
        assert_eq!(scaled_height(3, 1, 10, Mode::LowHigh), 3);
    }

    #[test]
    fn test_tiny_height_may_be_zero() {
        let rows = rasterize(&gray(100, 1, 255), &threshold_options(10, Mode::LowLow)).unwrap();
        assert_eq!(rows.count(), 0);
    }

    #[test]
    fn test_autorotate_landscape() {
        // 40x20 landscape becomes 20x40 before resizing to width 20
        let options = threshold_options(20, Mode::HighHigh).autorotate(true);
        let rows = rasterize(&gray(40, 20, 255), &options).unwrap();
        assert_eq!(rows.len(), 40);
    }

    #[test]
    fn test_autorotate_keeps_portrait() {
        let options = threshold_options(20, Mode::HighHigh).autorotate(true);
        let rows = rasterize(&gray(20, 40, 255), &options).unwrap();
        assert_eq!(rows.len(), 40);
    }

    #[test]
    fn test_rotation_is_counter_clockwise() {
        // Dark left column of a landscape image ends up as the bottom row
        let img = GrayImage::from_fn(4, 2, |x, _| Luma([if x == 0 { 0 } else { 255 }]));
        let options = threshold_options(2, Mode::HighHigh).autorotate(true);
        let rows: Vec<MonoRow> = rasterize(&DynamicImage::ImageLuma8(img), &options)
            .unwrap()
            .collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3], vec![false, false]);
        assert!(rows[..3].iter().all(|row| row.iter().all(|&light| light)));
    }

    #[test]
    fn test_threshold_polarity() {
        let dark = rasterize(&gray(8, 8, 128), &threshold_options(8, Mode::HighHigh)).unwrap();
        let light = rasterize(&gray(8, 8, 129), &threshold_options(8, Mode::HighHigh)).unwrap();
        assert!(dark.flatten().all(|light| !light));
        assert!(light.flatten().all(|light| light));
    }

    #[test]
    fn test_upscaling_narrow_source() {
        let rows = rasterize(&gray(4, 4, 0), &threshold_options(32, Mode::HighHigh)).unwrap();
        assert_eq!(rows.width(), 32);
        assert_eq!(rows.len(), 32);
    }

    #[test]
    fn test_rows_are_forward_only() {
        let mut rows = rasterize(&gray(8, 8, 0), &threshold_options(8, Mode::HighHigh)).unwrap();
        assert_eq!(rows.size_hint(), (8, Some(8)));
        rows.next();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows.by_ref().count(), 7);
        assert!(rows.next().is_none());
    }
}
