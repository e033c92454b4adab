//! # Pipeline Tests
//!
//! End-to-end checks of the image pipeline through the public API: source
//! image in, exact printer byte stream out. A `Vec<u8>` stands in for the
//! serial port.

use image::{DynamicImage, GrayImage, Luma};
use microprinter::render::raster;
use microprinter::{ImageOptions, MicroprinterError, Mode, Printer};
use pretty_assertions::assert_eq;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

fn print_to_vec(image: &DynamicImage, options: &ImageOptions) -> (usize, Vec<u8>) {
    let mut printer = Printer::new(Vec::new());
    let bands = printer.print_image(image, options).unwrap();
    (bands, printer.into_inner())
}

fn band_header(mode: Mode, columns: u16) -> Vec<u8> {
    let [nl, nh] = columns.to_le_bytes();
    vec![0x1B, 0x2A, mode.value(), nl, nh]
}

// ============================================================================
// BYTE STREAMS
// ============================================================================

#[test]
fn test_black_image_low_density_stream() {
    // 16 wide at 16 dots: round(1 × 0.66 × 24) = 16 rows, two full 8-row bands
    let image = solid(16, 24, 0);
    let options = ImageOptions::default().width(16).mode(Mode::LowLow);

    let (bands, out) = print_to_vec(&image, &options);
    assert_eq!(bands, 2);

    let mut expected = vec![0x1B, 0x33, 0x01];
    for _ in 0..2 {
        expected.extend(band_header(Mode::LowLow, 16));
        expected.extend(vec![0x00; 16]);
    }
    expected.extend([0x1B, 0x40]);
    assert_eq!(out, expected);
}

#[test]
fn test_high_density_column_count() {
    // 300 columns × 24 rows of white: 900 data bytes, nL nH = 300
    let image = solid(300, 24, 255);
    let options = ImageOptions::default()
        .width(300)
        .mode(Mode::HighHigh)
        .autorotate(false);

    let (bands, out) = print_to_vec(&image, &options);
    assert_eq!(bands, 1);
    assert_eq!(out.len(), 3 + 5 + 900 + 2);
    assert_eq!(&out[3..8], &[0x1B, 0x2A, 33, 0x2C, 0x01]);
    assert!(out[8..908].iter().all(|&b| b == 0xFF));
}

#[test]
fn test_short_tail_is_padded_light() {
    // round(1 × 0.66 × 10) = 7 dark rows, one light padding row
    let image = solid(8, 10, 0);
    let options = ImageOptions::default()
        .width(8)
        .mode(Mode::LowLow)
        .dither(false);

    let (bands, out) = print_to_vec(&image, &options);
    assert_eq!(bands, 1);

    let mut expected = vec![0x1B, 0x33, 0x01];
    expected.extend(band_header(Mode::LowLow, 8));
    expected.extend(vec![0x01; 8]);
    expected.extend([0x1B, 0x40]);
    assert_eq!(out, expected);
}

#[test]
fn test_every_band_has_mode_and_length() {
    let image = solid(40, 100, 90);
    for mode in Mode::ALL {
        let options = ImageOptions::default().width(40).mode(mode);
        let (bands, out) = print_to_vec(&image, &options);

        let band_len = 5 + 40 * mode.density();
        assert_eq!(out.len(), 3 + bands * band_len + 2, "mode {}", mode);
        for band in out[3..out.len() - 2].chunks(band_len) {
            assert_eq!(&band[..5], &band_header(mode, 40)[..], "mode {}", mode);
        }
    }
}

// ============================================================================
// PREPROCESSING
// ============================================================================

#[test]
fn test_landscape_rotates_counter_clockwise() {
    // Dark left edge on a 24 × 8 landscape source ends up as the bottom row
    let mut source = GrayImage::from_pixel(24, 8, Luma([255]));
    for y in 0..8 {
        source.put_pixel(0, y, Luma([0]));
    }
    let image = DynamicImage::ImageLuma8(source);
    let options = ImageOptions::default()
        .width(8)
        .mode(Mode::HighHigh)
        .dither(false);

    let rows: Vec<_> = raster::rasterize(&image, &options).unwrap().collect();
    assert_eq!(rows.len(), 24);
    for row in &rows[..23] {
        assert!(row.iter().all(|&light| light));
    }
    assert!(rows[23].iter().all(|&light| !light));
}

#[test]
fn test_landscape_kept_without_autorotate() {
    let image = solid(24, 8, 255);
    let options = ImageOptions::default()
        .width(8)
        .mode(Mode::HighHigh)
        .autorotate(false);

    // round(8 / 24 × 1.0 × 8) = 3
    let rows = raster::rasterize(&image, &options).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.width(), 8);
}

#[test]
fn test_rows_match_target_width() {
    let image = solid(123, 77, 200);
    let rows = raster::rasterize(&image, &ImageOptions::default()).unwrap();
    assert_eq!(rows.width(), 288);
    for row in rows {
        assert_eq!(row.len(), 288);
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_invalid_upca_sends_nothing() {
    let mut printer = Printer::new(Vec::new());
    let result = printer.print_upca("12-34");
    assert!(matches!(result, Err(MicroprinterError::InvalidBarcodeLength(4))));
    assert_eq!(printer.into_inner(), Vec::<u8>::new());
}

#[test]
fn test_unknown_mode_rejected() {
    for value in [2u8, 31, 34, 255] {
        assert!(matches!(
            Mode::try_from(value),
            Err(MicroprinterError::UnsupportedMode(v)) if v == value
        ));
    }
}

#[test]
fn test_zero_width_sends_nothing() {
    let mut printer = Printer::new(Vec::new());
    let result = printer.print_image(&solid(8, 8, 0), &ImageOptions::default().width(0));
    assert!(matches!(result, Err(MicroprinterError::InvalidDimension(_))));
    assert_eq!(printer.into_inner(), Vec::<u8>::new());
}

#[test]
fn test_empty_landscape_source_sends_nothing() {
    let mut printer = Printer::new(Vec::new());
    let flat = DynamicImage::ImageLuma8(GrayImage::new(10, 0));
    let result = printer.print_image(&flat, &ImageOptions::default().width(16).dither(false));
    assert!(matches!(result, Err(MicroprinterError::InvalidDimension(_))));
    assert_eq!(printer.into_inner(), Vec::<u8>::new());
}
