//! # QR Code Raster
//!
//! Printers in this family have no native 2D barcode support, so QR codes
//! are drawn as an image and printed through the regular bit image path.

use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode, Version};

use super::dither::{DARK, LIGHT};
use crate::error::MicroprinterError;

/// Smallest symbol version tried; larger payloads grow the symbol.
pub const MIN_VERSION: i16 = 4;

/// Pixels per module edge.
pub const MODULE_SIZE: u32 = 4;

/// Quiet zone around the symbol, in modules.
pub const BORDER: u32 = 1;

/// Encode `text` and draw it as a grayscale image.
///
/// ```
/// use microprinter::render::qr;
///
/// let img = qr::qr_image("hello").unwrap();
/// // Version 4 is 33 modules, plus a 1-module border, 4 px per module
/// assert_eq!(img.width(), (33 + 2) * 4);
/// ```
pub fn qr_image(text: &str) -> Result<GrayImage, MicroprinterError> {
    let code = encode(text.as_bytes())?;
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let side = (modules + 2 * BORDER) * MODULE_SIZE;

    let img = GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / MODULE_SIZE).checked_sub(BORDER);
        let my = (y / MODULE_SIZE).checked_sub(BORDER);
        match (mx, my) {
            (Some(mx), Some(my)) if mx < modules && my < modules => {
                match colors[(my * modules + mx) as usize] {
                    Color::Dark => Luma([DARK]),
                    Color::Light => Luma([LIGHT]),
                }
            }
            _ => Luma([LIGHT]),
        }
    });

    Ok(img)
}

fn encode(data: &[u8]) -> Result<QrCode, MicroprinterError> {
    let mut last_err = None;
    for version in MIN_VERSION..=40 {
        match QrCode::with_version(data, Version::Normal(version), EcLevel::M) {
            Ok(code) => return Ok(code),
            Err(e) => last_err = Some(e),
        }
    }
    Err(MicroprinterError::Image(format!(
        "QR encoding failed: {}",
        last_err.map_or_else(|| "no version fits".to_string(), |e| e.to_string())
    )))
}
