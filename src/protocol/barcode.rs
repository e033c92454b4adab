//! # Barcode Commands
//!
//! 1D barcodes are configured with a handful of `GS` settings and then
//! printed with `GS k`, which takes the symbology, the data and a `NUL`
//! terminator. Symbol encoding happens in the printer firmware.
//!
//! ```
//! use microprinter::protocol::barcode::{self, BarcodeMode};
//!
//! let mut data = Vec::new();
//! data.extend(barcode::height(162));
//! data.extend(barcode::width(3));
//! data.extend(barcode::print(BarcodeMode::UpcA, b"01234567890"));
//! ```

use super::commands::{GS, NUL};
use crate::error::MicroprinterError;

/// Narrowest module width accepted by `GS w`
pub const WIDTH_NARROW: u8 = 0x02;
/// Default module width
pub const WIDTH_MEDIUM: u8 = 0x03;
/// Widest module width accepted by `GS w`
pub const WIDTH_WIDE: u8 = 0x04;

/// Default bar height in dots
pub const DEFAULT_HEIGHT: u8 = 162;

/// Barcode symbology selector for `GS k`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BarcodeMode {
    #[default]
    UpcA = 0x00,
    UpcE = 0x01,
    /// JAN-13 / EAN-13
    Jan13 = 0x02,
    /// JAN-8 / EAN-8
    Jan8 = 0x03,
    Code39 = 0x04,
    Itf = 0x05,
    Codabar = 0x06,
    Code128 = 0x07,
}

impl TryFrom<u8> for BarcodeMode {
    type Error = MicroprinterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0x00 => BarcodeMode::UpcA,
            0x01 => BarcodeMode::UpcE,
            0x02 => BarcodeMode::Jan13,
            0x03 => BarcodeMode::Jan8,
            0x04 => BarcodeMode::Code39,
            0x05 => BarcodeMode::Itf,
            0x06 => BarcodeMode::Codabar,
            0x07 => BarcodeMode::Code128,
            other => return Err(MicroprinterError::UnsupportedMode(other)),
        })
    }
}

/// HRI (human readable text) position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextPosition {
    #[default]
    None = 0x00,
    Above = 0x01,
    Below = 0x02,
    Both = 0x03,
}

impl From<u8> for TextPosition {
    /// Out-of-range values clamp to the nearest valid position.
    fn from(value: u8) -> Self {
        match value {
            0 => TextPosition::None,
            1 => TextPosition::Above,
            2 => TextPosition::Below,
            _ => TextPosition::Both,
        }
    }
}

/// # Set Barcode Height (GS h n)
#[inline]
pub fn height(dots: u8) -> Vec<u8> {
    vec![GS, b'h', dots]
}

/// # Set Barcode Module Width (GS w n)
///
/// Clamped to [`WIDTH_NARROW`]..=[`WIDTH_WIDE`].
///
/// ```
/// use microprinter::protocol::barcode;
///
/// assert_eq!(barcode::width(9), vec![0x1D, 0x77, 0x04]);
/// ```
#[inline]
pub fn width(module: u8) -> Vec<u8> {
    vec![GS, b'w', module.clamp(WIDTH_NARROW, WIDTH_WIDE)]
}

/// # Set HRI Text Position (GS H n)
#[inline]
pub fn text_position(position: TextPosition) -> Vec<u8> {
    vec![GS, b'H', position as u8]
}

/// # Set HRI Font (GS f n)
///
/// Only fonts 0 and 1 exist; larger values select font 1.
#[inline]
pub fn font(code: u8) -> Vec<u8> {
    vec![GS, b'f', code.min(1)]
}

/// # Print Barcode (GS k m d1...dk NUL)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS k m d1...dk NUL |
/// | Hex     | 1D 6B m d1...dk 00 |
pub fn print(mode: BarcodeMode, data: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(3 + data.len() + 1);
    cmd.push(GS);
    cmd.push(b'k');
    cmd.push(mode as u8);
    cmd.extend_from_slice(data);
    cmd.push(NUL);
    cmd
}

/// Strip everything but ASCII digits and check the UPC-A length.
///
/// UPC-A accepts 11 digits (the printer computes the check digit) or 12
/// digits (check digit supplied).
///
/// ```
/// use microprinter::protocol::barcode::upca_digits;
///
/// assert_eq!(upca_digits("0-12345-67890-5").unwrap(), "012345678905");
/// assert!(upca_digits("123").is_err());
/// ```
pub fn upca_digits(input: &str) -> Result<String, MicroprinterError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if !(11..=12).contains(&digits.len()) {
        return Err(MicroprinterError::InvalidBarcodeLength(digits.len()));
    }
    Ok(digits)
}

// ============================================================================
// TESTS
// ============================================================================
