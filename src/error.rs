//! # Error Types
//!
//! This module defines error types used throughout the microprinter library.

use thiserror::Error;

/// Main error type for microprinter operations
#[derive(Debug, Error)]
pub enum MicroprinterError {
    /// Print width (or source image width) is zero or does not fit the
    /// 16-bit column counter of the image band command
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// UPC-A input does not contain 11 or 12 digits
    #[error("UPC-A barcodes must be between 11 and 12 digits, got {0}")]
    InvalidBarcodeLength(usize),

    /// Write or flush on the byte sink failed
    #[error("Transport unavailable: {0}")]
    TransportUnavailable(#[from] std::io::Error),

    /// Density mode byte outside {0, 1, 32, 33}
    #[error("Unsupported mode: {0}")]
    UnsupportedMode(u8),

    /// Image decoding or generation error
    #[error("Image error: {0}")]
    Image(String),
}
