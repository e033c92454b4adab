//! # Bit Image Density Modes
//!
//! The `m` parameter of `ESC *` selects horizontal and vertical resolution.
//! Bit 0 doubles the horizontal dot density, bit 5 switches from 8-dot to
//! 24-dot vertical bands.
//!
//! | Value | Variant | Resolution | Band rows | Scale | Bytes/column |
//! |-------|---------|------------|-----------|-------|--------------|
//! | 0  | `LowLow`   | 101 × 67 dpi  | 8  | 0.66 | 1 |
//! | 1  | `HighLow`  | 203 × 67 dpi  | 8  | 0.66 | 1 |
//! | 32 | `LowHigh`  | 101 × 203 dpi | 24 | 1.0  | 3 |
//! | 33 | `HighHigh` | 203 × 203 dpi | 24 | 1.0  | 3 |
//!
//! The scale factor compensates for the non-square dots of the 8-row modes
//! so images keep their aspect ratio on paper.

use std::fmt;

use crate::error::MicroprinterError;

/// Print density selector for image bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Mode {
    /// Single horizontal density, 8-dot bands
    #[default]
    LowLow = 0,
    /// Double horizontal density, 8-dot bands
    HighLow = 1,
    /// Single horizontal density, 24-dot bands
    LowHigh = 32,
    /// Double horizontal density, 24-dot bands
    HighHigh = 33,
}

impl Mode {
    /// All modes in wire-value order.
    pub const ALL: [Mode; 4] = [Mode::LowLow, Mode::HighLow, Mode::LowHigh, Mode::HighHigh];

    /// The `m` byte sent in the image band header.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Whether bands are 24 dots tall.
    #[inline]
    pub const fn is_high_density(self) -> bool {
        matches!(self, Mode::LowHigh | Mode::HighHigh)
    }

    /// Number of pixel rows in one band (8 or 24).
    #[inline]
    pub const fn rowlimit(self) -> usize {
        if self.is_high_density() { 24 } else { 8 }
    }

    /// Vertical scaling correction applied while resizing.
    #[inline]
    pub const fn fudgefactor(self) -> f64 {
        if self.is_high_density() { 1.0 } else { 0.66 }
    }

    /// Packed bytes per pixel column (1 or 3).
    #[inline]
    pub const fn density(self) -> usize {
        self.rowlimit() / 8
    }
}

impl TryFrom<u8> for Mode {
    type Error = MicroprinterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::LowLow),
            1 => Ok(Mode::HighLow),
            32 => Ok(Mode::LowHigh),
            33 => Ok(Mode::HighHigh),
            other => Err(MicroprinterError::UnsupportedMode(other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self {
            Mode::LowLow => "101x67 dpi",
            Mode::HighLow => "203x67 dpi",
            Mode::LowHigh => "101x203 dpi",
            Mode::HighHigh => "203x203 dpi",
        };
        write!(f, "{} ({})", self.value(), desc)
    }
}
