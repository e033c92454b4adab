//! # Printer Configuration
//!
//! Print width and density presets for common paper rolls.
//!
//! | Preset | Paper | Width (dots) | Mode |
//! |--------|-------|--------------|------|
//! | `CBM1000` | 57mm | 288 | 0 (101 × 67 dpi) |
//! | `PAPER_58_HIRES` | 57/58mm | 432 | 33 (203 × 203 dpi) |
//! | `PAPER_80_HIRES` | 80mm | 576 | 33 (203 × 203 dpi) |
//!
//! ## Usage
//!
//! ```
//! use microprinter::printer::PrinterConfig;
//!
//! let config = PrinterConfig::for_paper(58).unwrap();
//! assert_eq!(config.width_dots, 432);
//! ```

use crate::protocol::Mode;
use crate::render::raster::ImageOptions;

/// # Printer Configuration
///
/// Width and density used for image printing on one kind of paper roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrinterConfig {
    /// Preset name
    pub name: &'static str,

    /// Paper roll width in millimeters
    pub paper_mm: u32,

    /// Image width in dots
    pub width_dots: u32,

    /// Image density mode
    pub mode: Mode,
}

impl PrinterConfig {
    /// Citizen CBM1000 / TEC TRST-53 defaults: 57mm paper at single density.
    pub const CBM1000: Self = Self {
        name: "CBM1000",
        paper_mm: 57,
        width_dots: 288,
        mode: Mode::LowLow,
    };

    /// 57/58mm paper at 203 × 203 dpi.
    pub const PAPER_58_HIRES: Self = Self {
        name: "58mm hi-res",
        paper_mm: 58,
        width_dots: 432,
        mode: Mode::HighHigh,
    };

    /// 80mm paper at 203 × 203 dpi.
    pub const PAPER_80_HIRES: Self = Self {
        name: "80mm hi-res",
        paper_mm: 80,
        width_dots: 576,
        mode: Mode::HighHigh,
    };

    /// Hi-res preset for a paper width in millimeters.
    ///
    /// 56 to 58mm rolls share the 58mm preset; 80mm has its own.
    pub fn for_paper(mm: u32) -> Option<Self> {
        match mm {
            56..=58 => Some(Self::PAPER_58_HIRES),
            80 => Some(Self::PAPER_80_HIRES),
            _ => None,
        }
    }

    /// Image options with this preset's width and mode.
    pub fn image_options(&self) -> ImageOptions {
        ImageOptions::default()
            .width(self.width_dots)
            .mode(self.mode)
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::CBM1000
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cbm1000() {
        let config = PrinterConfig::default();
        assert_eq!(config.width_dots, 288);
        assert_eq!(config.mode, Mode::LowLow);
    }

    #[test]
    fn test_for_paper() {
        assert_eq!(PrinterConfig::for_paper(56), Some(PrinterConfig::PAPER_58_HIRES));
        assert_eq!(PrinterConfig::for_paper(57), Some(PrinterConfig::PAPER_58_HIRES));
        assert_eq!(PrinterConfig::for_paper(58), Some(PrinterConfig::PAPER_58_HIRES));
        assert_eq!(PrinterConfig::for_paper(80), Some(PrinterConfig::PAPER_80_HIRES));
        assert_eq!(PrinterConfig::for_paper(59), None);
        assert_eq!(PrinterConfig::for_paper(112), None);
    }

    #[test]
    fn test_image_options_carry_width_and_mode() {
        let options = PrinterConfig::PAPER_80_HIRES.image_options();
        assert_eq!(options.width, 576);
        assert_eq!(options.mode, Mode::HighHigh);
        assert!(options.autorotate);
    }
}
