//! # Command Table
//!
//! Every operation the driver can send, as a closed enumeration. Each
//! variant carries its parameters and encodes to exactly one wire sequence.

use super::barcode::{self, BarcodeMode, TextPosition};
use super::commands;
use super::graphics;
use super::mode::Mode;

/// A single printer operation.
///
/// Commands are plain values built right before they are sent; see
/// [`crate::printer::Printer::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Reset,
    FullCut,
    PartialCut,
    Feed(u8),
    LineFeedRate(u8),
    PrintMode(u8),
    DoublePrint(bool),
    Underline(bool),
    BarcodeHeight(u8),
    BarcodeWidth(u8),
    BarcodeTextPosition(TextPosition),
    BarcodeFont(u8),
    BarcodePrint { mode: BarcodeMode, data: &'a [u8] },
    ImageBand { mode: Mode, data: &'a [u8] },
    /// Bytes passed through untouched (plain text, custom sequences)
    Raw(&'a [u8]),
}

impl Command<'_> {
    /// Encode to the exact byte sequence the firmware expects.
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            Command::Reset => commands::reset(),
            Command::FullCut => commands::cut_full(),
            Command::PartialCut => commands::cut_partial(),
            Command::Feed(lines) => commands::feed(lines),
            Command::LineFeedRate(n) => commands::line_feed_rate(n),
            Command::PrintMode(flags) => commands::print_mode(flags),
            Command::DoublePrint(enabled) => commands::double_print(enabled),
            Command::Underline(enabled) => commands::underline(enabled),
            Command::BarcodeHeight(dots) => barcode::height(dots),
            Command::BarcodeWidth(module) => barcode::width(module),
            Command::BarcodeTextPosition(position) => barcode::text_position(position),
            Command::BarcodeFont(code) => barcode::font(code),
            Command::BarcodePrint { mode, data } => barcode::print(mode, data),
            Command::ImageBand { mode, data } => graphics::image_band(mode, data),
            Command::Raw(data) => data.to_vec(),
        }
    }

    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Reset => "reset",
            Command::FullCut => "full-cut",
            Command::PartialCut => "partial-cut",
            Command::Feed(_) => "feed",
            Command::LineFeedRate(_) => "line-feed-rate",
            Command::PrintMode(_) => "print-mode",
            Command::DoublePrint(_) => "double-print",
            Command::Underline(_) => "underline",
            Command::BarcodeHeight(_) => "barcode-height",
            Command::BarcodeWidth(_) => "barcode-width",
            Command::BarcodeTextPosition(_) => "barcode-text-position",
            Command::BarcodeFont(_) => "barcode-font",
            Command::BarcodePrint { .. } => "barcode",
            Command::ImageBand { .. } => "image-band",
            Command::Raw(_) => "raw",
        }
    }
}
