//! # Printer Module
//!
//! [`Printer`] is a print session bound to one transport. Every operation
//! encodes a single [`Command`], writes it and flushes before returning, so
//! commands are never batched across calls and always reach the device in
//! the order they were issued.
//!
//! ## Image Printing
//!
//! ```text
//! ESC 3 1                      tighten line spacing
//! ESC * m nL nH <band 0>       one per full band
//! ESC * m nL nH <band 1>
//! ...
//! ESC * m nL nH <last band>    short tail padded with light rows
//! ESC @                        reset for following text
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Paper width presets

pub mod config;

pub use config::PrinterConfig;

use std::path::Path;

use image::DynamicImage;

use crate::error::MicroprinterError;
use crate::protocol::Command;
use crate::protocol::barcode::{self, BarcodeMode, TextPosition};
use crate::render::pack::Band;
use crate::render::qr;
use crate::render::raster::{self, ImageOptions};
use crate::transport::Transport;

/// Line spacing used between image bands.
const IMAGE_LINE_FEED_RATE: u8 = 1;

/// A print session holding exclusive use of its transport.
///
/// ## Example
///
/// ```
/// use microprinter::printer::Printer;
///
/// let mut printer = Printer::new(Vec::new());
/// printer.set_underline(true)?;
/// printer.cut()?;
/// assert_eq!(printer.into_inner(), vec![0x1B, 0x2D, 0x01, 0x1B, 0x69]);
/// # Ok::<(), microprinter::MicroprinterError>(())
/// ```
#[derive(Debug)]
pub struct Printer<T: Transport> {
    transport: T,
    config: PrinterConfig,
}

impl<T: Transport> Printer<T> {
    /// Start a session with the [`PrinterConfig::CBM1000`] defaults.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, PrinterConfig::default())
    }

    pub fn with_config(transport: T, config: PrinterConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// End the session and hand the transport back.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Encode, write and flush one command.
    pub fn send(&mut self, command: &Command<'_>) -> Result<(), MicroprinterError> {
        let bytes = command.encode();
        log::debug!("{}: {} bytes", command.name(), bytes.len());
        self.transport.write(&bytes)?;
        self.transport.flush()?;
        Ok(())
    }

    /// Write raw bytes (plain text or custom sequences).
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), MicroprinterError> {
        self.send(&Command::Raw(bytes))
    }

    pub fn reset(&mut self) -> Result<(), MicroprinterError> {
        self.send(&Command::Reset)
    }

    pub fn cut(&mut self) -> Result<(), MicroprinterError> {
        self.send(&Command::FullCut)
    }

    pub fn partial_cut(&mut self) -> Result<(), MicroprinterError> {
        self.send(&Command::PartialCut)
    }

    pub fn feed(&mut self, lines: u8) -> Result<(), MicroprinterError> {
        self.send(&Command::Feed(lines))
    }

    pub fn set_line_feed_rate(&mut self, rate: u8) -> Result<(), MicroprinterError> {
        self.send(&Command::LineFeedRate(rate))
    }

    pub fn set_print_mode(&mut self, flags: u8) -> Result<(), MicroprinterError> {
        self.send(&Command::PrintMode(flags))
    }

    pub fn set_double_print(&mut self, enabled: bool) -> Result<(), MicroprinterError> {
        self.send(&Command::DoublePrint(enabled))
    }

    pub fn set_underline(&mut self, enabled: bool) -> Result<(), MicroprinterError> {
        self.send(&Command::Underline(enabled))
    }

    pub fn set_barcode_height(&mut self, dots: u8) -> Result<(), MicroprinterError> {
        self.send(&Command::BarcodeHeight(dots))
    }

    /// Module width, clamped to 2..=4.
    pub fn set_barcode_width(&mut self, module: u8) -> Result<(), MicroprinterError> {
        self.send(&Command::BarcodeWidth(module))
    }

    pub fn set_barcode_text_position(
        &mut self,
        position: TextPosition,
    ) -> Result<(), MicroprinterError> {
        self.send(&Command::BarcodeTextPosition(position))
    }

    /// HRI font, clamped to 0..=1.
    pub fn set_barcode_font(&mut self, code: u8) -> Result<(), MicroprinterError> {
        self.send(&Command::BarcodeFont(code))
    }

    /// Set bar height and module width, then print `data` as `mode`.
    pub fn print_barcode(
        &mut self,
        data: &[u8],
        mode: BarcodeMode,
        width: u8,
        height: u8,
    ) -> Result<(), MicroprinterError> {
        self.set_barcode_height(height)?;
        self.set_barcode_width(width)?;
        self.send(&Command::BarcodePrint { mode, data })
    }

    /// Print a UPC-A barcode with default width and height.
    ///
    /// Non-digit characters are dropped first. Fails with
    /// `InvalidBarcodeLength` before anything is sent unless 11 or 12
    /// digits remain.
    pub fn print_upca(&mut self, input: &str) -> Result<(), MicroprinterError> {
        let digits = barcode::upca_digits(input)?;
        self.print_barcode(
            digits.as_bytes(),
            BarcodeMode::UpcA,
            barcode::WIDTH_MEDIUM,
            barcode::DEFAULT_HEIGHT,
        )
    }

    /// Print an image band by band.
    ///
    /// Returns the number of bands sent. Dimension errors are reported
    /// before any byte reaches the transport.
    pub fn print_image(
        &mut self,
        image: &DynamicImage,
        options: &ImageOptions,
    ) -> Result<usize, MicroprinterError> {
        let rows = raster::rasterize(image, options)?;
        let mode = options.mode;
        log::info!(
            "printing {}x{} image in mode {}",
            rows.width(),
            rows.len(),
            mode
        );

        self.set_line_feed_rate(IMAGE_LINE_FEED_RATE)?;

        let mut band = Band::new(mode, rows.width());
        let mut sent = 0;
        for row in rows {
            if band.push(row)? {
                self.send_band(&band)?;
                band.clear();
                sent += 1;
            }
        }
        if band.is_partial() {
            log::debug!("padding final band from {} to {} rows", band.len(), mode.rowlimit());
            band.pad();
            self.send_band(&band)?;
            sent += 1;
        }

        self.reset()?;
        log::debug!("sent {} bands", sent);
        Ok(sent)
    }

    fn send_band(&mut self, band: &Band) -> Result<(), MicroprinterError> {
        let data = band.pack();
        self.send(&Command::ImageBand {
            mode: band.mode(),
            data: &data,
        })
    }

    /// Decode an image file and print it.
    pub fn print_image_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        options: &ImageOptions,
    ) -> Result<usize, MicroprinterError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| {
            MicroprinterError::Image(format!("Failed to load {}: {}", path.display(), e))
        })?;
        self.print_image(&image, options)
    }

    /// Print `text` as a QR code at the session's width and mode.
    pub fn print_qr_code(&mut self, text: &str) -> Result<usize, MicroprinterError> {
        let image = DynamicImage::ImageLuma8(qr::qr_image(text)?);
        let options = self.config.image_options().autorotate(false);
        self.print_image(&image, &options)
    }
}

// ============================================================================
// TESTS
// ============================================================================
