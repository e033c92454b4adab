//! # Microprinter CLI
//!
//! Command-line interface for serial thermal receipt printers.
//!
//! ## Usage
//!
//! ```bash
//! # Print images at the default 288 dots, mode 0
//! microprinter image photo.jpg logo.png
//!
//! # Print on 58mm paper at 203x203 dpi
//! microprinter --device /dev/ttyACM0 image --paper 58 photo.jpg
//!
//! # Explicit width and mode, no dithering
//! microprinter image --width 432 --mode 33 --no-dither chart.png
//!
//! # Preview the monochrome raster instead of printing
//! microprinter image --png preview.png photo.jpg
//!
//! # Barcodes and QR codes
//! microprinter upca 012345678905
//! microprinter qr "https://example.com"
//! ```
//!
//! Set `RUST_LOG=debug` for per-band logging.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use microprinter::{
    MicroprinterError, Mode, Printer, PrinterConfig, SerialTransport,
    protocol::barcode::BarcodeMode,
    render::raster::{self, MonoRows},
    transport::serial::{DEFAULT_BAUD, DEFAULT_DEVICE},
};

/// Microprinter - Serial thermal printer utility
#[derive(Parser, Debug)]
#[command(name = "microprinter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer serial device path
    #[arg(long, global = true, default_value = DEFAULT_DEVICE)]
    device: String,

    /// Serial baud rate
    #[arg(long, global = true, default_value_t = DEFAULT_BAUD)]
    baud: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one or more image files, each followed by a feed and a full cut
    Image {
        /// Image files to print (files that fail to load are skipped)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Paper width preset in mm (56-58 or 80), selects width and mode 33
        #[arg(long)]
        paper: Option<u32>,

        /// Print width in dots (overrides the preset)
        #[arg(long)]
        width: Option<u32>,

        /// Density mode: 0, 1, 32 or 33 (overrides the preset)
        #[arg(long, value_parser = parse_mode)]
        mode: Option<Mode>,

        /// Do not rotate landscape images
        #[arg(long)]
        no_rotate: bool,

        /// Threshold at 128 instead of Floyd-Steinberg dithering
        #[arg(long)]
        no_dither: bool,

        /// Write the monochrome raster to a PNG file instead of printing
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// Print text as a QR code
    Qr {
        text: String,

        /// Paper width preset in mm
        #[arg(long)]
        paper: Option<u32>,
    },

    /// Print a UPC-A barcode (11 or 12 digits)
    Upca { digits: String },

    /// Print a 1D barcode
    Barcode {
        data: String,

        /// Symbology: 0 UPC-A, 1 UPC-E, 2 JAN13, 3 JAN8, 4 CODE39, 5 ITF, 6 CODABAR, 7 CODE128
        #[arg(long, default_value_t = 0)]
        mode: u8,

        /// Module width (2-4)
        #[arg(long, default_value_t = 3)]
        width: u8,

        /// Bar height in dots
        #[arg(long, default_value_t = 162)]
        height: u8,
    },

    /// Cut the paper
    Cut {
        /// Leave a small uncut hinge
        #[arg(long)]
        partial: bool,
    },

    /// Feed paper
    Feed {
        #[arg(default_value_t = 1)]
        lines: u8,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), MicroprinterError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Image {
            files,
            paper,
            width,
            mode,
            no_rotate,
            no_dither,
            png,
        } => {
            let config = resolve_config(paper)?;
            let mut options = config.image_options().autorotate(!no_rotate).dither(!no_dither);
            if let Some(width) = width {
                options = options.width(width);
            }
            if let Some(mode) = mode {
                options = options.mode(mode);
            }

            if let Some(png_path) = png {
                let [file] = files.as_slice() else {
                    return Err(MicroprinterError::Image(
                        "--png takes exactly one input file".to_string(),
                    ));
                };
                let image = load_image(file)?;
                save_png(&png_path, raster::rasterize(&image, &options)?)?;
                println!("Saved to {}", png_path.display());
                return Ok(());
            }

            let mut printer = open_printer(&cli.device, cli.baud, config)?;
            for file in &files {
                let image = match load_image(file) {
                    Ok(image) => image,
                    Err(e) => {
                        log::warn!("skipping {}: {}", file.display(), e);
                        continue;
                    }
                };
                println!("Sending {} to the printer", file.display());
                printer.print_image(&image, &options)?;
                printer.feed(1)?;
                printer.feed(5)?;
                printer.cut()?;
            }
        }
        Commands::Qr { text, paper } => {
            let config = resolve_config(paper)?;
            let mut printer = open_printer(&cli.device, cli.baud, config)?;
            printer.print_qr_code(&text)?;
            printer.feed(5)?;
        }
        Commands::Upca { digits } => {
            let mut printer = open_printer(&cli.device, cli.baud, PrinterConfig::default())?;
            printer.print_upca(&digits)?;
        }
        Commands::Barcode {
            data,
            mode,
            width,
            height,
        } => {
            let mode = BarcodeMode::try_from(mode)?;
            let mut printer = open_printer(&cli.device, cli.baud, PrinterConfig::default())?;
            printer.print_barcode(data.as_bytes(), mode, width, height)?;
        }
        Commands::Cut { partial } => {
            let mut printer = open_printer(&cli.device, cli.baud, PrinterConfig::default())?;
            if partial {
                printer.partial_cut()?;
            } else {
                printer.cut()?;
            }
        }
        Commands::Feed { lines } => {
            let mut printer = open_printer(&cli.device, cli.baud, PrinterConfig::default())?;
            printer.feed(lines)?;
        }
    }

    Ok(())
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a mode number", s))?;
    Mode::try_from(value).map_err(|e| e.to_string())
}

fn resolve_config(paper: Option<u32>) -> Result<PrinterConfig, MicroprinterError> {
    match paper {
        None => Ok(PrinterConfig::default()),
        Some(mm) => PrinterConfig::for_paper(mm).ok_or_else(|| {
            MicroprinterError::InvalidDimension(format!(
                "no preset for {}mm paper (use 56-58 or 80)",
                mm
            ))
        }),
    }
}

fn open_printer(
    device: &str,
    baud: u32,
    config: PrinterConfig,
) -> Result<Printer<SerialTransport>, MicroprinterError> {
    let transport = SerialTransport::open(device, baud)?;
    Ok(Printer::with_config(transport, config))
}

fn load_image(path: &Path) -> Result<image::DynamicImage, MicroprinterError> {
    image::open(path)
        .map_err(|e| MicroprinterError::Image(format!("Failed to load {}: {}", path.display(), e)))
}

/// Save monochrome rows as a black and white PNG
fn save_png(path: &Path, rows: MonoRows) -> Result<(), MicroprinterError> {
    use image::{GrayImage, Luma};

    let width = rows.width() as u32;
    let height = rows.len() as u32;
    let mut img = GrayImage::new(width, height);

    for (y, row) in rows.enumerate() {
        for (x, light) in row.into_iter().enumerate() {
            let color = if light { 255u8 } else { 0u8 };
            img.put_pixel(x as u32, y as u32, Luma([color]));
        }
    }

    img.save(path)
        .map_err(|e| MicroprinterError::Image(format!("Failed to save PNG: {}", e)))?;

    Ok(())
}
