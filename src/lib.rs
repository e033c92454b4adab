//! # Microprinter - Serial Thermal Printer Library
//!
//! Microprinter drives CBM-compatible thermal receipt printers (Citizen
//! CBM1000, TEC TRST-53 and similar) over a serial link. It provides:
//!
//! - **Protocol implementation**: Command builders and a closed [`protocol::Command`] table
//! - **Rasterization**: Threshold / Floyd–Steinberg conversion, rotation and scaling
//! - **Band packing**: 8- and 24-dot column packing with light padding
//! - **Transport**: Raw serial TTY, or any `std::io::Write` sink
//!
//! ## Quick Start
//!
//! ```no_run
//! use microprinter::{
//!     printer::{Printer, PrinterConfig},
//!     render::raster::ImageOptions,
//!     transport::SerialTransport,
//! };
//!
//! let transport = SerialTransport::open("/dev/ttyUSB0", 19200)?;
//! let mut printer = Printer::with_config(transport, PrinterConfig::PAPER_58_HIRES);
//!
//! let options = printer.config().image_options();
//! printer.print_image_file("photo.jpg", &options)?;
//! printer.feed(5)?;
//! printer.cut()?;
//!
//! # Ok::<(), microprinter::MicroprinterError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Printer command builders |
//! | [`render`] | Monochrome conversion and band packing |
//! | [`printer`] | Print session and paper presets |
//! | [`transport`] | Byte sinks |
//! | [`error`] | Error types |

pub mod error;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use error::MicroprinterError;
pub use printer::{Printer, PrinterConfig};
pub use protocol::{Command, Mode};
pub use render::raster::ImageOptions;
pub use transport::{SerialTransport, Transport};
