//! # CBM Protocol Implementation
//!
//! Low-level command builders for CBM-compatible serial thermal printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Reset, cutter, feed and text mode commands
//! - [`graphics`]: Bit image bands (`ESC *`)
//! - [`barcode`]: 1D barcode settings and printing (`GS ...`)
//! - [`mode`]: Image density modes
//! - [`command`]: The [`Command`] enumeration tying them together
//!
//! ## Usage Example
//!
//! ```
//! use microprinter::protocol::{Command, Mode, commands, graphics};
//!
//! let mut data = Vec::new();
//! data.extend(commands::line_feed_rate(1));
//! data.extend(graphics::image_band(Mode::LowLow, &[0xFF; 288]));
//! data.extend(Command::Reset.encode());
//! ```

pub mod barcode;
pub mod command;
pub mod commands;
pub mod graphics;
pub mod mode;

pub use command::Command;
pub use mode::Mode;
