//! # Printer Transport Layer
//!
//! A transport is an ordered byte sink with explicit flush. The printer
//! session writes each encoded command and flushes right after, so at most
//! one command sits unacknowledged in the link.
//!
//! ## Available Transports
//!
//! - [`serial`]: Raw TTY (USB-serial adapter, Arduino bridge)
//! - Any [`std::io::Write`], e.g. `Vec<u8>` as an in-memory capture sink

use std::io;

pub mod serial;

pub use serial::SerialTransport;

/// Ordered byte sink.
///
/// Errors are surfaced unchanged; the caller owns any reconnect policy.
pub trait Transport {
    /// Write all of `bytes`, blocking until accepted.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Push buffered bytes out to the device.
    fn flush(&mut self) -> io::Result<()>;
}

impl<W: io::Write> Transport for W {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        io::Write::write_all(self, bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(self)
    }
}
