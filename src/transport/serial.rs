//! # Serial TTY Transport
//!
//! Talks to the printer through a serial device such as a USB-serial
//! adapter (`/dev/ttyUSB0`) or an Arduino bridge (`/dev/ttyACM0`).
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary data is transmitted without
//! modification:
//!
//! - **Baud rate**: 19200 by default, configurable
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::MicroprinterError;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Default baud rate
pub const DEFAULT_BAUD: u32 = 19200;

/// Baud rates accepted by [`SerialTransport::open`]
pub const SUPPORTED_BAUD_RATES: [u32; 8] = [1200, 2400, 4800, 9600, 19200, 38400, 57600, 115200];

/// # Serial Printer Transport
///
/// ## Example
///
/// ```no_run
/// use microprinter::transport::SerialTransport;
/// use microprinter::printer::Printer;
///
/// let transport = SerialTransport::open("/dev/ttyUSB0", 19200)?;
/// let mut printer = Printer::new(transport);
/// printer.reset()?;
///
/// # Ok::<(), microprinter::MicroprinterError>(())
/// ```
#[derive(Debug)]
pub struct SerialTransport {
    file: File,
}

impl SerialTransport {
    /// Open a serial device and configure it for raw binary output.
    ///
    /// ## Errors
    ///
    /// Returns `TransportUnavailable` if the device can't be opened
    /// (missing, or permission denied; try the dialout group), if the baud
    /// rate is not one of [`SUPPORTED_BAUD_RATES`], or if TTY configuration
    /// fails.
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self, MicroprinterError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            io::Error::new(e.kind(), format!("failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(&file, baud)?;
        log::info!("opened {} at {} baud", path.display(), baud);

        Ok(Self { file })
    }

    /// Open [`DEFAULT_DEVICE`] at [`DEFAULT_BAUD`].
    pub fn open_default() -> Result<Self, MicroprinterError> {
        Self::open(DEFAULT_DEVICE, DEFAULT_BAUD)
    }
}

impl Write for SerialTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(unix)]
fn baud_constant(baud: u32) -> Option<libc::speed_t> {
    Some(match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        _ => return None,
    })
}

/// Configure a serial device for raw 8N1 output at `baud`.
///
/// IXON/IXOFF/IXANY are cleared as well: 0x11 and 0x13 occur in packed
/// image data and must not be taken as flow control.
#[cfg(unix)]
fn configure_tty_raw(file: &File, baud: u32) -> Result<(), MicroprinterError> {
    use std::mem::MaybeUninit;
    use std::os::unix::io::AsRawFd;

    let speed = baud_constant(baud).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unsupported baud rate {}", baud),
        )
    })?;
    let fd = file.as_raw_fd();

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(io::Error::last_os_error().into());
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB);
    termios.c_cflag |= libc::CS8 | libc::CLOCAL;

    let result = unsafe {
        libc::cfsetispeed(&mut termios, speed) | libc::cfsetospeed(&mut termios, speed)
    };
    if result != 0 {
        return Err(io::Error::last_os_error().into());
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(io::Error::last_os_error().into());
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_tty_raw(_file: &File, _baud: u32) -> Result<(), MicroprinterError> {
    // Device settings are left to the OS on non-Unix platforms
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
