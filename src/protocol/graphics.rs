//! # Bit Image Commands
//!
//! ## Band Layout
//!
//! `ESC *` prints one horizontal band of a bit image. Data is column
//! oriented: every column of the band contributes one byte (8-dot modes)
//! or three bytes (24-dot modes), top dot in the most significant bit.
//!
//! ```text
//!            col 0   col 1   col 2  ...
//! row 0   ┐  bit7    bit7    bit7
//! row 1   │  bit6    bit6    bit6
//!  ...    │  ...
//! row 7   ┘  bit0    bit0    bit0        ← byte 0 of each column
//! row 8   ┐                              ← byte 1 (24-dot modes only)
//!  ...
//! row 23  ┘                              ← byte 2 (24-dot modes only)
//! ```
//!
//! On this firmware a **set bit leaves the dot blank**, so packed data is
//! inverted relative to the usual "1 = black" convention. See
//! [`crate::render::pack`].

use super::commands::{ESC, u16_le};
use super::mode::Mode;

/// # Print Bit Image Band (ESC * m nL nH d1...dk)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * m nL nH d1...dk |
/// | Hex     | 1B 2A m nL nH d1...dk |
///
/// ## Parameters
///
/// - `m`: density mode (0, 1, 32, 33)
/// - `nL, nH`: number of **columns**, little-endian. For 24-dot modes this is
///   the data length divided by 3, not the raw byte count.
/// - `d1...dk`: packed column bytes
///
/// The column counter is 16 bits wide. Data beyond 65535 columns, and any
/// trailing bytes short of a whole column, are dropped so the header always
/// matches the bytes that follow it.
///
/// ## Example
///
/// ```
/// use microprinter::protocol::{graphics, Mode};
///
/// // 100 columns of a 24-dot band = 300 bytes
/// let cmd = graphics::image_band(Mode::HighHigh, &[0xFF; 300]);
/// assert_eq!(&cmd[..5], &[0x1B, 0x2A, 33, 100, 0]);
/// assert_eq!(cmd.len(), 5 + 300);
/// ```
pub fn image_band(mode: Mode, data: &[u8]) -> Vec<u8> {
    debug_assert!(
        data.len() % mode.density() == 0,
        "Band data must be a whole number of columns. Got {} bytes for density {}",
        data.len(),
        mode.density()
    );

    let columns = data.len() / mode.density();
    let sent = columns.min(usize::from(u16::MAX));
    if sent < columns {
        log::warn!("image band truncated from {} to {} columns", columns, sent);
    }
    let data = &data[..sent * mode.density()];
    let [nl, nh] = u16_le(sent as u16);

    let mut cmd = Vec::with_capacity(5 + data.len());
    cmd.push(ESC);
    cmd.push(b'*');
    cmd.push(mode.value());
    cmd.push(nl);
    cmd.push(nh);
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
