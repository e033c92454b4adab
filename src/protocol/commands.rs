//! # CBM Protocol Commands
//!
//! Basic command builders for CBM-compatible serial receipt printers
//! (Citizen CBM1000, TEC TRST-53 and relatives).
//!
//! ## Escape Sequence Structure
//!
//! Commands are short byte sequences:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`, `ESC i`, `ESC m`
//! - With one parameter: `ESC 3 n`, `ESC ! n`, `ESC G n`, `ESC - n`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Barcode command prefix
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// NUL - Terminates barcode data
pub const NUL: u8 = 0x00;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Reset Printer (ESC @)
///
/// Restores the power-on state: line spacing, print mode, double print and
/// underline all return to their defaults. Sent after every image so the
/// tightened line feed rate does not leak into following text.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ## Example
///
/// ```
/// use microprinter::protocol::commands;
///
/// assert_eq!(commands::reset(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn reset() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// # Full Cut (ESC i)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC i |
/// | Hex     | 1B 69 |
#[inline]
pub fn cut_full() -> Vec<u8> {
    vec![ESC, b'i']
}

/// # Partial Cut (ESC m)
///
/// Leaves a small uncut hinge so the receipt stays attached to the roll.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC m |
/// | Hex     | 1B 6D |
#[inline]
pub fn cut_partial() -> Vec<u8> {
    vec![ESC, b'm']
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Feed Lines
///
/// Advances the paper by `lines` feeds, each one a pair of `LF` bytes.
/// A count of zero still feeds once.
///
/// ## Example
///
/// ```
/// use microprinter::protocol::commands;
///
/// assert_eq!(commands::feed(2), vec![0x0A, 0x0A, 0x0A, 0x0A]);
/// assert_eq!(commands::feed(0), vec![0x0A, 0x0A]);
/// ```
pub fn feed(lines: u8) -> Vec<u8> {
    let count = usize::from(lines.max(1));
    vec![LF; count * 2]
}

/// # Set Line Feed Rate (ESC 3 n)
///
/// Sets the line spacing to `n` motion units. Image printing sets this to 1
/// so consecutive bands print without gaps between them.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC 3 n  |
/// | Hex     | 1B 33 n  |
#[inline]
pub fn line_feed_rate(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

// ============================================================================
// TEXT MODE COMMANDS
// ============================================================================

/// # Select Print Mode (ESC ! n)
///
/// `flags` is passed through unchanged; its bit layout is firmware specific.
#[inline]
pub fn print_mode(flags: u8) -> Vec<u8> {
    vec![ESC, b'!', flags]
}

/// # Double Print On/Off (ESC G n)
#[inline]
pub fn double_print(enabled: bool) -> Vec<u8> {
    vec![ESC, b'G', u8::from(enabled)]
}

/// # Underline On/Off (ESC - n)
#[inline]
pub fn underline(enabled: bool) -> Vec<u8> {
    vec![ESC, b'-', u8::from(enabled)]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use microprinter::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(288), [0x20, 0x01]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
