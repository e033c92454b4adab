//! # Row Packer
//!
//! Groups monochrome rows into bands of 8 or 24 and packs each band column
//! by column into bytes for `ESC *`.
//!
//! ## Bit Packing
//!
//! For every column `x`, the 8 cells of a row group are combined with row 0
//! in the most significant bit. A dark cell contributes a 1, and the byte
//! is then inverted, because this firmware burns a dot for a clear bit and
//! leaves set bits blank:
//!
//! ```text
//! rows 0..7 at column x:  L L D D L L D D    (L = light, D = dark)
//! before inversion:       0 0 1 1 0 0 1 1  = 0x33
//! sent to printer:        1 1 0 0 1 1 0 0  = 0xCC
//! ```
//!
//! 24-row bands emit three such bytes per column, for rows 0..7, 8..15 and
//! 16..23 in that order.
//!
//! ## Padding
//!
//! The final band of an image is usually short. [`Band::pad`] fills it with
//! light rows so the printer receives a full band with a blank tail.

use super::MonoRow;
use crate::error::MicroprinterError;
use crate::protocol::Mode;

/// Pack one 8-row group of `rows` at column `x` into an inverted byte.
#[inline]
fn pack_column(rows: &[MonoRow], x: usize) -> u8 {
    let dots = rows
        .iter()
        .fold(0u8, |acc, row| (acc << 1) | u8::from(!row[x]));
    !dots
}

/// Pack a full band into printer column bytes.
///
/// `rows` must hold exactly `mode.rowlimit()` rows of equal width. The
/// result is `width` bytes long for 8-dot modes and `3 × width` bytes long
/// for 24-dot modes.
///
/// ```
/// use microprinter::protocol::Mode;
/// use microprinter::render::pack::pack_band;
///
/// let dark = vec![vec![false; 4]; 8];
/// assert_eq!(pack_band(&dark, Mode::LowLow), vec![0x00; 4]);
/// ```
pub fn pack_band(rows: &[MonoRow], mode: Mode) -> Vec<u8> {
    let rowlimit = mode.rowlimit();
    assert_eq!(
        rows.len(),
        rowlimit,
        "band must hold exactly {} rows, got {}",
        rowlimit,
        rows.len()
    );

    let width = rows.first().map_or(0, Vec::len);
    debug_assert!(rows.iter().all(|row| row.len() == width), "ragged band");

    let mut packed = Vec::with_capacity(width * mode.density());
    for x in 0..width {
        for group in rows.chunks_exact(8) {
            packed.push(pack_column(group, x));
        }
    }
    packed
}

/// Accumulator for the rows of one band.
#[derive(Debug, Clone)]
pub struct Band {
    mode: Mode,
    width: usize,
    rows: Vec<MonoRow>,
}

impl Band {
    pub fn new(mode: Mode, width: usize) -> Self {
        Self {
            mode,
            width,
            rows: Vec::with_capacity(mode.rowlimit()),
        }
    }

    /// Append a row. Returns `true` once the band is full.
    ///
    /// ## Errors
    ///
    /// `InvalidDimension` if the row is not exactly the band width, or if
    /// the band is already full.
    pub fn push(&mut self, row: MonoRow) -> Result<bool, MicroprinterError> {
        if row.len() != self.width {
            return Err(MicroprinterError::InvalidDimension(format!(
                "row is {} dots wide, band is {}",
                row.len(),
                self.width
            )));
        }
        if self.is_full() {
            return Err(MicroprinterError::InvalidDimension(format!(
                "band already holds {} rows",
                self.rows.len()
            )));
        }
        self.rows.push(row);
        Ok(self.is_full())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.mode.rowlimit()
    }

    /// Whether the band holds some rows but fewer than a full band.
    pub fn is_partial(&self) -> bool {
        !self.is_empty() && !self.is_full()
    }

    /// Fill the remaining rows with light pixels.
    pub fn pad(&mut self) {
        let missing = self.mode.rowlimit().saturating_sub(self.rows.len());
        self.rows
            .extend(std::iter::repeat_n(vec![true; self.width], missing));
    }

    /// Pack the band contents; see [`pack_band`].
    pub fn pack(&self) -> Vec<u8> {
        pack_band(&self.rows, self.mode)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn rows(&self) -> &[MonoRow] {
        &self.rows
    }
}

// ============================================================================
// TESTS
// ============================================================================
