//! # Rendering Module
//!
//! Turns images into packed printer bands.
//!
//! ## Modules
//!
//! - [`dither`]: Threshold and Floyd–Steinberg monochrome conversion
//! - [`raster`]: Image normalization into a stream of monochrome rows
//! - [`pack`]: Band accumulation, padding and column packing
//! - [`qr`]: QR codes drawn as images
//!
//! ## Usage Example
//!
//! ```
//! use image::{DynamicImage, GrayImage, Luma};
//! use microprinter::render::{pack::Band, raster::{self, ImageOptions}};
//!
//! let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(64, 64, Luma([0])));
//! let options = ImageOptions::default().width(64);
//! let rows = raster::rasterize(&img, &options).unwrap();
//!
//! let mut band = Band::new(options.mode, rows.width());
//! let mut packed = Vec::new();
//! for row in rows {
//!     if band.push(row).unwrap() {
//!         packed.push(band.pack());
//!         band.clear();
//!     }
//! }
//! assert!(!packed.is_empty());
//! ```

pub mod dither;
pub mod pack;
pub mod qr;
pub mod raster;

/// One row of monochrome pixels; `true` is light (no dot), `false` is dark.
pub type MonoRow = Vec<bool>;
