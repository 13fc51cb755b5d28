//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for ESC/POS thermal receipt printers. Every
//! builder returns the exact bytes of one command; nothing here validates
//! user input.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control bytes and integer encoding
//! - [`text`]: Text styling (bold, underline, invert, font, alignment, size)
//! - [`barcode`]: 1D barcodes and HRI configuration
//! - [`graphics`]: Raster bit images
//!
//! ## Usage Example
//!
//! ```
//! use escmark::protocol::{text, barcode};
//!
//! let mut data = Vec::new();
//! data.extend(text::align(text::Alignment::Center));
//! data.extend(text::bold_on());
//! data.extend(b"RECEIPT");
//! data.extend(text::bold_off());
//! data.extend(text::end_aligned_block());
//! data.extend(barcode::print(barcode::Symbology::Ean8, b"1234567"));
//! ```

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod text;
