//! # escmark - Receipt Markup to ESC/POS
//!
//! escmark turns a small XML-like markup language into the byte stream an
//! ESC/POS thermal receipt printer expects. It provides:
//!
//! - **Tag registry**: text styles, alignment, character size
//! - **Barcodes**: UPC-A, EAN-13, EAN-8 and Code39, validated before printing
//! - **Images**: any image the `image` crate reads, thresholded to 1 bit
//! - **Encoder**: streaming token consumer with newline suppression
//!
//! ## Quick Start
//!
//! ```
//! let markup = br#"<center><huge>THANKS</huge></center>
//! <b>Total:</b> 12.50
//! <barcode mode="ean8" value="1234567" hri_pos="below"/>"#;
//!
//! let bytes = escmark::encode(markup)?;
//! assert_eq!(&bytes[..3], &[0x1B, 0x61, 0x01]); // ESC a 1
//! # Ok::<(), escmark::EscmarkError>(())
//! ```
//!
//! ## Markup
//!
//! | Tag | Effect |
//! |-----|--------|
//! | `<b>` | Bold |
//! | `<u>`, `<uu>` | Underline, 1 or 2 dots |
//! | `<inv>` | White on black |
//! | `<small>` | Font B |
//! | `<center>`, `<right>` | Alignment (block) |
//! | `<tall>`, `<wide>`, `<huge>` | Double height / width / both |
//! | `<barcode mode value [height hri_pos hri_font]/>` | 1D barcode |
//! | `<img src [mode]/>` | Raster image |
//!
//! Tag names are case-insensitive. Anything outside tags is sent as-is.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`encoder`] | Token consumer and document encoder |
//! | [`markup`] | Tokens and the tokenizer |
//! | [`tags`] | Tag registry and the barcode/image producers |
//! | [`protocol`] | ESC/POS command builders |
//! | [`render`] | Image thresholding and bit packing |
//! | [`images`] | Image sources |
//! | [`printer`] | Printer limits |
//! | [`error`] | Error types |

pub mod encoder;
pub mod error;
pub mod images;
pub mod markup;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod tags;

// Re-exports for convenience
pub use encoder::{Consumer, Encoder, encode};
pub use error::EscmarkError;
pub use images::{FileImageLoader, ImageLoader, MemoryImageLoader};
pub use printer::PrinterConfig;
