//! # Error Types
//!
//! Every failure while encoding a document is fatal to the run. Each variant
//! below maps to one class of failure; callers propagate them with `?` and
//! stop writing output as soon as one is returned.

use thiserror::Error;

/// Main error type for escmark operations
#[derive(Debug, Error)]
pub enum EscmarkError {
    /// Tag name has no entry in the registry
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    /// A producer's mandatory attribute is absent or empty
    #[error("Required attribute '{attr}' not found on <{tag}>")]
    MissingAttribute { tag: &'static str, attr: &'static str },

    /// Attribute value not present in its lookup table
    #[error("Unsupported {what}: {value}")]
    UnsupportedValue { what: &'static str, value: String },

    /// Barcode payload shorter than the symbology allows
    #[error("Value under minimum length of {min} (got {len})")]
    ValueTooShort { min: usize, len: usize },

    /// Barcode payload longer than the symbology allows
    #[error("Value over maximum length of {max} (got {len})")]
    ValueTooLong { max: usize, len: usize },

    /// Barcode payload byte outside every valid range
    #[error("Byte at pos {position} is out of valid range (0x{byte:02X})")]
    InvalidByte { position: usize, byte: u8 },

    /// Numeric attribute outside accepted bounds, or not a number at all
    #[error("{what} out of range: {value} (accepted {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: String,
        min: u32,
        max: u32,
    },

    /// Image larger than the printer can take
    #[error("Image {dimension} of {actual} exceeds max of {max}")]
    ImageTooLarge {
        dimension: &'static str,
        actual: u32,
        max: u32,
    },

    /// Image source could not be opened or decoded
    #[error("Image error ({src}): {source}")]
    Image {
        src: String,
        #[source]
        source: image::ImageError,
    },

    /// Markup is not well-formed
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// Tokenizer failure
    #[error("Error reading next token: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::events::attributes::AttrError> for EscmarkError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        EscmarkError::Xml(err.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, EscmarkError>;
