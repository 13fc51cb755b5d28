//! # ESC/POS 1D Barcode Commands
//!
//! Builders for the `GS k` barcode command and its configuration commands,
//! plus the per-symbology constraints the printer enforces.
//!
//! ## Supported Barcode Types
//!
//! | Name | Symbology | Code | Length | Characters |
//! |------|-----------|------|--------|------------|
//! | `upc` | UPC-A | 0x00 | 11-12 | 0-9 |
//! | `ean13` | EAN-13 / JAN-13 | 0x02 | 12-13 | 0-9 |
//! | `ean8` | EAN-8 / JAN-8 | 0x03 | 7-8 | 0-9 |
//! | `code39` | Code39 | 0x04 | 1+ | 0-9 A-Z space $ % + - . / |
//!
//! ## Usage
//!
//! ```
//! use escmark::protocol::barcode::{self, HriPosition, Symbology};
//!
//! let mut data = Vec::new();
//! data.extend(barcode::set_hri_position(HriPosition::Above));
//! data.extend(barcode::print(Symbology::Code39, b"HELLO-123"));
//! data.extend(barcode::set_hri_position(HriPosition::default()));
//! ```

use super::commands::{GS, NUL};

// ============================================================================
// SYMBOLOGIES
// ============================================================================

/// Inclusive byte-value interval used for character set validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub min: u8,
    pub max: u8,
}

impl ByteRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        (self.min..=self.max).contains(&byte)
    }
}

const DIGITS: &[ByteRange] = &[ByteRange::new(b'0', b'9')];

const CODE39_CHARS: &[ByteRange] = &[
    ByteRange::new(b'0', b'9'),
    ByteRange::new(b'A', b'Z'),
    ByteRange::new(b' ', b' '),
    ByteRange::new(b'$', b'%'),
    ByteRange::new(b'+', b'+'),
    ByteRange::new(b'-', b'/'),
];

/// Barcode symbologies selectable with the `mode` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Symbology {
    /// UPC-A (11 digits, or 12 with check digit)
    Upc = 0x00,
    /// EAN-13 / JAN-13 (12 digits, or 13 with check digit)
    Ean13 = 0x02,
    /// EAN-8 / JAN-8 (7 digits, or 8 with check digit)
    Ean8 = 0x03,
    /// Code39 (A-Z, 0-9, space, -.$/%+)
    Code39 = 0x04,
}

/// Constraints the printer places on a symbology's payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeSpec {
    /// The `m` byte of `GS k m`
    pub code: u8,
    pub min_len: usize,
    /// Zero means unbounded
    pub max_len: usize,
    pub valid_ranges: &'static [ByteRange],
}

impl Symbology {
    pub const ALL: [Symbology; 4] = [
        Symbology::Upc,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::Code39,
    ];

    /// Look up a symbology by its markup name (`upc`, `ean13`, `ean8`, `code39`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Symbology::Upc => "upc",
            Symbology::Ean13 => "ean13",
            Symbology::Ean8 => "ean8",
            Symbology::Code39 => "code39",
        }
    }

    pub fn spec(self) -> BarcodeSpec {
        let (min_len, max_len, valid_ranges) = match self {
            Symbology::Upc => (11, 12, DIGITS),
            Symbology::Ean13 => (12, 13, DIGITS),
            Symbology::Ean8 => (7, 8, DIGITS),
            Symbology::Code39 => (1, 0, CODE39_CHARS),
        };
        BarcodeSpec {
            code: self as u8,
            min_len,
            max_len,
            valid_ranges,
        }
    }
}

impl BarcodeSpec {
    /// Whether `byte` falls in at least one valid range
    pub fn accepts(&self, byte: u8) -> bool {
        self.valid_ranges.iter().any(|r| r.contains(byte))
    }
}

// ============================================================================
// HRI (HUMAN READABLE INTERPRETATION)
// ============================================================================

/// HRI position, as set by `GS H n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HriPosition {
    /// No HRI text printed
    None = 0,
    /// HRI above barcode
    Above = 1,
    /// HRI below barcode (printer default)
    #[default]
    Below = 2,
    /// HRI both above and below
    Both = 3,
}

impl HriPosition {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(HriPosition::None),
            "above" => Some(HriPosition::Above),
            "below" => Some(HriPosition::Below),
            "both" => Some(HriPosition::Both),
            _ => None,
        }
    }
}

/// HRI font, as set by `GS f n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HriFont {
    /// Font A (printer default)
    #[default]
    Normal = 0,
    /// Font B
    Small = 1,
}

impl HriFont {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(HriFont::Normal),
            "small" => Some(HriFont::Small),
            _ => None,
        }
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

/// # Set Barcode Height (GS h n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS h n |
/// | Hex     | 1D 68 n |
///
/// `n` is the module height in dots. Printer default is 162.
pub fn set_height(dots: u8) -> Vec<u8> {
    vec![GS, b'h', dots]
}

/// # Select HRI Print Position (GS H n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS H n |
/// | Hex     | 1D 48 n |
pub fn set_hri_position(pos: HriPosition) -> Vec<u8> {
    vec![GS, b'H', pos as u8]
}

/// # Select HRI Font (GS f n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS f n |
/// | Hex     | 1D 66 n |
pub fn set_hri_font(font: HriFont) -> Vec<u8> {
    vec![GS, b'f', font as u8]
}

/// # Print Barcode (GS k m d1...dk NUL)
///
/// Prints a 1D barcode in the NUL-terminated format.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS k m d1...dk NUL |
/// | Hex     | 1D 6B m d1...dk 00 |
///
/// The data is written as-is; validating it against the symbology is the
/// caller's job (see [`BarcodeSpec`]).
///
/// ## Example
///
/// ```
/// use escmark::protocol::barcode::{print, Symbology};
///
/// let cmd = print(Symbology::Ean8, b"1234567");
/// assert_eq!(&cmd[..3], &[0x1D, 0x6B, 0x03]);
/// assert_eq!(*cmd.last().unwrap(), 0x00);
/// ```
pub fn print(symbology: Symbology, data: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(3 + data.len() + 1);
    cmd.push(GS);
    cmd.push(b'k');
    cmd.push(symbology.spec().code);
    cmd.extend_from_slice(data);
    cmd.push(NUL);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
