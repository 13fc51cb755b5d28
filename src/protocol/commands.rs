//! # ESC/POS Protocol Primitives
//!
//! Control bytes and encoding helpers shared by the text, barcode and
//! graphics command builders.
//!
//! ## Escape Sequence Structure
//!
//! ESC/POS commands are byte sequences introduced by a control byte:
//! - `ESC x n`: text styling and alignment (`ESC E`, `ESC -`, `ESC a`, ...)
//! - `GS x n`: extended features (`GS B` invert, `GS k` barcodes, `GS v 0`
//!   raster images)
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Text styling commands begin with ESC (0x1B).
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for reverse printing, barcodes and raster graphics.
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// NUL - Terminates variable-length barcode data (`GS k m d1...dk NUL`)
pub const NUL: u8 = 0x00;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use escmark::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(45), [0x2D, 0x00]); // 360 dots wide = 45 bytes
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
