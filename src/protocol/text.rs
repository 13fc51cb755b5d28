//! # ESC/POS Text Styling Commands
//!
//! Fixed command pairs used by the simple markup tags.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Bold | ESC E n | **Emphasized** text |
//! | Underline | ESC - n | Underlined text (1 or 2 dots) |
//! | Invert | GS B n | White on black |
//! | Font | ESC M n | Font A (normal) / Font B (small) |
//! | Alignment | ESC a n | Left / center / right |
//! | Print mode | ESC ! n | Double height / double width |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```
//!
//! Alignment only takes effect at the start of a line, so the commands that
//! leave center/right alignment emit a line feed first.

use super::commands::{ESC, GS, LF};

// ============================================================================
// EMPHASIS
// ============================================================================

/// # Enable Bold/Emphasis (ESC E 1)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E 1 |
/// | Hex     | 1B 45 01 |
///
/// ## Example
///
/// ```
/// use escmark::protocol::text::{bold_on, bold_off};
///
/// let mut data = Vec::new();
/// data.extend(bold_on());
/// data.extend(b"IMPORTANT");
/// data.extend(bold_off());
/// assert_eq!(&data[..3], &[0x1B, 0x45, 0x01]);
/// ```
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E', 1]
}

/// Disable bold (ESC E 0)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'E', 0]
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// Underline thickness for `ESC - n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    Off = 0,
    /// 1 dot thick
    Single = 1,
    /// 2 dots thick
    Double = 2,
}

/// # Set Underline Mode (ESC - n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC - n |
/// | Hex     | 1B 2D n |
///
/// Underline does not affect spaces or horizontal tabs.
pub fn underline(mode: Underline) -> Vec<u8> {
    vec![ESC, b'-', mode as u8]
}

// ============================================================================
// INVERT (REVERSE) PRINTING
// ============================================================================

/// # White/Black Reverse Printing (GS B n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS B n |
/// | Hex     | 1D 42 n |
#[inline]
pub fn invert_on() -> Vec<u8> {
    vec![GS, b'B', 1]
}

/// Disable reverse printing (GS B 0)
#[inline]
pub fn invert_off() -> Vec<u8> {
    vec![GS, b'B', 0]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Character font for `ESC M n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A (12×24 dots)
    #[default]
    A = 0,
    /// Font B (9×17 dots), the `small` tag
    B = 1,
}

/// # Select Character Font (ESC M n)
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Select Justification (ESC a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// ## Example
///
/// ```
/// use escmark::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

/// Finish the current line, then return to left alignment (LF ESC a 0)
///
/// Closing an aligned block needs the line feed: the justification of a
/// line is latched when the line is printed.
pub fn end_aligned_block() -> Vec<u8> {
    let mut cmd = vec![LF];
    cmd.extend(align(Alignment::Left));
    cmd
}

// ============================================================================
// PRINT MODE (CHARACTER SIZE)
// ============================================================================

/// Print mode bits for `ESC ! n`
pub mod print_mode {
    /// Double-height characters
    pub const DOUBLE_HEIGHT: u8 = 0x10;
    /// Double-width characters
    pub const DOUBLE_WIDTH: u8 = 0x20;
}

/// # Select Print Mode (ESC ! n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
///
/// ## Example
///
/// ```
/// use escmark::protocol::text::{print_mode, select_print_mode};
///
/// let huge = select_print_mode(print_mode::DOUBLE_HEIGHT | print_mode::DOUBLE_WIDTH);
/// assert_eq!(huge, vec![0x1B, 0x21, 0x30]);
/// ```
pub fn select_print_mode(bits: u8) -> Vec<u8> {
    vec![ESC, b'!', bits]
}

// ============================================================================
// TESTS
// ============================================================================
