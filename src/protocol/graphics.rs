//! # ESC/POS Raster Graphics Commands
//!
//! ## Bit Packing
//!
//! Graphics data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! Every row starts on a byte boundary; a row whose width is not a multiple
//! of 8 is padded with zero bits on the right (see
//! [`crate::render::threshold::pack_row`]).

use super::commands::{GS, u16_le};

/// Raster scaling modes for `GS v 0 m`
///
/// | Mode | m | Horizontal DPI | Effect |
/// |------|---|----------------|--------|
/// | Normal | 0 | 180 | 1× |
/// | Wide | 1 | 90 | Double width |
/// | Tall | 2 | 180 | Double height |
/// | Huge | 3 | 90 | Double width and height |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterMode {
    #[default]
    Normal = 0,
    Wide = 1,
    Tall = 2,
    Huge = 3,
}

impl RasterMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(RasterMode::Normal),
            "wide" => Some(RasterMode::Wide),
            "tall" => Some(RasterMode::Tall),
            "huge" => Some(RasterMode::Huge),
            _ => None,
        }
    }

    /// Effective horizontal resolution; double-width modes halve it
    pub fn horizontal_dpi(self) -> u32 {
        match self {
            RasterMode::Normal | RasterMode::Tall => 180,
            RasterMode::Wide | RasterMode::Huge => 90,
        }
    }
}

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `m`: Scaling mode (see [`RasterMode`])
/// - `xL, xH`: Width in **bytes**, little-endian
/// - `yL, yH`: Height in dots, little-endian
/// - `d1...dk`: Image data, k = width_bytes × height
///
/// ## Example
///
/// ```
/// use escmark::protocol::graphics::{raster, RasterMode};
///
/// // 12 dots wide, 2 rows: 2 bytes per row
/// let cmd = raster(RasterMode::Normal, 12, 2, &[0xFF, 0xF0, 0x00, 0x00]);
/// assert_eq!(&cmd[..8], &[0x1D, 0x76, 0x30, 0x00, 2, 0, 2, 0]);
/// assert_eq!(cmd.len(), 8 + 4);
/// ```
pub fn raster(mode: RasterMode, width_dots: u16, height: u16, data: &[u8]) -> Vec<u8> {
    let width_bytes = width_dots.div_ceil(8);

    debug_assert!(
        data.len() == width_bytes as usize * height as usize,
        "Raster data length mismatch. Expected {} ({} bytes × {} rows), got {}",
        width_bytes as usize * height as usize,
        width_bytes,
        height,
        data.len()
    );

    let [xl, xh] = u16_le(width_bytes);
    let [yl, yh] = u16_le(height);

    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.push(GS);
    cmd.push(b'v');
    cmd.push(b'0');
    cmd.push(mode as u8);
    cmd.push(xl);
    cmd.push(xh);
    cmd.push(yl);
    cmd.push(yh);
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
