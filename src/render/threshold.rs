//! # Fixed Threshold Conversion
//!
//! Converts a decoded image into packed 1-bit raster rows. Every pixel is
//! reduced to an 8-bit luminance and printed when it is darker than
//! [`THRESHOLD`]; there is no dithering.
//!
//! ## Luminance
//!
//! ```text
//! Y = 0.299 R + 0.587 G + 0.114 B
//! ```
//!
//! computed in 16-bit fixed point on alpha-premultiplied channels, so a
//! fully transparent pixel has luminance 0 and prints black.

use image::{Rgba, RgbaImage};

/// Pixels with luminance below this print as black
pub const THRESHOLD: u8 = 128;

/// 8-bit luminance of a pixel, after premultiplying by alpha.
///
/// ```
/// use escmark::render::threshold::luminance;
/// use image::Rgba;
///
/// assert_eq!(luminance(Rgba([255, 255, 255, 255])), 255);
/// assert_eq!(luminance(Rgba([0, 0, 0, 255])), 0);
/// assert_eq!(luminance(Rgba([255, 255, 255, 0])), 0);
/// ```
pub fn luminance(Rgba([r, g, b, a]): Rgba<u8>) -> u8 {
    let alpha = a as u32 * 0x101;
    let channel = |c: u8| c as u32 * 0x101 * alpha / 0xFFFF;
    // Weights sum to 1 << 16, so the result of the shift fits in 8 bits
    ((19595 * channel(r) + 38470 * channel(g) + 7471 * channel(b) + (1 << 15)) >> 24) as u8
}

#[inline]
pub fn is_dark(pixel: Rgba<u8>) -> bool {
    luminance(pixel) < THRESHOLD
}

/// Pack a row of pixels (true = black) into bytes, MSB first, zero-padded.
///
/// ## Example
///
/// ```
/// use escmark::render::threshold::pack_row;
///
/// // 8 pixels pack into 1 byte
/// let row = vec![true, true, true, true, false, false, false, false];
/// assert_eq!(pack_row(&row), vec![0xF0]); // 11110000
///
/// // 12 pixels pack into 2 bytes (4 bits padding)
/// let row = vec![true; 12];
/// assert_eq!(pack_row(&row), vec![0xFF, 0xF0]); // 11111111 11110000
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; pixels.len().div_ceil(8)];

    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            let bit_idx = 7 - (i % 8); // MSB first
            bytes[i / 8] |= 1 << bit_idx;
        }
    }

    bytes
}

/// Threshold an image into raster data, top to bottom.
///
/// Returns `ceil(width / 8) * height` bytes; rows never share a byte.
pub fn generate_raster(image: &RgbaImage) -> Vec<u8> {
    let (width, height) = image.dimensions();
    let mut data = Vec::with_capacity(width.div_ceil(8) as usize * height as usize);
    let mut row_pixels = Vec::with_capacity(width as usize);

    for row in image.rows() {
        row_pixels.clear();
        row_pixels.extend(row.map(|&pixel| is_dark(pixel)));
        data.extend(pack_row(&row_pixels));
    }

    data
}

// ============================================================================
// TESTS
// ============================================================================
