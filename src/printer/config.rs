//! # Printer Configuration
//!
//! Hardware limits the encoder validates markup against.
//!
//! ## Usage
//!
//! ```
//! use escmark::printer::PrinterConfig;
//! use escmark::protocol::graphics::RasterMode;
//!
//! let config = PrinterConfig::DEFAULT;
//! assert_eq!(config.max_image_width(RasterMode::Normal), 360);
//! assert_eq!(config.max_image_width(RasterMode::Wide), 180);
//! ```

use std::ops::RangeInclusive;

use crate::protocol::graphics::RasterMode;

/// # Printer Configuration
///
/// ## Image Width Limit
///
/// ```text
/// max_width = paper_width_inches × horizontal_dpi(mode)
///
/// For the default 2" paper:
///   normal / tall (180 DPI): 360 dots
///   wide / huge    (90 DPI): 180 dots
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Printable paper width in whole inches
    pub paper_width_inches: u32,

    /// Smallest barcode module height accepted by `GS h`
    pub barcode_height_min: u8,

    /// Largest barcode module height accepted by `GS h`
    pub barcode_height_max: u8,

    /// Height restored after a barcode that set its own
    pub barcode_height_default: u8,
}

impl PrinterConfig {
    /// # Generic 58mm ESC/POS Receipt Printer
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Paper width | 2 inches |
    /// | Barcode height | 8-162 dots |
    /// | Default barcode height | 162 dots |
    pub const DEFAULT: Self = Self {
        name: "Generic ESC/POS",
        paper_width_inches: 2,
        barcode_height_min: 8,
        barcode_height_max: 162,
        barcode_height_default: 162,
    };

    /// Same printer with a different paper width
    pub fn with_paper_width(self, inches: u32) -> Self {
        Self {
            paper_width_inches: inches,
            ..self
        }
    }

    /// Widest image, in dots, printable in `mode`
    ///
    /// Saturates at `u32::MAX` for absurd paper widths.
    #[inline]
    pub fn max_image_width(&self, mode: RasterMode) -> u32 {
        self.paper_width_inches.saturating_mul(mode.horizontal_dpi())
    }

    /// Accepted barcode module heights
    #[inline]
    pub fn barcode_heights(&self) -> RangeInclusive<u8> {
        self.barcode_height_min..=self.barcode_height_max
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = PrinterConfig::default();
        assert_eq!(config, PrinterConfig::DEFAULT);
        assert_eq!(config.paper_width_inches, 2);
        assert_eq!(config.barcode_heights(), 8..=162);
        assert_eq!(config.barcode_height_default, 162);
    }

    #[test]
    fn test_max_image_width() {
        let config = PrinterConfig::DEFAULT;
        assert_eq!(config.max_image_width(RasterMode::Normal), 360);
        assert_eq!(config.max_image_width(RasterMode::Tall), 360);
        assert_eq!(config.max_image_width(RasterMode::Wide), 180);
        assert_eq!(config.max_image_width(RasterMode::Huge), 180);
    }

    #[test]
    fn test_with_paper_width() {
        let config = PrinterConfig::DEFAULT.with_paper_width(3);
        assert_eq!(config.max_image_width(RasterMode::Normal), 540);
        assert_eq!(config.barcode_heights(), 8..=162);
    }

    #[test]
    fn test_huge_paper_width_saturates() {
        let config = PrinterConfig::DEFAULT.with_paper_width(u32::MAX / 10);
        assert_eq!(config.max_image_width(RasterMode::Normal), u32::MAX);
        assert_eq!(config.max_image_width(RasterMode::Wide), u32::MAX);
    }
}
