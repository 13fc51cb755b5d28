//! # `<img>` Producer
//!
//! ```text
//! <img src="logo.png" mode="wide"/>
//! ```
//!
//! | Attribute | Required | Values |
//! |-----------|----------|--------|
//! | `src` | yes | image name passed to the [`ImageLoader`](crate::images::ImageLoader) |
//! | `mode` | no | `normal` (default), `wide`, `tall`, `huge` |
//!
//! The image is thresholded to black and white and sent as a single
//! `GS v 0` raster command. Width is limited by the paper width at the
//! mode's horizontal resolution; height by the command's 16-bit field.

use log::debug;

use super::{Context, required_attr};
use crate::error::{EscmarkError, Result};
use crate::markup::{Attribute, find_attr};
use crate::printer::PrinterConfig;
use crate::protocol::graphics::{self, RasterMode};
use crate::render::threshold;

/// Build the raster command for one `<img>` tag.
pub fn encode(attrs: &[Attribute], ctx: Context<'_>) -> Result<Vec<u8>> {
    let src = required_attr("img", attrs, "src")?;
    let (width, height) = ctx.images.dimensions(src)?;

    let mode = match find_attr(attrs, "mode") {
        None => RasterMode::default(),
        Some(name) => RasterMode::from_name(name).ok_or_else(|| EscmarkError::UnsupportedValue {
            what: "image mode",
            value: name.to_string(),
        })?,
    };

    check_size(ctx.config, mode, width, height)?;

    let image = ctx.images.load(src)?.to_rgba8();
    let (width, height) = image.dimensions();
    let (width_dots, rows) = check_size(ctx.config, mode, width, height)?;

    debug!("image {} is {}x{} in {:?} mode", src, width, height, mode);

    let data = threshold::generate_raster(&image);
    Ok(graphics::raster(mode, width_dots, rows, &data))
}

/// Reject images the printer cannot take; returns the size as header fields.
fn check_size(
    config: &PrinterConfig,
    mode: RasterMode,
    width: u32,
    height: u32,
) -> Result<(u16, u16)> {
    let max_width = config.max_image_width(mode).min(u16::MAX as u32);
    if width > max_width {
        return Err(EscmarkError::ImageTooLarge {
            dimension: "width",
            actual: width,
            max: max_width,
        });
    }
    let rows = u16::try_from(height).map_err(|_| EscmarkError::ImageTooLarge {
        dimension: "height",
        actual: height,
        max: u16::MAX as u32,
    })?;
    Ok((width as u16, rows))
}

// ============================================================================
// TESTS
// ============================================================================
