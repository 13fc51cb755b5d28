//! # Rendering Module
//!
//! Turns decoded images into packed raster data for the printer.
//!
//! ## Modules
//!
//! - [`threshold`]: Fixed-threshold black/white conversion and bit packing

pub mod threshold;
