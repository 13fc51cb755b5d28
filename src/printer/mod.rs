//! # Printer Module
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware limits

pub mod config;

pub use config::PrinterConfig;
