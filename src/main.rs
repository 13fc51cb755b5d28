//! # escmark CLI
//!
//! Encode receipt markup into ESC/POS bytes.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a file and send it straight to a printer
//! escmark receipt.xml > /dev/usb/lp0
//!
//! # Read markup from stdin
//! echo '<b>Hello</b>' | escmark > hello.bin
//!
//! # Write to a file, allowing wider images on 3" paper
//! escmark --paper-width 3 -o receipt.bin receipt.xml
//! ```
//!
//! Nothing is written unless the whole document encodes successfully.

use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use escmark::{EscmarkError, Encoder, FileImageLoader, PrinterConfig};

/// Widest paper whose image width still fits the 16-bit raster header
const MAX_PAPER_WIDTH: i64 = (u16::MAX / 180) as i64;

/// escmark - Encode receipt markup into ESC/POS printer commands
#[derive(Parser, Debug)]
#[command(name = "escmark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Markup file to encode (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Write the encoded bytes to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Paper width in inches, used to limit image width
    #[arg(
        long,
        value_name = "INCHES",
        default_value_t = PrinterConfig::DEFAULT.paper_width_inches,
        value_parser = clap::value_parser!(u32).range(1..=MAX_PAPER_WIDTH)
    )]
    paper_width: u32,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EscmarkError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = PrinterConfig::DEFAULT.with_paper_width(cli.paper_width);
    let encoder = Encoder::new(config, FileImageLoader);

    let data = match &cli.file {
        Some(path) => {
            log::info!("encoding {}", path.display());
            let input = BufReader::new(File::open(path)?);
            encoder.encode(input, Vec::new())?
        }
        None => {
            log::info!("encoding stdin");
            encoder.encode(io::stdin().lock(), Vec::new())?
        }
    };

    log::info!("encoded {} bytes", data.len());

    match cli.output {
        Some(path) => std::fs::write(&path, &data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&data)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// stderr logger; `RUST_LOG` overrides the `-v` level
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_width_range() {
        let cli = Cli::try_parse_from(["escmark", "--paper-width", "3"]).unwrap();
        assert_eq!(cli.paper_width, 3);
        assert_eq!(Cli::try_parse_from(["escmark"]).unwrap().paper_width, 2);

        assert!(Cli::try_parse_from(["escmark", "--paper-width", "364"]).is_ok());
        for bad in ["0", "365", "429496729"] {
            assert!(Cli::try_parse_from(["escmark", "--paper-width", bad]).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["escmark", "-vv", "in.xml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, Some(PathBuf::from("in.xml")));
    }
}
