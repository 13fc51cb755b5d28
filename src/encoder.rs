//! # Markup Encoder
//!
//! Drives a token stream through the tag registry and writes the resulting
//! printer commands.
//!
//! ```text
//! ┌───────────┐     ┌──────────┐     ┌──────────────┐     ┌────────┐
//! │ Tokenizer │ ──► │ Consumer │ ──► │ Tag registry │ ──► │ Writer │
//! │ (markup)  │     │ (state)  │     │ (producers)  │     │ (bytes)│
//! └───────────┘     └──────────┘     └──────────────┘     └────────┘
//! ```
//!
//! ## Newline Suppression
//!
//! The consumer carries one flag between tokens. Every end tag sets it to
//! that tag's `eats_next_newline`; the next text chunk that starts with
//! `\n` while it is set loses that byte and clears it.
//!
//! ```text
//! <center>X</center>\nY   →   ESC a 1  X  LF ESC a 0  Y
//! ```
//!
//! ## Example
//!
//! ```
//! let bytes = escmark::encode(b"<b>Hi</b>").unwrap();
//! assert_eq!(bytes, vec![0x1B, 0x45, 0x01, b'H', b'i', 0x1B, 0x45, 0x00]);
//! ```

use std::io::{BufRead, Write};

use log::{debug, trace};

use crate::error::Result;
use crate::images::{FileImageLoader, ImageLoader};
use crate::markup::{Attribute, Token, Tokenizer};
use crate::printer::PrinterConfig;
use crate::protocol::commands::LF;
use crate::tags::{Context, Tag};

/// Token-at-a-time state machine writing to `W`
pub struct Consumer<'a, W> {
    out: W,
    ctx: Context<'a>,
    eat_next_newline: bool,
}

impl<'a, W: Write> Consumer<'a, W> {
    pub fn new(out: W, ctx: Context<'a>) -> Self {
        Self {
            out,
            ctx,
            eat_next_newline: false,
        }
    }

    /// Whether a leading `\n` in the next text chunk will be dropped
    pub fn pending_newline(&self) -> bool {
        self.eat_next_newline
    }

    pub fn start_tag(&mut self, name: &str, attrs: &[Attribute]) -> Result<()> {
        let tag = Tag::lookup(name)?;
        let bytes = tag.emit_start(attrs, self.ctx)?;
        debug!("<{}> -> {} bytes", name, bytes.len());
        self.out.write_all(&bytes)?;
        Ok(())
    }

    pub fn end_tag(&mut self, name: &str) -> Result<()> {
        let tag = Tag::lookup(name)?;
        self.out.write_all(&tag.emit_end())?;
        self.eat_next_newline = tag.eats_next_newline();
        Ok(())
    }

    pub fn text(&mut self, data: &[u8]) -> Result<()> {
        let data = match data.split_first() {
            Some((&LF, rest)) if self.eat_next_newline => {
                trace!("dropping newline after aligned block");
                self.eat_next_newline = false;
                rest
            }
            _ => data,
        };
        self.out.write_all(data)?;
        Ok(())
    }

    pub fn comment(&mut self) {}

    pub fn consume(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Start { name, attrs } => self.start_tag(&name, &attrs),
            Token::End { name } => self.end_tag(&name),
            Token::Text(data) => self.text(&data),
            Token::Comment => {
                self.comment();
                Ok(())
            }
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Encodes whole documents with a fixed printer and image source
#[derive(Debug, Clone, Default)]
pub struct Encoder<L = FileImageLoader> {
    config: PrinterConfig,
    images: L,
}

impl<L: ImageLoader> Encoder<L> {
    pub fn new(config: PrinterConfig, images: L) -> Self {
        Self { config, images }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Encode `input` into `output`, stopping at the first error.
    ///
    /// Bytes for tokens before the failure have already been written; use
    /// [`Encoder::encode_bytes`] when a failed run must produce nothing.
    pub fn encode<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<W> {
        let ctx = Context {
            config: &self.config,
            images: &self.images,
        };
        let mut consumer = Consumer::new(output, ctx);
        for token in Tokenizer::new(input) {
            consumer.consume(token?)?;
        }
        Ok(consumer.into_inner())
    }

    /// Encode a complete document in memory.
    pub fn encode_bytes(&self, markup: &[u8]) -> Result<Vec<u8>> {
        self.encode(markup, Vec::new())
    }
}

/// Encode a document with the default printer, loading images from disk.
pub fn encode(markup: &[u8]) -> Result<Vec<u8>> {
    Encoder::<FileImageLoader>::default().encode_bytes(markup)
}

// ============================================================================
// TESTS
// ============================================================================
