//! Streaming tokenizer over `quick-xml` events.

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{Attribute, Token};
use crate::error::{EscmarkError, Result};

/// Pulls [`Token`]s out of a markup document.
///
/// Self-closing tags are expanded into a start and an end token, end tags
/// must match their start tag, and the document must not end with an element
/// still open. Line endings in character data are normalised to `\n` before
/// entities are expanded. XML declarations, processing instructions and
/// doctypes are rejected.
pub struct Tokenizer<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    depth: usize,
    finished: bool,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.expand_empty_elements(true).check_end_names(true);
        Self {
            reader,
            buf: Vec::new(),
            depth: 0,
            finished: false,
        }
    }

    /// Next token, or `None` at a well-formed end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.buf.clear();
        let position = self.reader.buffer_position();
        match self.reader.read_event_into(&mut self.buf)? {
            Event::Start(e) => {
                self.depth += 1;
                start_token(&e, position).map(Some)
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                self.depth = self.depth.checked_sub(1).ok_or_else(|| {
                    EscmarkError::Malformed(format!(
                        "unexpected end tag </{}> at byte {}",
                        name, position
                    ))
                })?;
                Ok(Some(Token::End { name }))
            }
            Event::Text(e) => {
                let raw = normalize_newlines(&e);
                let raw = utf8(&raw, position)?;
                let text = quick_xml::escape::unescape(raw).map_err(|err| {
                    EscmarkError::Malformed(format!("bad entity at byte {}: {}", position, err))
                })?;
                check_chars(&text, position)?;
                Ok(Some(Token::Text(text.into_owned().into_bytes())))
            }
            Event::CData(e) => {
                let raw = normalize_newlines(&e);
                check_chars(utf8(&raw, position)?, position)?;
                Ok(Some(Token::Text(raw)))
            }
            Event::Comment(_) => Ok(Some(Token::Comment)),
            Event::Decl(_) => Err(unexpected("XML declaration", position)),
            Event::PI(_) => Err(unexpected("processing instruction", position)),
            Event::DocType(_) => Err(unexpected("doctype", position)),
            // expand_empty_elements turns these into Start + End
            Event::Empty(_) => Err(unexpected("empty element", position)),
            Event::Eof if self.depth > 0 => Err(EscmarkError::Malformed(format!(
                "unexpected end of input with {} unclosed element(s)",
                self.depth
            ))),
            Event::Eof => Ok(None),
        }
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let next = self.next_token().transpose();
        if !matches!(next, Some(Ok(_))) {
            self.finished = true;
        }
        next
    }
}

fn start_token(e: &BytesStart<'_>, position: usize) -> Result<Token> {
    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    // repeated attributes are allowed; lookups take the first
    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value()?;
        check_chars(&value, position)?;
        attrs.push(Attribute::new(key, value.into_owned()));
    }
    Ok(Token::Start { name, attrs })
}

fn unexpected(kind: &str, position: usize) -> EscmarkError {
    EscmarkError::Malformed(format!("unexpected {} at byte {}", kind, position))
}

fn utf8(raw: &[u8], position: usize) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|err| {
        EscmarkError::Malformed(format!("invalid UTF-8 at byte {}: {}", position, err))
    })
}

/// The XML `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Reject control characters and other code points XML does not allow.
fn check_chars(text: &str, position: usize) -> Result<()> {
    match text.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(EscmarkError::Malformed(format!(
            "illegal character U+{:04X} in element starting at byte {}",
            c as u32, position
        ))),
        None => Ok(()),
    }
}

/// `\r\n` and lone `\r` become `\n`.
fn normalize_newlines(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut iter = raw.iter().copied().peekable();
    while let Some(b) = iter.next() {
        if b == b'\r' {
            if iter.peek() == Some(&b'\n') {
                iter.next();
            }
            out.push(b'\n');
        } else {
            out.push(b);
        }
    }
    out
}
