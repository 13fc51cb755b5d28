//! # Markup Tokens
//!
//! The encoder consumes a flat stream of tokens rather than a tree. Nesting
//! is only checked for well-formedness by the [`Tokenizer`]; what a tag means
//! is decided entirely by the tag registry.
//!
//! ```
//! use escmark::markup::{Token, Tokenizer};
//!
//! let tokens: Vec<Token> = Tokenizer::new(&b"<b>Hi</b>"[..])
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1], Token::Text(b"Hi".to_vec()));
//! ```

mod tokenizer;

pub use tokenizer::Tokenizer;

/// A single `name="value"` pair from a start tag, entities already expanded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Markup token, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name attr="...">`; a self-closing tag yields `Start` then `End`
    Start { name: String, attrs: Vec<Attribute> },
    /// `</name>`
    End { name: String },
    /// Character data between tags, including CDATA sections
    Text(Vec<u8>),
    /// `<!-- ... -->`
    Comment,
}

/// Value of the first attribute named `name` (case-insensitive).
///
/// An empty value is reported as absent.
pub fn find_attr<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|a| a.name.eq_ignore_ascii_case(name))
        .map(|a| a.value.as_str())
        .filter(|v| !v.is_empty())
}
