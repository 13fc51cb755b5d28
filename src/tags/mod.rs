//! # Tag Registry
//!
//! Every markup tag maps to exactly one [`Tag`]. Most tags are a fixed pair
//! of commands (turn a style on, turn it off); `barcode` and `img` compute
//! their bytes from their attributes.
//!
//! | Tag | Start | End | Eats next `\n` |
//! |-----|-------|-----|----------------|
//! | `b` | `ESC E 1` | `ESC E 0` | no |
//! | `u` | `ESC - 1` | `ESC - 0` | no |
//! | `uu` | `ESC - 2` | `ESC - 0` | no |
//! | `inv` | `GS B 1` | `GS B 0` | no |
//! | `small` | `ESC M 1` | `ESC M 0` | no |
//! | `center` | `ESC a 1` | `LF ESC a 0` | yes |
//! | `right` | `ESC a 2` | `LF ESC a 0` | yes |
//! | `tall` | `ESC ! 0x10` | `ESC ! 0` | no |
//! | `wide` | `ESC ! 0x20` | `ESC ! 0` | no |
//! | `huge` | `ESC ! 0x30` | `ESC ! 0` | no |
//! | `barcode` | see [`barcode`] | - | no |
//! | `img` | see [`img`] | - | no |
//!
//! Closing an aligned block already ends the line, so a newline written
//! right after `</center>` or `</right>` in the source would print as an
//! extra blank line. Those tags ask the consumer to drop it.

pub mod barcode;
pub mod img;

use crate::error::{EscmarkError, Result};
use crate::images::ImageLoader;
use crate::markup::{Attribute, find_attr};
use crate::printer::PrinterConfig;
use crate::protocol::text::{self, Alignment, Font, Underline, print_mode};

/// What producers need beyond their attributes
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub config: &'a PrinterConfig,
    pub images: &'a dyn ImageLoader,
}

/// Tags made of a fixed start/end command pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Underline,
    DoubleUnderline,
    Invert,
    Small,
    Center,
    Right,
    Tall,
    Wide,
    Huge,
}

impl Style {
    pub fn start_bytes(self) -> Vec<u8> {
        match self {
            Style::Bold => text::bold_on(),
            Style::Underline => text::underline(Underline::Single),
            Style::DoubleUnderline => text::underline(Underline::Double),
            Style::Invert => text::invert_on(),
            Style::Small => text::font(Font::B),
            Style::Center => text::align(Alignment::Center),
            Style::Right => text::align(Alignment::Right),
            Style::Tall => text::select_print_mode(print_mode::DOUBLE_HEIGHT),
            Style::Wide => text::select_print_mode(print_mode::DOUBLE_WIDTH),
            Style::Huge => {
                text::select_print_mode(print_mode::DOUBLE_HEIGHT | print_mode::DOUBLE_WIDTH)
            }
        }
    }

    pub fn end_bytes(self) -> Vec<u8> {
        match self {
            Style::Bold => text::bold_off(),
            Style::Underline | Style::DoubleUnderline => text::underline(Underline::Off),
            Style::Invert => text::invert_off(),
            Style::Small => text::font(Font::A),
            Style::Center | Style::Right => text::end_aligned_block(),
            Style::Tall | Style::Wide | Style::Huge => text::select_print_mode(0),
        }
    }

    pub fn eats_next_newline(self) -> bool {
        matches!(self, Style::Center | Style::Right)
    }
}

/// A registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Style(Style),
    Barcode,
    Image,
}

impl Tag {
    /// Every tag name the registry knows, in lowercase
    pub const NAMES: [&'static str; 12] = [
        "b", "u", "uu", "inv", "small", "center", "right", "tall", "wide", "huge", "barcode",
        "img",
    ];

    /// Resolve a tag name, ignoring case
    ///
    /// ```
    /// use escmark::tags::{Style, Tag};
    ///
    /// assert_eq!(Tag::lookup("CENTER").unwrap(), Tag::Style(Style::Center));
    /// assert!(Tag::lookup("blink").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<Tag> {
        let tag = match name.to_lowercase().as_str() {
            "b" => Tag::Style(Style::Bold),
            "u" => Tag::Style(Style::Underline),
            "uu" => Tag::Style(Style::DoubleUnderline),
            "inv" => Tag::Style(Style::Invert),
            "small" => Tag::Style(Style::Small),
            "center" => Tag::Style(Style::Center),
            "right" => Tag::Style(Style::Right),
            "tall" => Tag::Style(Style::Tall),
            "wide" => Tag::Style(Style::Wide),
            "huge" => Tag::Style(Style::Huge),
            "barcode" => Tag::Barcode,
            "img" => Tag::Image,
            other => return Err(EscmarkError::UnknownTag(other.to_string())),
        };
        Ok(tag)
    }

    /// Bytes for the start tag
    pub fn emit_start(self, attrs: &[Attribute], ctx: Context<'_>) -> Result<Vec<u8>> {
        match self {
            Tag::Style(style) => Ok(style.start_bytes()),
            Tag::Barcode => barcode::encode(attrs, ctx.config),
            Tag::Image => img::encode(attrs, ctx),
        }
    }

    /// Bytes for the end tag
    pub fn emit_end(self) -> Vec<u8> {
        match self {
            Tag::Style(style) => style.end_bytes(),
            Tag::Barcode | Tag::Image => Vec::new(),
        }
    }

    /// Whether a `\n` immediately after the end tag should be dropped
    pub fn eats_next_newline(self) -> bool {
        match self {
            Tag::Style(style) => style.eats_next_newline(),
            Tag::Barcode | Tag::Image => false,
        }
    }
}

/// A mandatory, non-empty attribute
pub(crate) fn required_attr<'a>(
    tag: &'static str,
    attrs: &'a [Attribute],
    name: &'static str,
) -> Result<&'a str> {
    find_attr(attrs, name).ok_or(EscmarkError::MissingAttribute { tag, attr: name })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::MemoryImageLoader;

    fn fixed(name: &str) -> (Vec<u8>, Vec<u8>, bool) {
        let tag = Tag::lookup(name).unwrap();
        let loader = MemoryImageLoader::new();
        let ctx = Context {
            config: &PrinterConfig::DEFAULT,
            images: &loader,
        };
        (
            tag.emit_start(&[], ctx).unwrap(),
            tag.emit_end(),
            tag.eats_next_newline(),
        )
    }

    #[test]
    fn test_fixed_tag_table() {
        let table: [(&str, &[u8], &[u8], bool); 10] = [
            ("b", &[0x1B, 0x45, 0x01], &[0x1B, 0x45, 0x00], false),
            ("u", &[0x1B, 0x2D, 0x01], &[0x1B, 0x2D, 0x00], false),
            ("uu", &[0x1B, 0x2D, 0x02], &[0x1B, 0x2D, 0x00], false),
            ("inv", &[0x1D, 0x42, 0x01], &[0x1D, 0x42, 0x00], false),
            ("small", &[0x1B, 0x4D, 0x01], &[0x1B, 0x4D, 0x00], false),
            ("center", &[0x1B, 0x61, 0x01], &[0x0A, 0x1B, 0x61, 0x00], true),
            ("right", &[0x1B, 0x61, 0x02], &[0x0A, 0x1B, 0x61, 0x00], true),
            ("tall", &[0x1B, 0x21, 0x10], &[0x1B, 0x21, 0x00], false),
            ("wide", &[0x1B, 0x21, 0x20], &[0x1B, 0x21, 0x00], false),
            ("huge", &[0x1B, 0x21, 0x30], &[0x1B, 0x21, 0x00], false),
        ];
        for (name, start, end, eats) in table {
            let (s, e, n) = fixed(name);
            assert_eq!(s, start, "start of <{}>", name);
            assert_eq!(e, end, "end of <{}>", name);
            assert_eq!(n, eats, "newline flag of <{}>", name);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Tag::lookup("B").unwrap(), Tag::Style(Style::Bold));
        assert_eq!(Tag::lookup("Barcode").unwrap(), Tag::Barcode);
        assert_eq!(Tag::lookup("IMG").unwrap(), Tag::Image);
    }

    #[test]
    fn test_every_name_resolves() {
        for name in Tag::NAMES {
            assert!(Tag::lookup(name).is_ok(), "{}", name);
            assert!(Tag::lookup(&name.to_uppercase()).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_unknown_tags() {
        for name in ["i", "blink", "BR", "p", "", "centre", "imgs"] {
            let err = Tag::lookup(name).unwrap_err();
            assert!(
                matches!(err, EscmarkError::UnknownTag(ref n) if *n == name.to_lowercase()),
                "{:?}",
                err
            );
        }
    }

    #[test]
    fn test_dynamic_tags_have_no_end_bytes() {
        assert!(Tag::Barcode.emit_end().is_empty());
        assert!(Tag::Image.emit_end().is_empty());
        assert!(!Tag::Barcode.eats_next_newline());
        assert!(!Tag::Image.eats_next_newline());
    }

    #[test]
    fn test_required_attr() {
        let attrs = vec![Attribute::new("Src", "a.png"), Attribute::new("mode", "")];
        assert_eq!(required_attr("img", &attrs, "src").unwrap(), "a.png");
        let err = required_attr("img", &attrs, "mode").unwrap_err();
        assert!(matches!(
            err,
            EscmarkError::MissingAttribute {
                tag: "img",
                attr: "mode"
            }
        ));
    }
}
