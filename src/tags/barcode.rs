//! # `<barcode>` Producer
//!
//! ```text
//! <barcode mode="ean13" value="590123412345" height="80" hri_pos="below" hri_font="small"/>
//! ```
//!
//! | Attribute | Required | Values |
//! |-----------|----------|--------|
//! | `mode` | yes | `upc`, `ean13`, `ean8`, `code39` |
//! | `value` | yes | payload, checked against the symbology |
//! | `height` | no | module height in dots, 8-162 |
//! | `hri_pos` | no | `none`, `above`, `below`, `both` |
//! | `hri_font` | no | `small`, `normal` |
//!
//! Each optional setting is emitted before the barcode and restored to the
//! printer default right after it, so a barcode never leaks its
//! configuration into the rest of the receipt:
//!
//! ```text
//! GS h n   GS H n   GS f n   GS k m data NUL   GS h 162   GS H 2   GS f 0
//! └──────── setup ────────┘  └─── barcode ──┘  └──────── restore ───────┘
//! ```

use log::debug;

use super::required_attr;
use crate::error::{EscmarkError, Result};
use crate::markup::{Attribute, find_attr};
use crate::printer::PrinterConfig;
use crate::protocol::barcode::{self, BarcodeSpec, HriFont, HriPosition, Symbology};

/// Build the command sequence for one `<barcode>` tag.
pub fn encode(attrs: &[Attribute], config: &PrinterConfig) -> Result<Vec<u8>> {
    let mode = required_attr("barcode", attrs, "mode")?;
    let symbology = Symbology::from_name(mode).ok_or_else(|| EscmarkError::UnsupportedValue {
        what: "barcode type",
        value: mode.to_string(),
    })?;

    let value = required_attr("barcode", attrs, "value")?.as_bytes();
    validate(&symbology.spec(), value)?;

    let mut setup = Vec::new();
    let mut restore = Vec::new();

    if let Some(height) = find_attr(attrs, "height") {
        setup.extend(barcode::set_height(parse_height(height, config)?));
        restore.extend(barcode::set_height(config.barcode_height_default));
    }

    if let Some(name) = find_attr(attrs, "hri_pos") {
        let pos = HriPosition::from_name(name).ok_or_else(|| EscmarkError::UnsupportedValue {
            what: "HRI position",
            value: name.to_string(),
        })?;
        setup.extend(barcode::set_hri_position(pos));
        restore.extend(barcode::set_hri_position(HriPosition::default()));
    }

    if let Some(name) = find_attr(attrs, "hri_font") {
        let font = HriFont::from_name(name).ok_or_else(|| EscmarkError::UnsupportedValue {
            what: "HRI font",
            value: name.to_string(),
        })?;
        setup.extend(barcode::set_hri_font(font));
        restore.extend(barcode::set_hri_font(HriFont::default()));
    }

    debug!(
        "barcode {} with {} payload bytes, {} setup bytes",
        symbology.name(),
        value.len(),
        setup.len()
    );

    let mut cmd = setup;
    cmd.extend(barcode::print(symbology, value));
    cmd.extend(restore);
    Ok(cmd)
}

/// Check a payload's length and character set against a symbology.
///
/// ```
/// use escmark::protocol::barcode::Symbology;
/// use escmark::tags::barcode::validate;
///
/// let spec = Symbology::Code39.spec();
/// assert!(validate(&spec, b"HELLO-42").is_ok());
/// assert!(validate(&spec, b"hello").is_err());
/// ```
pub fn validate(spec: &BarcodeSpec, value: &[u8]) -> Result<()> {
    if value.len() < spec.min_len {
        return Err(EscmarkError::ValueTooShort {
            min: spec.min_len,
            len: value.len(),
        });
    }
    if spec.max_len > 0 && value.len() > spec.max_len {
        return Err(EscmarkError::ValueTooLong {
            max: spec.max_len,
            len: value.len(),
        });
    }
    if let Some(position) = value.iter().position(|&b| !spec.accepts(b)) {
        return Err(EscmarkError::InvalidByte {
            position,
            byte: value[position],
        });
    }
    Ok(())
}

/// Parse a `height` attribute and check it against the printer's range.
///
/// The whole integer is range-checked; values are never truncated to a byte
/// first, so `height="300"` is rejected rather than wrapping to 44.
fn parse_height(raw: &str, config: &PrinterConfig) -> Result<u8> {
    let range = config.barcode_heights();
    let out_of_range = || EscmarkError::OutOfRange {
        what: "Barcode height",
        value: raw.to_string(),
        min: *range.start() as u32,
        max: *range.end() as u32,
    };

    let height: i64 = raw.parse().map_err(|_| out_of_range())?;
    u8::try_from(height)
        .ok()
        .filter(|h| range.contains(h))
        .ok_or_else(out_of_range)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<Attribute> {
        pairs.iter().map(|(k, v)| Attribute::new(*k, *v)).collect()
    }

    fn encode_with(pairs: &[(&str, &str)]) -> Result<Vec<u8>> {
        encode(&attrs(pairs), &PrinterConfig::DEFAULT)
    }

    fn digits(len: usize) -> String {
        "0123456789".chars().cycle().take(len).collect()
    }

    #[test]
    fn test_upc_scenario() {
        let cmd = encode_with(&[("mode", "upc"), ("value", "01234567890")]).unwrap();
        assert_eq!(
            cmd,
            vec![
                0x1D, 0x6B, 0x00, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39,
                0x30, 0x00
            ]
        );
    }

    #[test]
    fn test_upc_too_short() {
        let err = encode_with(&[("mode", "upc"), ("value", "1234")]).unwrap_err();
        assert!(matches!(err, EscmarkError::ValueTooShort { min: 11, len: 4 }));
    }

    #[test]
    fn test_length_bounds_for_every_symbology() {
        for symbology in Symbology::ALL {
            let spec = symbology.spec();
            let value = |len: usize| match symbology {
                Symbology::Code39 => "A".repeat(len),
                _ => digits(len),
            };

            assert!(validate(&spec, value(spec.min_len).as_bytes()).is_ok());
            assert!(matches!(
                validate(&spec, value(spec.min_len - 1).as_bytes()),
                Err(EscmarkError::ValueTooShort { .. })
            ));

            if spec.max_len > 0 {
                assert!(validate(&spec, value(spec.max_len).as_bytes()).is_ok());
                assert!(matches!(
                    validate(&spec, value(spec.max_len + 1).as_bytes()),
                    Err(EscmarkError::ValueTooLong { .. })
                ));
            } else {
                assert!(validate(&spec, value(500).as_bytes()).is_ok());
            }
        }
    }

    #[test]
    fn test_code39_accepts_full_charset() {
        let spec = Symbology::Code39.spec();
        let value = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%+-./";
        assert!(validate(&spec, value).is_ok());
    }

    #[test]
    fn test_code39_reports_first_bad_position() {
        let spec = Symbology::Code39.spec();
        for (value, position, byte) in [
            (&b"AB*CD"[..], 2, b'*'),
            (&b"abc"[..], 0, b'a'),
            (&b"HELLO#WORLD!"[..], 5, b'#'),
            (&b"12,"[..], 2, b','),
        ] {
            let err = validate(&spec, value).unwrap_err();
            let (p, b) = match err {
                EscmarkError::InvalidByte { position, byte } => (position, byte),
                other => panic!("unexpected error: {:?}", other),
            };
            assert_eq!((p, b), (position, byte));
        }
    }

    #[test]
    fn test_digits_only_rejects_letters() {
        let err = encode_with(&[("mode", "ean8"), ("value", "1234A67")]).unwrap_err();
        assert!(matches!(err, EscmarkError::InvalidByte { position: 4, .. }));
    }

    #[test]
    fn test_length_checked_before_charset() {
        let err = encode_with(&[("mode", "ean13"), ("value", "abc")]).unwrap_err();
        assert!(matches!(err, EscmarkError::ValueTooShort { .. }));
    }

    #[test]
    fn test_missing_attributes() {
        let err = encode_with(&[("value", "01234567890")]).unwrap_err();
        assert!(matches!(err, EscmarkError::MissingAttribute { attr: "mode", .. }));

        let err = encode_with(&[("mode", "upc")]).unwrap_err();
        assert!(matches!(err, EscmarkError::MissingAttribute { attr: "value", .. }));

        let err = encode_with(&[("mode", "upc"), ("value", "")]).unwrap_err();
        assert!(matches!(err, EscmarkError::MissingAttribute { attr: "value", .. }));
    }

    #[test]
    fn test_unknown_symbology() {
        let err = encode_with(&[("mode", "code128"), ("value", "X")]).unwrap_err();
        assert!(matches!(err, EscmarkError::UnsupportedValue { what: "barcode type", .. }));
    }

    #[test]
    fn test_height_wraps_barcode() {
        let cmd = encode_with(&[("mode", "ean8"), ("value", "1234567"), ("height", "80")]).unwrap();
        let mut expected = vec![0x1D, 0x68, 80, 0x1D, 0x6B, 0x03];
        expected.extend(b"1234567");
        expected.extend([0x00, 0x1D, 0x68, 0xA2]);
        assert_eq!(cmd, expected);
    }

    #[test]
    fn test_height_bounds() {
        for ok in ["8", "162", "100", "+42"] {
            assert!(
                encode_with(&[("mode", "code39"), ("value", "A"), ("height", ok)]).is_ok(),
                "{}",
                ok
            );
        }
        for bad in ["7", "163", "0", "-5", "300", "264", "tall", "8.5", " 42"] {
            let err = encode_with(&[("mode", "code39"), ("value", "A"), ("height", bad)])
                .unwrap_err();
            assert!(
                matches!(err, EscmarkError::OutOfRange { min: 8, max: 162, .. }),
                "{}: {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_all_options() {
        let cmd = encode_with(&[
            ("MODE", "code39"),
            ("Value", "AB"),
            ("height", "50"),
            ("hri_pos", "both"),
            ("hri_font", "small"),
        ])
        .unwrap();
        assert_eq!(
            cmd,
            vec![
                0x1D, 0x68, 50, // height
                0x1D, 0x48, 3, // HRI both
                0x1D, 0x66, 1, // font small
                0x1D, 0x6B, 0x04, b'A', b'B', 0x00, // barcode
                0x1D, 0x68, 162, // restore height
                0x1D, 0x48, 2, // restore HRI below
                0x1D, 0x66, 0, // restore font normal
            ]
        );
    }

    #[test]
    fn test_bad_hri_values() {
        let err = encode_with(&[("mode", "code39"), ("value", "A"), ("hri_pos", "left")])
            .unwrap_err();
        assert!(matches!(err, EscmarkError::UnsupportedValue { what: "HRI position", .. }));

        let err = encode_with(&[("mode", "code39"), ("value", "A"), ("hri_font", "tiny")])
            .unwrap_err();
        assert!(matches!(err, EscmarkError::UnsupportedValue { what: "HRI font", .. }));
    }

    #[test]
    fn test_empty_optional_attribute_is_ignored() {
        let cmd = encode_with(&[("mode", "code39"), ("value", "A"), ("height", "")]).unwrap();
        assert_eq!(cmd, vec![0x1D, 0x6B, 0x04, b'A', 0x00]);
    }
}
