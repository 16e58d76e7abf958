use thiserror::Error;

use crate::element::Tag;
use crate::private::{PrivateError, Vendor};
use crate::rules::RuleError;
use crate::vr::Vr;

/// Errors returned by element parsing.
///
/// # Examples
/// ```
/// use dicomvr_core::{DataElement, ParseError, Parser, Tag};
///
/// let element = DataElement::new(Tag::new(0x0020, 0x000d), "KITTENS", "1.2.3");
/// let err = Parser::default().parse(&element).unwrap_err();
/// assert!(matches!(err, ParseError::UnsupportedVr { .. }));
/// assert!(err.to_string().contains("KITTENS"));
/// ```
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported value representation: '{code}'")]
    UnsupportedVr { code: String },
    #[error("cannot parse {vr} value '{value}' of {tag}: {source}")]
    UnparsableValue {
        vr: Vr,
        tag: Tag,
        value: String,
        source: RuleError,
    },
    #[error("malformed {vendor} private value of {tag}: {source}")]
    MalformedPrivateValue {
        vendor: Vendor,
        tag: Tag,
        source: PrivateError,
    },
}
