//! Serializable element input, as produced by an external header reader.

use serde::Deserialize;
use thiserror::Error;

use crate::element::{DataElement, RawScalar, RawValue, Tag, TagParseError};
use crate::options::ParserOptions;
use crate::private::Vendor;

#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Tag(#[from] TagParseError),
    #[error("invalid hex value for {tag}: {source}")]
    Hex {
        tag: Tag,
        source: hex::FromHexError,
    },
    #[error("element {tag} has no value (expected one of value, values, hex)")]
    MissingValue { tag: Tag },
    #[error("element {tag} has more than one of value, values, hex")]
    AmbiguousValue { tag: Tag },
}

/// One element: `value` for a text scalar, `values` for members already
/// split by the reader, `hex` for raw bytes.
///
/// # Examples
/// ```
/// use dicomvr_core::{ElementInput, RawValue};
///
/// let input: ElementInput =
///     serde_json::from_str(r#"{"tag": "0019,100A", "vr": "UN", "hex": "3c00"}"#)?;
/// let element = input.into_element()?;
/// assert_eq!(element.value(), &RawValue::from(vec![0x3cu8, 0x00]));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ElementInput {
    pub tag: String,
    pub vr: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub values: Option<Vec<String>>,
    #[serde(default)]
    pub hex: Option<String>,
}

impl ElementInput {
    pub fn into_element(self) -> Result<DataElement, InputError> {
        let tag: Tag = self.tag.parse()?;
        let value = match (self.value, self.values, self.hex) {
            (Some(text), None, None) => RawValue::from(text),
            (None, Some(values), None) => {
                RawValue::Multi(values.into_iter().map(RawScalar::from).collect())
            }
            (None, None, Some(hex)) => {
                let bytes = hex::decode(hex.trim()).map_err(|source| InputError::Hex { tag, source })?;
                RawValue::from(bytes)
            }
            (None, None, None) => return Err(InputError::MissingValue { tag }),
            _ => return Err(InputError::AmbiguousValue { tag }),
        };
        Ok(DataElement::new(tag, self.vr, value))
    }
}

/// A header's worth of elements plus the context needed to parse them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeaderInput {
    /// Manufacturer (0008,0070), used to pick a vendor when the options
    /// do not name one.
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub options: ParserOptions,
    pub elements: Vec<ElementInput>,
}

impl HeaderInput {
    pub fn parser_options(&self) -> ParserOptions {
        let mut options = self.options;
        if options.vendor.is_none() {
            options.vendor = self
                .manufacturer
                .as_deref()
                .and_then(Vendor::from_manufacturer);
        }
        options
    }

    pub fn into_elements(self) -> Result<Vec<DataElement>, InputError> {
        self.elements
            .into_iter()
            .map(ElementInput::into_element)
            .collect()
    }
}
