//! Read-only element views supplied by the header reader.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::rules::layout::VALUE_DELIMITER;
use crate::vr::Vr;

/// Attribute tag as a (group, element) pair.
///
/// # Examples
/// ```
/// use dicomvr_core::Tag;
///
/// let tag: Tag = "0018,0081".parse()?;
/// assert_eq!(tag, Tag::new(0x0018, 0x0081));
/// assert_eq!(tag.to_string(), "(0018,0081)");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    pub group: u16,
    pub element: u16,
}

impl Tag {
    pub const fn new(group: u16, element: u16) -> Self {
        Self { group, element }
    }

    /// Private tags live in odd-numbered groups.
    pub const fn is_private(self) -> bool {
        self.group % 2 == 1
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.group, self.element)
    }
}

impl Serialize for Tag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Error)]
#[error("invalid tag '{text}': expected GGGG,EEEE")]
pub struct TagParseError {
    pub text: String,
}

impl FromStr for Tag {
    type Err = TagParseError;

    /// Accepts `GGGG,EEEE`, `(GGGG,EEEE)` and `GGGGEEEE`, case-insensitive hex.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let err = || TagParseError {
            text: text.to_string(),
        };
        let inner = text
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim();
        let (group, element) = match inner.split_once(',') {
            Some((group, element)) => (group.trim(), element.trim()),
            None if inner.len() == 8 && inner.is_ascii() => inner.split_at(4),
            None => return Err(err()),
        };
        let is_hex =
            |field: &str| field.len() == 4 && field.bytes().all(|b| b.is_ascii_hexdigit());
        if !is_hex(group) || !is_hex(element) {
            return Err(err());
        }
        let group = u16::from_str_radix(group, 16).map_err(|_| err())?;
        let element = u16::from_str_radix(element, 16).map_err(|_| err())?;
        Ok(Tag::new(group, element))
    }
}

/// One raw value as it came out of the header: text or undecoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawScalar {
    Text(String),
    Bytes(Vec<u8>),
}

impl RawScalar {
    /// Raw bytes of the scalar; text is viewed as its UTF-8 encoding.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RawScalar::Text(text) => text.as_bytes(),
            RawScalar::Bytes(bytes) => bytes,
        }
    }
}

impl fmt::Display for RawScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawScalar::Text(text) => f.write_str(text),
            RawScalar::Bytes(bytes) => f.write_str(&hex::encode(bytes)),
        }
    }
}

impl Serialize for RawScalar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawScalar::Text(text) => serializer.serialize_str(text),
            RawScalar::Bytes(_) => serializer.collect_str(self),
        }
    }
}

impl From<&str> for RawScalar {
    fn from(value: &str) -> Self {
        RawScalar::Text(value.to_string())
    }
}

impl From<String> for RawScalar {
    fn from(value: String) -> Self {
        RawScalar::Text(value)
    }
}

impl From<Vec<u8>> for RawScalar {
    fn from(value: Vec<u8>) -> Self {
        RawScalar::Bytes(value)
    }
}

impl From<&[u8]> for RawScalar {
    fn from(value: &[u8]) -> Self {
        RawScalar::Bytes(value.to_vec())
    }
}

/// Raw element value: a scalar, or the members of a multi-valued element
/// when the header reader already split them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Single(RawScalar),
    Multi(Vec<RawScalar>),
}

impl RawValue {
    pub fn multiplicity(&self) -> usize {
        match self {
            RawValue::Single(RawScalar::Text(text)) => text.split(VALUE_DELIMITER).count(),
            RawValue::Single(RawScalar::Bytes(_)) => 1,
            RawValue::Multi(members) => members.len(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Single(scalar) => scalar.fmt(f),
            RawValue::Multi(members) => {
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        write!(f, "{VALUE_DELIMITER}")?;
                    }
                    member.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

impl From<RawScalar> for RawValue {
    fn from(value: RawScalar) -> Self {
        RawValue::Single(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Single(value.into())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Single(value.into())
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(value: Vec<u8>) -> Self {
        RawValue::Single(value.into())
    }
}

impl From<&[u8]> for RawValue {
    fn from(value: &[u8]) -> Self {
        RawValue::Single(value.into())
    }
}

/// A single attribute instance as read from a header.
///
/// The VR is kept as the code the reader saw; it is only checked against
/// the recognized set when the element is parsed.
///
/// # Examples
/// ```
/// use dicomvr_core::{DataElement, Tag};
///
/// let element = DataElement::new(Tag::new(0x0008, 0x0060), "CS", "MR");
/// assert_eq!(element.vr_code(), "CS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataElement {
    tag: Tag,
    vr: String,
    value: RawValue,
}

impl DataElement {
    pub fn new(tag: Tag, vr: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            tag,
            vr: vr.into(),
            value: value.into(),
        }
    }

    /// Element whose members were already split by the reader.
    pub fn with_values<I, T>(tag: Tag, vr: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RawScalar>,
    {
        Self {
            tag,
            vr: vr.into(),
            value: RawValue::Multi(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn vr_code(&self) -> &str {
        &self.vr
    }

    /// The declared VR, if it is a recognized code.
    pub fn vr(&self) -> Option<Vr> {
        Vr::from_code(&self.vr)
    }

    pub fn value(&self) -> &RawValue {
        &self.value
    }
}
