use std::borrow::Cow;

use tracing::debug;

use super::Vendor;
use super::error::PrivateError;
use super::layout;
use super::reader::CsaReader;
use super::table::{PrivateTagEntry, Recipe, lookup};
use crate::dispatch::{apply_rule, standard_table};
use crate::element::{RawScalar, RawValue, Tag};
use crate::error::ParseError;
use crate::rules::RuleContext;
use crate::value::{ParsedValue, Value};

/// Resolve a vendor private element read as `UN`.
///
/// Tags without a table entry come back as `ParsedValue::Raw`.
///
/// # Examples
/// ```
/// use dicomvr_core::{ParsedValue, RawValue, Tag, Value, Vendor, private::resolve};
///
/// let raw = RawValue::from(vec![0x3cu8, 0x00]);
/// let parsed = resolve(Vendor::Siemens, Tag::new(0x0019, 0x100a), &raw)?;
/// assert_eq!(parsed, ParsedValue::Single(Value::Int(60)));
/// # Ok::<(), dicomvr_core::ParseError>(())
/// ```
pub fn resolve(vendor: Vendor, tag: Tag, raw: &RawValue) -> Result<ParsedValue, ParseError> {
    let ctx = RuleContext {
        tag,
        ..RuleContext::default()
    };
    resolve_with(vendor, tag, raw, &ctx)
}

pub(crate) fn resolve_with(
    vendor: Vendor,
    tag: Tag,
    raw: &RawValue,
    ctx: &RuleContext,
) -> Result<ParsedValue, ParseError> {
    let Some(entry) = lookup(vendor, tag) else {
        debug!(%vendor, %tag, "no private table entry, passing through");
        return Ok(ParsedValue::Raw(raw.clone()));
    };
    decode(entry, raw, ctx).map_err(|source| match source {
        Decode::Private(source) => ParseError::MalformedPrivateValue {
            vendor: entry.vendor,
            tag: entry.tag,
            source,
        },
        Decode::Standard(err) => err,
    })
}

enum Decode {
    Private(PrivateError),
    Standard(ParseError),
}

impl From<PrivateError> for Decode {
    fn from(value: PrivateError) -> Self {
        Decode::Private(value)
    }
}

fn decode(
    entry: &PrivateTagEntry,
    raw: &RawValue,
    ctx: &RuleContext,
) -> Result<ParsedValue, Decode> {
    let bytes = raw_bytes(raw);
    let reader = CsaReader::new(&bytes);

    let parsed = match entry.recipe {
        Recipe::DoubleArray => floats(reader.read_f64_le_array()?),
        Recipe::RoundedDoubleArray { decimals } => {
            let factor = 10f64.powi(decimals as i32);
            let values = reader.read_f64_le_array()?;
            floats(
                values
                    .into_iter()
                    .map(|value| (value * factor).round() / factor)
                    .collect(),
            )
        }
        Recipe::FirstDouble => ParsedValue::Single(Value::Float(reader.read_first_f64_le()?)),
        Recipe::TrimmedString => ParsedValue::Single(Value::Text(reader.read_trimmed_string())),
        Recipe::Integer { width, signed } => {
            ParsedValue::Single(Value::Int(reader.read_int_le(width, signed)?))
        }
        Recipe::IntegerArray { width, signed } => ParsedValue::Multi(
            reader
                .read_int_le_array(width, signed)?
                .into_iter()
                .map(Value::Int)
                .collect(),
        ),
        Recipe::Textual(vr) => {
            let text = RawValue::Single(RawScalar::Text(reader.read_trimmed_string()));
            match standard_table().rule(vr) {
                Some(rule) => apply_rule(rule, vr, &text, ctx).map_err(Decode::Standard)?,
                None => ParsedValue::Raw(text),
            }
        }
    };
    Ok(parsed)
}

fn floats(values: Vec<f64>) -> ParsedValue {
    ParsedValue::Multi(values.into_iter().map(Value::Float).collect())
}

/// Bytes of a `UN` value. A reader that split the bytes on the value
/// delimiter is undone by joining the members back.
fn raw_bytes(raw: &RawValue) -> Cow<'_, [u8]> {
    match raw {
        RawValue::Single(scalar) => Cow::Borrowed(scalar.as_bytes()),
        RawValue::Multi(members) => {
            let mut joined = Vec::new();
            for (index, member) in members.iter().enumerate() {
                if index > 0 {
                    joined.push(layout::DELIMITER_BYTE);
                }
                joined.extend_from_slice(member.as_bytes());
            }
            Cow::Owned(joined)
        }
    }
}
