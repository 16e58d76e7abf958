//! VR dispatch: one conversion rule per VR, looked up per element.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use tracing::trace;

use crate::element::{DataElement, RawScalar, RawValue};
use crate::error::ParseError;
use crate::options::ParserOptions;
use crate::private::resolver::resolve_with;
use crate::rules::layout::VALUE_DELIMITER;
use crate::rules::{ConversionRule, RuleContext, RuleError, code, numeric, temporal};
use crate::value::{ParsedValue, Value};
use crate::vr::Vr;

/// Conversion rules keyed by VR. VRs without an entry pass through.
#[derive(Clone)]
pub struct VrTable {
    rules: HashMap<Vr, ConversionRule>,
}

impl VrTable {
    /// The rules for the textual VRs that need conversion.
    pub fn standard() -> Self {
        let rules: [(Vr, ConversionRule); 7] = [
            (Vr::AS, numeric::parse_age_string),
            (Vr::DS, numeric::parse_decimal_string),
            (Vr::IS, numeric::parse_integer_string),
            (Vr::DA, temporal::parse_date),
            (Vr::TM, temporal::parse_time),
            (Vr::DT, temporal::parse_datetime),
            (Vr::CS, code::parse_code_string),
        ];
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn rule(&self, vr: Vr) -> Option<ConversionRule> {
        self.rules.get(&vr).copied()
    }

    pub fn is_registered(&self, vr: Vr) -> bool {
        self.rules.contains_key(&vr)
    }
}

impl fmt::Debug for VrTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<_> = self.rules.keys().collect();
        registered.sort();
        f.debug_set().entries(registered).finish()
    }
}

static STANDARD: LazyLock<VrTable> = LazyLock::new(VrTable::standard);

/// Process-wide standard table, built on first use and never mutated.
pub fn standard_table() -> &'static VrTable {
    &STANDARD
}

/// Parses data elements into typed values.
///
/// A `Parser` is cheap to copy and holds no mutable state, so one instance
/// can be shared across threads.
///
/// # Examples
/// ```
/// use dicomvr_core::{DataElement, ParsedValue, Parser, Tag, Value};
///
/// let parser = Parser::default();
/// let element = DataElement::new(Tag::new(0x0018, 0x0081), "DS", "94");
/// assert_eq!(parser.parse(&element)?, ParsedValue::Single(Value::Float(94.0)));
///
/// let element = DataElement::new(Tag::new(0x0018, 0x0021), "CS", "SK\\SP");
/// assert_eq!(
///     parser.parse(&element)?,
///     ParsedValue::Multi(vec![Value::Text("SK".into()), Value::Text("SP".into())])
/// );
/// # Ok::<(), dicomvr_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    table: &'static VrTable,
    options: ParserOptions,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl Parser {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            table: standard_table(),
            options,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn parse(&self, element: &DataElement) -> Result<ParsedValue, ParseError> {
        let vr = element.vr().ok_or_else(|| ParseError::UnsupportedVr {
            code: element.vr_code().to_string(),
        })?;
        let ctx = RuleContext {
            tag: element.tag(),
            code_strings: self.options.code_strings,
        };

        if vr == Vr::UN {
            return match self.options.vendor {
                Some(vendor) => resolve_with(vendor, element.tag(), element.value(), &ctx),
                None => {
                    trace!(tag = %element.tag(), "UN element without vendor, passing through");
                    Ok(ParsedValue::Raw(element.value().clone()))
                }
            };
        }

        match self.table.rule(vr) {
            Some(rule) => apply_rule(rule, vr, element.value(), &ctx),
            None => {
                trace!(tag = %element.tag(), %vr, "no conversion rule, passing through");
                Ok(ParsedValue::Raw(element.value().clone()))
            }
        }
    }

    /// Parse every element, keeping one result per element in input order.
    pub fn parse_all(&self, elements: &[DataElement]) -> Vec<Result<ParsedValue, ParseError>> {
        elements.iter().map(|element| self.parse(element)).collect()
    }
}

/// Apply `rule` to every member of `raw`.
///
/// A text scalar is split on the value delimiter and collapses back to a
/// single value when it holds one member; pre-split members are not split
/// again and always yield a sequence.
pub(crate) fn apply_rule(
    rule: ConversionRule,
    vr: Vr,
    raw: &RawValue,
    ctx: &RuleContext,
) -> Result<ParsedValue, ParseError> {
    let convert = |text: &str| {
        rule(text, ctx).map_err(|source| ParseError::UnparsableValue {
            vr,
            tag: ctx.tag,
            value: text.to_string(),
            source,
        })
    };

    match raw {
        RawValue::Single(scalar) => {
            let text = scalar_text(scalar, vr, ctx)?;
            let values = text
                .split(VALUE_DELIMITER)
                .map(&convert)
                .collect::<Result<Vec<Value>, _>>()?;
            Ok(ParsedValue::from_values(values))
        }
        RawValue::Multi(members) => {
            let mut values = Vec::with_capacity(members.len());
            for member in members {
                let text = scalar_text(member, vr, ctx)?;
                values.push(convert(text.as_ref())?);
            }
            Ok(ParsedValue::Multi(values))
        }
    }
}

fn scalar_text<'a>(
    scalar: &'a RawScalar,
    vr: Vr,
    ctx: &RuleContext,
) -> Result<Cow<'a, str>, ParseError> {
    match scalar {
        RawScalar::Text(text) => Ok(Cow::Borrowed(text)),
        RawScalar::Bytes(bytes) => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|_| ParseError::UnparsableValue {
                vr,
                tag: ctx.tag,
                value: scalar.to_string(),
                source: RuleError::NotText,
            }),
    }
}
