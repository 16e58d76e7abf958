//! Serializable parse results.

use serde::Serialize;

use crate::dispatch::Parser;
use crate::element::{DataElement, Tag};
use crate::error::ParseError;
use crate::input::{HeaderInput, InputError};
use crate::value::ParsedValue;

/// Current version of the JSON result layout.
pub const REPORT_VERSION: u32 = 1;

/// One parsed element. Exactly one of `value` and `error` is present.
///
/// # Examples
/// ```
/// use dicomvr_core::{DataElement, ElementReport, Parser, Tag};
///
/// let element = DataElement::new(Tag::new(0x0020, 0x0011), "IS", "13");
/// let report = ElementReport::new(&element, Parser::default().parse(&element));
/// let json = serde_json::to_string(&report)?;
/// assert_eq!(json, r#"{"tag":"(0020,0011)","vr":"IS","value":13}"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ElementReport {
    pub tag: Tag,
    pub vr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ParsedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ElementReport {
    pub fn new(element: &DataElement, result: Result<ParsedValue, ParseError>) -> Self {
        let (value, error) = match result {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            tag: element.tag(),
            vr: element.vr_code().to_string(),
            keyword: None,
            value,
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Results for a whole header, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    pub report_version: u32,
    pub results: Vec<ElementReport>,
}

impl HeaderReport {
    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_error()).count()
    }
}

/// Parse every element with `parser`, keeping one report per element.
///
/// Elements that resolve through a vendor table carry the entry's keyword.
pub fn report_elements(parser: &Parser, elements: &[DataElement]) -> HeaderReport {
    let vendor = parser.options().vendor;
    let results = elements
        .iter()
        .zip(parser.parse_all(elements))
        .map(|(element, result)| {
            let mut report = ElementReport::new(element, result);
            report.keyword = vendor
                .filter(|_| element.vr_code() == "UN")
                .and_then(|vendor| crate::private::lookup(vendor, element.tag()))
                .map(|entry| entry.keyword);
            report
        })
        .collect();
    HeaderReport {
        report_version: REPORT_VERSION,
        results,
    }
}

/// Build a parser from the header's options and parse all of its elements.
///
/// Fails only when the input itself is malformed; per-element parse
/// failures are recorded in the report.
pub fn parse_header(header: HeaderInput) -> Result<HeaderReport, InputError> {
    let parser = Parser::new(header.parser_options());
    let elements = header.into_elements()?;
    Ok(report_elements(&parser, &elements))
}
