//! VR-driven value extraction for DICOM data elements.
//!
//! A header reader hands over elements (tag, VR code, raw value); the
//! `Parser` looks up the conversion rule registered for the VR and returns
//! typed values: floats, integers, dates, times, date times, codes, or a
//! sequence of them when the element is multi-valued. VRs without a rule
//! pass their raw value through unchanged. Elements read as `UN` are
//! resolved through a vendor private tag table, which names the real VR and
//! how to decode the packed bytes (Siemens CSA-style doubles, integers,
//! padded strings).
//!
//! Parsing is pure and does no I/O. The VR table and private tag tables are
//! built once and only read afterwards, so a `Parser` can be used from many
//! threads at once.
//!
//! Layout:
//! - `vr`: the recognized VR codes
//! - `element`: read-only element views supplied by the caller
//! - `rules`: per-VR conversion rules (layout/reader/rules/error)
//! - `dispatch`: VR table and `Parser`
//! - `private`: vendor private tag resolution (layout/reader/table/resolver/error)
//! - `value`: typed output
//! - `input`/`report`: serde schemas for callers that exchange elements as JSON
//!
//! # Examples
//! ```
//! use dicomvr_core::{DataElement, ParsedValue, Parser, ParserOptions, Tag, Value, Vendor};
//!
//! let parser = Parser::new(ParserOptions::default().with_vendor(Vendor::Siemens));
//!
//! let age = DataElement::new(Tag::new(0x0010, 0x1010), "AS", "027Y");
//! assert_eq!(parser.parse(&age)?, ParsedValue::Single(Value::Float(27.0)));
//!
//! let directionality = DataElement::new(Tag::new(0x0019, 0x100d), "UN", b"DIRECTIONAL ".to_vec());
//! assert_eq!(
//!     parser.parse(&directionality)?,
//!     ParsedValue::Single(Value::Text("DIRECTIONAL".to_string()))
//! );
//! # Ok::<(), dicomvr_core::ParseError>(())
//! ```

mod dispatch;
mod element;
mod error;
mod input;
mod options;
pub mod private;
mod report;
pub mod rules;
mod value;
mod vr;

pub use dispatch::{Parser, VrTable, standard_table};
pub use element::{DataElement, RawScalar, RawValue, Tag, TagParseError};
pub use error::ParseError;
pub use input::{ElementInput, HeaderInput, InputError};
pub use options::{CodeStringPolicy, ParserOptions};
pub use private::{UnknownVendorError, Vendor};
pub use report::{ElementReport, HeaderReport, REPORT_VERSION, parse_header, report_elements};
pub use value::{ParsedValue, Value};
pub use vr::Vr;
