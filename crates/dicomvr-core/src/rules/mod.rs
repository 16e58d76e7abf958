//! Per-VR conversion rules.
//!
//! Each rule turns one textual scalar into a typed `Value`:
//! - `layout`: delimiters, field widths and unit ratios (source of truth)
//! - `reader`: safe fixed-width field access over the text
//! - `numeric`, `temporal`, `code`: the rules themselves
//! - `error`: why a scalar was rejected
//!
//! Rules are pure functions; splitting multi-valued text and attaching the
//! element's tag/VR to failures is the dispatcher's job.

pub mod code;
pub mod error;
pub mod layout;
pub mod numeric;
pub(crate) mod reader;
pub mod temporal;

pub use error::RuleError;

use crate::element::Tag;
use crate::options::CodeStringPolicy;
use crate::value::Value;

/// Context a rule may consult besides the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    pub tag: Tag,
    pub code_strings: CodeStringPolicy,
}

impl Default for RuleContext {
    fn default() -> Self {
        Self {
            tag: Tag::new(0, 0),
            code_strings: CodeStringPolicy::default(),
        }
    }
}

/// A conversion from one raw scalar to a typed value.
pub type ConversionRule = fn(&str, &RuleContext) -> Result<Value, RuleError>;

/// Strip the NUL/space padding DICOM uses to reach an even length.
pub(crate) fn trim_padding(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}
