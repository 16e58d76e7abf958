//! Parser configuration.

use serde::{Deserialize, Serialize};

use crate::private::Vendor;

/// What to do with a Code String outside its attribute's defined terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStringPolicy {
    /// Keep the trimmed value.
    #[default]
    Lenient,
    /// Fail the element with `UnparsableValue`.
    Strict,
}

/// Options shared by every parse call of a `Parser`.
///
/// # Examples
/// ```
/// use dicomvr_core::{CodeStringPolicy, ParserOptions, Vendor};
///
/// let options = ParserOptions::default()
///     .with_vendor(Vendor::Siemens)
///     .with_code_strings(CodeStringPolicy::Strict);
/// assert_eq!(options.vendor, Some(Vendor::Siemens));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Vendor whose private table resolves `UN` elements. `None` passes
    /// every private element through.
    pub vendor: Option<Vendor>,
    pub code_strings: CodeStringPolicy,
}

impl ParserOptions {
    pub fn with_vendor(mut self, vendor: Vendor) -> Self {
        self.vendor = Some(vendor);
        self
    }

    pub fn with_code_strings(mut self, policy: CodeStringPolicy) -> Self {
        self.code_strings = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{CodeStringPolicy, ParserOptions};
    use crate::private::Vendor;

    #[test]
    fn defaults_are_lenient_without_vendor() {
        let options = ParserOptions::default();
        assert_eq!(options.vendor, None);
        assert_eq!(options.code_strings, CodeStringPolicy::Lenient);
    }

    #[test]
    fn deserializes_partial_json() {
        let options: ParserOptions =
            serde_json::from_str(r#"{"vendor":"siemens"}"#).expect("options json");
        assert_eq!(options.vendor, Some(Vendor::Siemens));
        assert_eq!(options.code_strings, CodeStringPolicy::Lenient);

        let options: ParserOptions =
            serde_json::from_str(r#"{"code_strings":"strict"}"#).expect("options json");
        assert_eq!(options.code_strings, CodeStringPolicy::Strict);
    }
}
