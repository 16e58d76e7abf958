use thiserror::Error;

/// Why a single raw scalar could not be converted.
///
/// The dispatcher wraps these with the element's VR, tag and raw text.
///
/// # Examples
/// ```
/// use dicomvr_core::rules::RuleError;
///
/// let err = RuleError::InvalidAgeUnit { unit: 'X' };
/// assert!(err.to_string().contains("age unit"));
/// ```
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    #[error("invalid number: '{text}'")]
    InvalidNumber { text: String },
    #[error("invalid age unit: '{unit}' (expected D, W, M or Y)")]
    InvalidAgeUnit { unit: char },
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: &'static str, actual: usize },
    #[error("invalid digits in {field}")]
    InvalidDigits { field: &'static str },
    #[error("value out of range: {0}")]
    OutOfRange(#[from] time::error::ComponentRange),
    #[error("'{value}' is not one of the defined terms ({allowed})")]
    NotInEnumeration { value: String, allowed: String },
    #[error("value is not valid text")]
    NotText,
}
