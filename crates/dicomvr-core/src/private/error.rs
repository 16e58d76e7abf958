use thiserror::Error;

/// Errors returned by private value decoding.
///
/// # Examples
/// ```
/// use dicomvr_core::private::PrivateError;
///
/// let err = PrivateError::Misaligned { len: 23, width: 8 };
/// assert!(err.to_string().contains("not a multiple of 8"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrivateError {
    #[error("byte length {len} is not a multiple of {width}")]
    Misaligned { len: usize, width: usize },
    #[error("wrong byte length: need {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("unsupported integer width: {width}")]
    UnsupportedWidth { width: usize },
    #[error("value is empty")]
    Empty,
}
