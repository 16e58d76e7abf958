use super::error::RuleError;

/// Fixed-width field access over one textual scalar.
pub struct TextReader<'a> {
    text: &'a str,
}

impl<'a> TextReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn require_len(&self, expected: &'static str, allowed: &[usize]) -> Result<(), RuleError> {
        if !allowed.contains(&self.text.len()) {
            return Err(RuleError::InvalidLength {
                expected,
                actual: self.text.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(
        &self,
        range: std::ops::Range<usize>,
        field: &'static str,
    ) -> Result<&'a str, RuleError> {
        self.text
            .get(range)
            .ok_or(RuleError::InvalidDigits { field })
    }

    pub fn read_digits(
        &self,
        range: std::ops::Range<usize>,
        field: &'static str,
    ) -> Result<u32, RuleError> {
        let digits = self.read_slice(range, field)?;
        parse_digits(digits, field)
    }

    /// Like `read_digits`, but a range past the end reads as `None`.
    pub fn read_optional_digits(
        &self,
        range: std::ops::Range<usize>,
        field: &'static str,
    ) -> Result<Option<u32>, RuleError> {
        if range.start >= self.text.len() {
            return Ok(None);
        }
        self.read_digits(range, field).map(Some)
    }
}

pub fn parse_digits(digits: &str, field: &'static str) -> Result<u32, RuleError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RuleError::InvalidDigits { field });
    }
    digits
        .parse::<u32>()
        .map_err(|_| RuleError::InvalidDigits { field })
}

#[cfg(test)]
mod tests {
    use super::{TextReader, parse_digits};
    use crate::rules::error::RuleError;

    #[test]
    fn reads_fixed_fields() {
        let reader = TextReader::new("20180501");
        assert_eq!(reader.read_digits(0..4, "year"), Ok(2018));
        assert_eq!(reader.read_digits(4..6, "month"), Ok(5));
        assert_eq!(reader.read_optional_digits(8..10, "hour"), Ok(None));
    }

    #[test]
    fn rejects_signs_and_letters() {
        assert_eq!(
            parse_digits("+1", "day"),
            Err(RuleError::InvalidDigits { field: "day" })
        );
        assert!(parse_digits("1a", "day").is_err());
        assert!(parse_digits("", "day").is_err());
    }

    #[test]
    fn short_text_fails_length_check() {
        let reader = TextReader::new("2018");
        let err = reader.require_len("YYYYMMDD", &[8]).unwrap_err();
        assert!(err.to_string().contains("expected YYYYMMDD, got 4"));
        assert!(reader.read_digits(4..6, "month").is_err());
    }
}
