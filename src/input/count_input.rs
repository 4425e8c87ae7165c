//! The "select first N rows" prompt.
//!
//! Only ASCII digits are accepted as input; the buffer is validated on submit
//! so the bulk request never sees zero, an empty string or an overflowing
//! number.

use thiserror::Error;

/// Longest count accepted; nine digits keeps every value well inside `i64`.
pub const MAX_COUNT_DIGITS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountInputError {
    #[error("enter how many rows to select")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("the count must be at least 1")]
    Zero,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkCountInput {
    buffer: String,
    error: Option<CountInputError>,
}

impl BulkCountInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Validation error from the last rejected submit.
    pub fn error(&self) -> Option<&CountInputError> {
        self.error.as_ref()
    }

    /// Append a character. Non-digits and input past the length limit are
    /// ignored; returns whether the buffer changed.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.buffer.len() >= MAX_COUNT_DIGITS {
            return false;
        }
        self.buffer.push(c);
        self.error = None;
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.error = None;
        self.buffer.pop().is_some()
    }

    /// Parse the buffer as a positive row count.
    pub fn parse(&self) -> Result<i64, CountInputError> {
        parse_count(&self.buffer)
    }

    /// Parse and remember the error for display when it fails.
    pub fn submit(&mut self) -> Result<i64, CountInputError> {
        let result = self.parse();
        self.error = result.as_ref().err().cloned();
        result
    }
}

/// Parse user text as a bulk-selection count (>= 1).
pub fn parse_count(text: &str) -> Result<i64, CountInputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CountInputError::Empty);
    }
    let count: i64 = text
        .parse()
        .map_err(|_| CountInputError::NotANumber(text.to_string()))?;
    if count <= 0 {
        return Err(CountInputError::Zero);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("20"), Ok(20));
        assert_eq!(parse_count(" 7 "), Ok(7));
        assert_eq!(parse_count(""), Err(CountInputError::Empty));
        assert_eq!(parse_count("0"), Err(CountInputError::Zero));
        assert_eq!(parse_count("-4"), Err(CountInputError::Zero));
        assert_eq!(
            parse_count("twelve"),
            Err(CountInputError::NotANumber("twelve".into()))
        );
    }

    #[test]
    fn test_push_accepts_digits_only() {
        let mut input = BulkCountInput::new();
        assert!(input.push('1'));
        assert!(!input.push('x'));
        assert!(!input.push('-'));
        assert!(input.push('2'));
        assert_eq!(input.value(), "12");
        assert_eq!(input.parse(), Ok(12));
    }

    #[test]
    fn test_length_limit() {
        let mut input = BulkCountInput::new();
        for _ in 0..MAX_COUNT_DIGITS + 3 {
            input.push('9');
        }
        assert_eq!(input.value().len(), MAX_COUNT_DIGITS);
        assert_eq!(input.parse(), Ok(999_999_999));
    }

    #[test]
    fn test_submit_records_error_until_next_edit() {
        let mut input = BulkCountInput::new();
        input.push('0');
        assert_eq!(input.submit(), Err(CountInputError::Zero));
        assert_eq!(input.error(), Some(&CountInputError::Zero));

        input.backspace();
        assert!(input.error().is_none());
        assert_eq!(input.submit(), Err(CountInputError::Empty));

        input.push('5');
        assert_eq!(input.submit(), Ok(5));
        assert!(input.error().is_none());
    }
}
