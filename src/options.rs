//! Configuration for the identifier tokenizer.

use crate::tokenizer::TokenizeError;

/// Delimiter used between identifier parts unless configured otherwise.
pub const DEFAULT_DELIMITER: char = '.';

/// Options controlling how identifier text is split into parts.
///
/// # Examples
///
/// ```rust
/// use objident::TokenizerOptions;
///
/// let options = TokenizerOptions::default().with_delimiter('|');
/// assert_eq!(options.delimiter(), '|');
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    delimiter: char,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl TokenizerOptions {
    /// Replace the part delimiter.
    #[must_use]
    pub fn with_delimiter(self, delimiter: char) -> Self {
        Self { delimiter }
    }

    /// The configured part delimiter.
    #[must_use]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Check that the delimiter does not collide with quoting or line breaks.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::InvalidDelimiter`] for `"`, `\r` and `\n`.
    pub fn validate(&self) -> Result<(), TokenizeError> {
        if matches!(self.delimiter, '"' | '\r' | '\n') {
            return Err(TokenizeError::InvalidDelimiter {
                delimiter: self.delimiter,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_to_dot() {
        assert_eq!(TokenizerOptions::default().delimiter(), '.');
    }

    #[rstest]
    #[case('"')]
    #[case('\n')]
    #[case('\r')]
    fn rejects_reserved_delimiters(#[case] delimiter: char) {
        let options = TokenizerOptions::default().with_delimiter(delimiter);
        assert_eq!(
            options.validate(),
            Err(TokenizeError::InvalidDelimiter { delimiter })
        );
    }
}
