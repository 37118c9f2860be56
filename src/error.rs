//! Errors returned by the identifier parsers.

use thiserror::Error;

use crate::arguments::ArgumentListError;
use crate::tokenizer::TokenizeError;

/// Broad category of an [`IdentifierError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text is not valid delimited text.
    Tokenize,
    /// The text uses a feature the grammar does not support.
    Unsupported,
    /// The text has the wrong number of parts for the requested shape.
    PartCount,
    /// A shape-specific structural expectation was not met.
    Malformed,
}

/// Errors produced while turning text into an identifier.
///
/// Every variant carries the text that was being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The text could not be split into parts.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    /// At least one part contains a double quote.
    #[error(
        "unable to parse identifier: {input}, currently identifiers containing double quotes are not supported"
    )]
    EmbeddedQuote { input: String },
    /// The best-effort parser found no shape with this many parts.
    #[error("unsupported identifier: {input} (number of parts: {parts})")]
    UnsupportedPartCount { input: String, parts: usize },
    /// The part count does not match the requested shape.
    #[error(
        "unexpected number of parts {actual} in identifier {input}, expected {expected} in a form of \"{format}\""
    )]
    PartCount {
        input: String,
        actual: usize,
        expected: usize,
        format: &'static str,
    },
    /// A shape-specific rule was broken, such as a routine without `(`.
    #[error("unable to parse identifier: {reason} (identifier: {input})")]
    Malformed { input: String, reason: String },
    /// The argument list of a routine identifier could not be read.
    #[error("unable to parse identifier: {input}, invalid arguments: {source}")]
    Arguments {
        input: String,
        #[source]
        source: ArgumentListError,
    },
}

impl IdentifierError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Tokenize(_) => ErrorKind::Tokenize,
            Self::EmbeddedQuote { .. } | Self::UnsupportedPartCount { .. } => {
                ErrorKind::Unsupported
            }
            Self::PartCount { .. } => ErrorKind::PartCount,
            Self::Malformed { .. } | Self::Arguments { .. } => ErrorKind::Malformed,
        }
    }

    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
