//! Parsing of routine argument lists.
//!
//! Routine identifiers carry a parenthesised list of argument types after the
//! routine name, such as `(NUMBER, VECTOR(INT, 20))`. The list may also be
//! followed by `:<return type>` and individual arguments may be prefixed by a
//! name (`x NUMBER`). The grammar is expressed with `chumsky` so nested
//! parentheses inside a type stay attached to that type.

use std::fmt;

use chumsky::error::{Simple, SimpleReason};
use chumsky::prelude::*;
use phf::phf_set;
use thiserror::Error;

/// Type names made of two words, upper-cased and joined by a single space.
///
/// An argument whose first two words form one of these phrases is a bare type
/// rather than a name followed by a type.
static MULTI_WORD_TYPES: phf::Set<&'static str> = phf_set! {
    "BINARY VARYING",
    "CHAR VARYING",
    "CHARACTER VARYING",
    "DOUBLE PRECISION",
    "LONG VARBINARY",
    "LONG VARCHAR",
    "NATIONAL CHAR",
    "NATIONAL CHARACTER",
    "NATIONAL VARCHAR",
    "NCHAR VARYING",
    "TIME WITH",
    "TIME WITHOUT",
    "TIMESTAMP WITH",
    "TIMESTAMP WITHOUT",
};

/// The textual data type of a routine argument or return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DataType(String);

impl DataType {
    /// Wrap raw type text. Surrounding whitespace is removed.
    ///
    /// Empty text is accepted but has no written form: a routine whose only
    /// argument type is empty renders as `name()` and reads back with no
    /// arguments.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into().trim().to_string())
    }

    /// The type text as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DataType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DataType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DataType {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One entry of an argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedArgument {
    name: Option<String>,
    data_type: DataType,
}

impl ParsedArgument {
    /// The argument name, when the list spelled one out.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The argument type, without the name.
    #[must_use]
    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }
}

/// An ordered argument list with an optional return type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentList {
    arguments: Vec<ParsedArgument>,
    return_type: Option<DataType>,
}

impl ArgumentList {
    /// The arguments in the order they were written.
    #[must_use]
    pub fn arguments(&self) -> &[ParsedArgument] {
        &self.arguments
    }

    /// The type after the closing parenthesis, if any.
    #[must_use]
    pub fn return_type(&self) -> Option<&DataType> {
        self.return_type.as_ref()
    }

    /// Consume the list, keeping only the argument types in order.
    #[must_use]
    pub fn into_data_types(self) -> Vec<DataType> {
        self.arguments.into_iter().map(|a| a.data_type).collect()
    }
}

/// Errors raised while reading an argument list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentListError {
    /// The text does not follow the `(<type>, ...)[:<type>]` shape.
    #[error("malformed argument list {input}: {reason}")]
    Syntax { input: String, reason: String },
    /// A comma was not preceded or followed by a type.
    #[error("empty argument at position {position} in {input}")]
    EmptyArgument { input: String, position: usize },
    /// A `:` was not followed by a type.
    #[error("missing return type after ':' in {input}")]
    MissingReturnType { input: String },
}

fn balanced_group() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    recursive(|group| {
        filter(|c: &char| !matches!(c, '(' | ')'))
            .map(String::from)
            .or(group)
            .repeated()
            .map(|pieces: Vec<String>| pieces.concat())
            .delimited_by(just('('), just(')'))
            .map(|inner| format!("({inner})"))
    })
}

fn argument() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    filter(|c: &char| !matches!(c, '(' | ')' | ','))
        .map(String::from)
        .or(balanced_group())
        .repeated()
        .map(|pieces: Vec<String>| pieces.concat())
}

fn argument_list() -> impl Parser<char, (Vec<String>, Option<String>), Error = Simple<char>> {
    let return_type = filter(|c: &char| c.is_whitespace())
        .repeated()
        .ignore_then(just(':'))
        .ignore_then(any().repeated().collect::<String>());
    argument()
        .separated_by(just(','))
        .delimited_by(just('('), just(')'))
        .then(return_type.or_not())
        .then_ignore(end())
}

fn describe(err: &Simple<char>) -> String {
    match err.reason() {
        SimpleReason::Unclosed { delimiter, .. } => format!("unclosed delimiter '{delimiter}'"),
        SimpleReason::Custom(msg) => msg.clone(),
        SimpleReason::Unexpected => match err.found() {
            Some(c) => format!("unexpected '{c}' at {:?}", err.span()),
            None => "unexpected end of input".to_string(),
        },
    }
}

fn split_argument(text: &str) -> ParsedArgument {
    let head_end = text.find('(').unwrap_or(text.len());
    let head = text.get(..head_end).unwrap_or(text);
    let bare = || ParsedArgument {
        name: None,
        data_type: DataType::new(text),
    };
    let Some((first, _)) = head.split_once(char::is_whitespace) else {
        return bare();
    };
    let rest = text.get(first.len()..).unwrap_or_default().trim_start();
    // A parenthesised modifier belongs to the first word, as in `NUMBER (38, 0)`.
    if rest.starts_with('(') {
        return bare();
    }
    let second = rest
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default();
    let phrase = format!(
        "{} {}",
        first.to_ascii_uppercase(),
        second.to_ascii_uppercase()
    );
    if MULTI_WORD_TYPES.contains(phrase.as_str()) {
        return bare();
    }
    ParsedArgument {
        name: Some(first.to_string()),
        data_type: DataType::new(rest),
    }
}

/// Parse a parenthesised argument list such as `(NUMBER, VECTOR(INT, 20))`.
///
/// Arguments keep their order. `()` yields an empty list. A trailing
/// `:<type>` is returned as the list's return type.
///
/// # Errors
///
/// Returns [`ArgumentListError`] when the parentheses are unbalanced, when
/// text follows the list without a `:`, or when an argument or the return
/// type is empty.
///
/// # Examples
///
/// ```rust
/// use objident::arguments::parse_argument_list;
///
/// let list = parse_argument_list("(FLOAT, VECTOR(INT, 20)):NUMBER").unwrap();
/// let types: Vec<_> = list.arguments().iter().map(|a| a.data_type().to_string()).collect();
/// assert_eq!(types, vec!["FLOAT", "VECTOR(INT, 20)"]);
/// assert_eq!(list.return_type().map(|t| t.as_str()), Some("NUMBER"));
/// ```
pub fn parse_argument_list(text: &str) -> Result<ArgumentList, ArgumentListError> {
    let input = text.trim();
    let (raw_arguments, raw_return_type) = argument_list().parse(input).map_err(|errors| {
        let reason = errors
            .iter()
            .map(describe)
            .collect::<Vec<_>>()
            .join("; ");
        ArgumentListError::Syntax {
            input: input.to_string(),
            reason,
        }
    })?;

    let trimmed: Vec<&str> = raw_arguments.iter().map(|a| a.trim()).collect();
    let arguments = match trimmed.as_slice() {
        [only] if only.is_empty() => Vec::new(),
        all => {
            if let Some(position) = all.iter().position(|a| a.is_empty()) {
                return Err(ArgumentListError::EmptyArgument {
                    input: input.to_string(),
                    position,
                });
            }
            all.iter().map(|a| split_argument(a)).collect()
        }
    };

    let return_type = match raw_return_type {
        Some(raw) if raw.trim().is_empty() => {
            return Err(ArgumentListError::MissingReturnType {
                input: input.to_string(),
            });
        }
        Some(raw) => Some(DataType::new(raw)),
        None => None,
    };

    Ok(ArgumentList {
        arguments,
        return_type,
    })
}
