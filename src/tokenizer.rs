//! Lexical splitting of delimited identifier text.
//!
//! Identifier text follows the rules of a single CSV record: parts are
//! separated by a single-character delimiter, a part may be wrapped in double
//! quotes, and a literal quote inside a quoted part is written as `""`. The
//! `logos` lexer recognises quoted runs, line breaks and plain text; a small
//! record builder then assembles the parts and reports malformed quoting with
//! a line and column locator.

use logos::Logos;
use thiserror::Error;

use crate::options::TokenizerOptions;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r#""([^"]|"")*""#)]
    Quoted,
    // A quote that is never closed. Matches every prefix of a quoted run.
    #[regex(r#""([^"]|"")*"#)]
    Unterminated,
    #[regex(r"\r\n|\n")]
    LineBreak,
    // Only ends a record as part of `\r\n`.
    #[token("\r")]
    CarriageReturn,
    #[regex(r#"[^"\r\n]+"#)]
    Text,
}

/// Why a line could not be split into parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxReason {
    /// A double quote appeared inside a part that did not start with one.
    #[error("bare \" in non-quoted-field")]
    BareQuote,
    /// A quoted part was never closed, or text followed its closing quote.
    #[error("extraneous or missing \" in quoted-field")]
    Quote,
    /// The lexer could not classify the input.
    #[error("unrecognised input")]
    Unrecognised,
}

/// Errors produced while splitting identifier text into parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// The text is not valid delimited text.
    #[error(
        "unable to read identifier: {input}, err = parse error on line {line}, column {column}: {reason}"
    )]
    Syntax {
        input: String,
        line: usize,
        column: usize,
        reason: SyntaxReason,
    },
    /// The text does not hold exactly one record.
    #[error("incompatible identifier: {input} (expected exactly one line, found {lines})")]
    LineCount { input: String, lines: usize },
    /// The configured delimiter collides with the quoting rules.
    #[error("invalid identifier delimiter {delimiter:?}: quotes and line breaks are reserved")]
    InvalidDelimiter { delimiter: char },
}

/// 1-based line and column of a byte offset, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Locate `offset` within `src`.
    ///
    /// Offsets past the end of `src` are clamped to the end.
    #[must_use]
    pub fn locate(src: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for (idx, c) in src.char_indices() {
            if idx >= offset {
                break;
            }
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Empty,
    Bare,
    Quoted,
}

struct RecordBuilder<'a> {
    src: &'a str,
    delimiter: char,
    records: Vec<Vec<String>>,
    fields: Vec<String>,
    field: String,
    state: FieldState,
    started: bool,
}

impl<'a> RecordBuilder<'a> {
    fn new(src: &'a str, delimiter: char) -> Self {
        Self {
            src,
            delimiter,
            records: Vec::new(),
            fields: Vec::new(),
            field: String::new(),
            state: FieldState::Empty,
            started: false,
        }
    }

    fn error(&self, offset: usize, reason: SyntaxReason) -> TokenizeError {
        let Position { line, column } = Position::locate(self.src, offset);
        TokenizeError::Syntax {
            input: self.src.to_string(),
            line,
            column,
            reason,
        }
    }

    fn finish_field(&mut self) {
        self.fields.push(std::mem::take(&mut self.field));
        self.state = FieldState::Empty;
    }

    fn finish_record(&mut self) {
        if !self.started {
            // Blank lines carry no record.
            return;
        }
        self.finish_field();
        self.records.push(std::mem::take(&mut self.fields));
        self.started = false;
    }

    fn push_text(&mut self, text: &str, start: usize) -> Result<(), TokenizeError> {
        for (idx, c) in text.char_indices() {
            self.started = true;
            if c == self.delimiter {
                self.finish_field();
                continue;
            }
            if self.state == FieldState::Quoted {
                return Err(self.error(start + idx, SyntaxReason::Quote));
            }
            self.field.push(c);
            self.state = FieldState::Bare;
        }
        Ok(())
    }

    fn push_quoted(&mut self, text: &str, span: &Span) -> Result<(), TokenizeError> {
        match self.state {
            FieldState::Empty => {}
            FieldState::Bare => return Err(self.error(span.start, SyntaxReason::BareQuote)),
            FieldState::Quoted => return Err(self.error(span.start, SyntaxReason::Quote)),
        }
        let inner = text
            .get(1..text.len().saturating_sub(1))
            .unwrap_or_default();
        self.field = inner.replace("\"\"", "\"");
        self.state = FieldState::Quoted;
        self.started = true;
        Ok(())
    }

    fn push_unterminated(&self, span: &Span) -> TokenizeError {
        if self.state == FieldState::Bare {
            self.error(span.start, SyntaxReason::BareQuote)
        } else {
            self.error(span.end, SyntaxReason::Quote)
        }
    }
}

fn read_records(src: &str, delimiter: char) -> Result<Vec<Vec<String>>, TokenizeError> {
    let mut lexer = Token::lexer(src);
    let mut builder = RecordBuilder::new(src, delimiter);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = src.get(span.clone()).unwrap_or_default();
        let Ok(token) = result else {
            return Err(builder.error(span.start, SyntaxReason::Unrecognised));
        };
        log::trace!("identifier token {token:?} at {span:?}");
        match token {
            Token::Quoted => builder.push_quoted(text, &span)?,
            Token::Unterminated => return Err(builder.push_unterminated(&span)),
            Token::LineBreak => builder.finish_record(),
            Token::Text | Token::CarriageReturn => builder.push_text(text, span.start)?,
        }
    }
    builder.finish_record();
    Ok(builder.records)
}

/// Split a single line of identifier text into its parts.
///
/// Parts are returned in source order with quoting resolved: the surrounding
/// quotes are removed and `""` is collapsed to `"`. Embedded quotes are kept
/// in the output; rejecting them is left to the identifier parsers.
///
/// # Errors
///
/// Returns [`TokenizeError::Syntax`] for unbalanced or misplaced quotes,
/// [`TokenizeError::LineCount`] when the text holds zero or several records
/// (the empty string holds none), and [`TokenizeError::InvalidDelimiter`]
/// when `options` names a reserved delimiter.
///
/// # Examples
///
/// ```rust
/// use objident::{TokenizerOptions, split_parts};
///
/// let parts = split_parts(r#""ab.c".def"#, &TokenizerOptions::default()).unwrap();
/// assert_eq!(parts, vec!["ab.c".to_string(), "def".to_string()]);
/// ```
pub fn split_parts(src: &str, options: &TokenizerOptions) -> Result<Vec<String>, TokenizeError> {
    options.validate()?;
    let mut records = read_records(src, options.delimiter())?;
    if records.len() != 1 {
        return Err(TokenizeError::LineCount {
            input: src.to_string(),
            lines: records.len(),
        });
    }
    Ok(records.pop().unwrap_or_default())
}
