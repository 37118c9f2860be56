//! Parsers turning identifier text into typed identifiers.
//!
//! All shape parsers share one pipeline: split the text with the tokenizer,
//! reject parts containing a double quote, check the part count against the
//! shape's arity and finally build the value from the parts. Routine
//! identifiers, whose last part embeds an argument list, live in [`routine`].

mod routine;

pub use routine::{
    parse_schema_object_identifier_with_arguments,
    parse_schema_object_identifier_with_arguments_and_return_type,
};

use crate::error::IdentifierError;
use crate::identifier::{
    AccountIdentifier, AccountObjectIdentifier, DatabaseObjectIdentifier,
    ExternalObjectIdentifier, ObjectIdentifier, SchemaObjectIdentifier, TableColumnIdentifier,
};
use crate::options::TokenizerOptions;
use crate::tokenizer::split_parts;

pub(crate) const ACCOUNT_OBJECT_FORMAT: &str = "<account_object_name>";
pub(crate) const DATABASE_OBJECT_FORMAT: &str = "<database_name>.<database_object_name>";
pub(crate) const SCHEMA_OBJECT_FORMAT: &str = "<database_name>.<schema_name>.<schema_object_name>";
pub(crate) const TABLE_COLUMN_FORMAT: &str =
    "<database_name>.<schema_name>.<table_name>.<table_column_name>";
pub(crate) const ACCOUNT_FORMAT: &str = "<organization_name>.<account_name>";
pub(crate) const EXTERNAL_OBJECT_FORMAT: &str =
    "<organization_name>.<account_name>.<external_object_name>";

fn log_failure(err: &IdentifierError) {
    log::debug!("identifier parsing failed: {err}");
}

/// Split `text` on `.` and reject parts containing a double quote.
///
/// # Errors
///
/// Returns [`IdentifierError::Tokenize`] when the text is not a single line
/// of valid delimited text and [`IdentifierError::EmbeddedQuote`] when any
/// part contains `"`.
///
/// # Examples
///
/// ```rust
/// use objident::parse_identifier_string;
///
/// let parts = parse_identifier_string(r#""ab.c".def"#).unwrap();
/// assert_eq!(parts, vec!["ab.c".to_string(), "def".to_string()]);
/// assert!(parse_identifier_string(r#""ab""c".def"#).is_err());
/// ```
pub fn parse_identifier_string(text: &str) -> Result<Vec<String>, IdentifierError> {
    parse_identifier_string_with(text, &TokenizerOptions::default())
}

/// Like [`parse_identifier_string`] with explicit tokenizer options.
///
/// # Errors
///
/// See [`parse_identifier_string`]. An invalid delimiter in `options` is
/// reported as a tokenize error.
pub fn parse_identifier_string_with(
    text: &str,
    options: &TokenizerOptions,
) -> Result<Vec<String>, IdentifierError> {
    split_checked(text, text, options).inspect_err(log_failure)
}

/// Tokenize `text`, reporting `reported` as the input in quote errors.
fn split_checked(
    text: &str,
    reported: &str,
    options: &TokenizerOptions,
) -> Result<Vec<String>, IdentifierError> {
    let parts = split_parts(text, options)?;
    if parts.iter().any(|part| part.contains('"')) {
        return Err(IdentifierError::EmbeddedQuote {
            input: reported.to_string(),
        });
    }
    Ok(parts)
}

/// Split `text` into exactly `N` parts.
///
/// `reported` is the input named in quote and part count errors; it differs
/// from `text` when only a prefix of the caller's input is tokenized.
pub(crate) fn split_exact<const N: usize>(
    text: &str,
    reported: &str,
    format: &'static str,
) -> Result<[String; N], IdentifierError> {
    let parts = split_checked(text, reported, &TokenizerOptions::default())?;
    parts
        .try_into()
        .map_err(|parts: Vec<String>| IdentifierError::PartCount {
            input: reported.to_string(),
            actual: parts.len(),
            expected: N,
            format,
        })
}

fn parse_identifier<const N: usize, T>(
    text: &str,
    format: &'static str,
    construct: impl FnOnce([String; N]) -> T,
) -> Result<T, IdentifierError> {
    split_exact::<N>(text, text, format)
        .map(construct)
        .inspect_err(log_failure)
}

/// Parse a single-part, account-level identifier.
///
/// Unless the text is already wrapped in double quotes it is treated as one
/// literal part, so `abc.cde` names a single object called `abc.cde`.
///
/// # Errors
///
/// Fails when the quoted text is not valid delimited text, contains an
/// embedded quote, or holds more than one part.
///
/// # Examples
///
/// ```rust
/// use objident::{Identifier, parse_account_object_identifier};
///
/// let id = parse_account_object_identifier("abc.cde").unwrap();
/// assert_eq!(id.name(), "abc.cde");
/// ```
pub fn parse_account_object_identifier(
    text: &str,
) -> Result<AccountObjectIdentifier, IdentifierError> {
    let wrapped;
    let source = if text.starts_with('"') && text.ends_with('"') {
        text
    } else {
        wrapped = format!("\"{text}\"");
        wrapped.as_str()
    };
    parse_identifier::<1, _>(source, ACCOUNT_OBJECT_FORMAT, |[name]| {
        AccountObjectIdentifier::new(name)
    })
}

/// Parse `<database_name>.<database_object_name>`.
///
/// # Errors
///
/// Fails on invalid delimited text, embedded quotes, or a part count other
/// than two.
pub fn parse_database_object_identifier(
    text: &str,
) -> Result<DatabaseObjectIdentifier, IdentifierError> {
    parse_identifier::<2, _>(text, DATABASE_OBJECT_FORMAT, |[database, name]| {
        DatabaseObjectIdentifier::new(database, name)
    })
}

/// Parse `<database_name>.<schema_name>.<schema_object_name>`.
///
/// # Errors
///
/// Fails on invalid delimited text, embedded quotes, or a part count other
/// than three.
///
/// # Examples
///
/// ```rust
/// use objident::{Identifier, parse_schema_object_identifier};
///
/// let id = parse_schema_object_identifier(r#""ab.c"."cd.e"."ef.g""#).unwrap();
/// assert_eq!(id.database_name(), "ab.c");
/// assert_eq!(id.name(), "ef.g");
/// ```
pub fn parse_schema_object_identifier(
    text: &str,
) -> Result<SchemaObjectIdentifier, IdentifierError> {
    parse_identifier::<3, _>(text, SCHEMA_OBJECT_FORMAT, |[database, schema, name]| {
        SchemaObjectIdentifier::new(database, schema, name)
    })
}

/// Parse `<database_name>.<schema_name>.<table_name>.<table_column_name>`.
///
/// # Errors
///
/// Fails on invalid delimited text, embedded quotes, or a part count other
/// than four.
pub fn parse_table_column_identifier(
    text: &str,
) -> Result<TableColumnIdentifier, IdentifierError> {
    parse_identifier::<4, _>(
        text,
        TABLE_COLUMN_FORMAT,
        |[database, schema, table, column]| {
            TableColumnIdentifier::new(database, schema, table, column)
        },
    )
}

/// Parse `<organization_name>.<account_name>`.
///
/// # Errors
///
/// Fails on invalid delimited text, embedded quotes, or a part count other
/// than two.
pub fn parse_account_identifier(text: &str) -> Result<AccountIdentifier, IdentifierError> {
    parse_identifier::<2, _>(text, ACCOUNT_FORMAT, |[organization, account]| {
        AccountIdentifier::new(organization, account)
    })
}

/// Parse `<organization_name>.<account_name>.<external_object_name>`.
///
/// The text is indistinguishable from a schema object identifier; callers
/// expecting a cross-account reference must use this parser directly.
///
/// # Errors
///
/// Fails on invalid delimited text, embedded quotes, or a part count other
/// than three.
pub fn parse_external_object_identifier(
    text: &str,
) -> Result<ExternalObjectIdentifier, IdentifierError> {
    parse_identifier::<3, _>(
        text,
        EXTERNAL_OBJECT_FORMAT,
        |[organization, account, name]| {
            ExternalObjectIdentifier::new(
                AccountIdentifier::new(organization, account),
                AccountObjectIdentifier::new(name),
            )
        },
    )
}

/// Parse an identifier of unknown shape, choosing the shape by part count.
///
/// One to four parts map to account, database, schema and table column
/// objects respectively. Three parts always resolve to a schema object.
///
/// # Errors
///
/// Fails on invalid delimited text or embedded quotes, and with
/// [`IdentifierError::UnsupportedPartCount`] for any other number of parts.
///
/// # Examples
///
/// ```rust
/// use objident::{ObjectIdentifier, parse_object_identifier_string};
///
/// let id = parse_object_identifier_string("db.sch").unwrap();
/// assert!(matches!(id, ObjectIdentifier::DatabaseObject(_)));
/// ```
pub fn parse_object_identifier_string(text: &str) -> Result<ObjectIdentifier, IdentifierError> {
    let parts = parse_identifier_string(text)?;
    let identifier = match parts.as_slice() {
        [name] => AccountObjectIdentifier::new(name).into(),
        [database, name] => DatabaseObjectIdentifier::new(database, name).into(),
        [database, schema, name] => SchemaObjectIdentifier::new(database, schema, name).into(),
        [database, schema, table, column] => {
            TableColumnIdentifier::new(database, schema, table, column).into()
        }
        _ => {
            let err = IdentifierError::UnsupportedPartCount {
                input: text.to_string(),
                parts: parts.len(),
            };
            log_failure(&err);
            return Err(err);
        }
    };
    Ok(identifier)
}
