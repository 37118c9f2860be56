//! Parsers for routine identifiers that carry an argument list.
//!
//! The routine name and its argument list are written without a delimiter
//! between them (`db.sch.fn(NUMBER, VARCHAR)`), and the list may contain
//! dots, commas and nested parentheses. Parsing therefore happens in two
//! phases: the dotted address is tokenized on its own and the parenthesised
//! remainder is handed to [`parse_argument_list`].

use super::{SCHEMA_OBJECT_FORMAT, log_failure, split_exact};
use crate::arguments::parse_argument_list;
use crate::error::IdentifierError;
use crate::identifier::SchemaObjectIdentifierWithArguments;

/// Byte offset of the first `needle` outside double quotes.
fn find_unquoted(text: &str, needle: char) -> Option<usize> {
    let mut quoted = false;
    for (idx, c) in text.char_indices() {
        if c == '"' {
            quoted = !quoted;
        } else if c == needle && !quoted {
            return Some(idx);
        }
    }
    None
}

/// Builds the identifier once the address parts are known.
///
/// `arguments` starts at the opening parenthesis. A `:<type>` suffix after
/// the closing parenthesis is discarded when `allow_return_type` is set and
/// rejected otherwise.
fn with_argument_list(
    input: &str,
    [database, schema, name]: [String; 3],
    arguments: &str,
    allow_return_type: bool,
) -> Result<SchemaObjectIdentifierWithArguments, IdentifierError> {
    let list = parse_argument_list(arguments).map_err(|source| IdentifierError::Arguments {
        input: input.to_string(),
        source,
    })?;
    if let Some(return_type) = list.return_type() {
        if !allow_return_type {
            return Err(IdentifierError::malformed(
                input,
                format!("unexpected return type '{return_type}'"),
            ));
        }
        log::trace!("discarding return type {return_type} of {input}");
    }
    Ok(SchemaObjectIdentifierWithArguments::new(
        database,
        schema,
        name,
        list.into_data_types(),
    ))
}

fn parse_with_arguments(
    text: &str,
) -> Result<SchemaObjectIdentifierWithArguments, IdentifierError> {
    let Some(open) = find_unquoted(text, '(') else {
        return Err(IdentifierError::malformed(text, "'(' not present"));
    };
    let (address, arguments) = text.split_at(open);
    let parts = split_exact::<3>(address, text, SCHEMA_OBJECT_FORMAT)?;
    with_argument_list(text, parts, arguments, false)
}

/// Parse `<database>.<schema>.<name>(<type>, ...)`.
///
/// The address ends at the first `(` outside double quotes. The argument
/// types keep their order, and nested parentheses such as
/// `VECTOR(INT, 20)` stay inside a single argument.
///
/// # Errors
///
/// Returns [`IdentifierError::Malformed`] when no `(` is present or the list
/// is followed by a return type, [`IdentifierError::Arguments`] when the
/// argument list is malformed, and the usual tokenize, quote and part count
/// errors for the address.
///
/// # Examples
///
/// ```rust
/// use objident::{Identifier, parse_schema_object_identifier_with_arguments};
///
/// let id = parse_schema_object_identifier_with_arguments("abc.def.ghi(FLOAT, VECTOR(INT, 20))")
///     .unwrap();
/// assert_eq!(id.name(), "ghi");
/// assert_eq!(id.argument_data_types().len(), 2);
/// ```
pub fn parse_schema_object_identifier_with_arguments(
    text: &str,
) -> Result<SchemaObjectIdentifierWithArguments, IdentifierError> {
    parse_with_arguments(text).inspect_err(log_failure)
}

fn parse_with_arguments_and_return_type(
    text: &str,
) -> Result<SchemaObjectIdentifierWithArguments, IdentifierError> {
    let [database, schema, signature] = split_exact::<3>(text, text, SCHEMA_OBJECT_FORMAT)?;
    let Some(open) = signature.find('(') else {
        return Err(IdentifierError::malformed(text, "'(' not present"));
    };
    let (name, arguments) = signature.split_at(open);
    with_argument_list(
        text,
        [database, schema, name.to_string()],
        arguments,
        true,
    )
}

/// Parse `<database>.<schema>."<name>(<args>):<return type>"`.
///
/// This is the older listing format in which the whole signature is a single
/// quoted part. Arguments may be named (`x NUMBER`); only their types are
/// kept, and the return type is dropped.
///
/// # Errors
///
/// Returns [`IdentifierError::Malformed`] when the last part has no `(`,
/// [`IdentifierError::Arguments`] when the signature cannot be read, and the
/// usual tokenize, quote and part count errors otherwise.
///
/// # Examples
///
/// ```rust
/// use objident::parse_schema_object_identifier_with_arguments_and_return_type;
///
/// let id = parse_schema_object_identifier_with_arguments_and_return_type(
///     r#"db.sch."foo(FLOAT):NUMBER(10,2)""#,
/// )
/// .unwrap();
/// assert_eq!(id.arguments_signature(), "foo(FLOAT)");
/// ```
pub fn parse_schema_object_identifier_with_arguments_and_return_type(
    text: &str,
) -> Result<SchemaObjectIdentifierWithArguments, IdentifierError> {
    parse_with_arguments_and_return_type(text).inspect_err(log_failure)
}
