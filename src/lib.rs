//! Library crate for objident.
//!
//! Parses dotted, optionally double-quoted object names into typed
//! identifiers and renders identifiers back into canonical quoted text.

#![forbid(unsafe_code)]

pub mod arguments;
pub mod error;
pub mod identifier;
pub mod options;
pub mod parser;
pub mod render;
pub mod tokenizer;

pub use arguments::{ArgumentList, DataType, ParsedArgument, parse_argument_list};
pub use error::{ErrorKind, IdentifierError};
pub use identifier::{
    AccountIdentifier, AccountObjectIdentifier, DatabaseObjectIdentifier,
    ExternalObjectIdentifier, Identifier, ObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments, TableColumnIdentifier,
};
pub use options::TokenizerOptions;
pub use parser::{
    parse_account_identifier, parse_account_object_identifier, parse_database_object_identifier,
    parse_external_object_identifier, parse_identifier_string, parse_identifier_string_with,
    parse_object_identifier_string, parse_schema_object_identifier,
    parse_schema_object_identifier_with_arguments,
    parse_schema_object_identifier_with_arguments_and_return_type, parse_table_column_identifier,
};
pub use tokenizer::{Span, TokenizeError, split_parts};
