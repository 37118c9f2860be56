//! Typed identifier values.
//!
//! Each shape stores its parts verbatim and renders them through
//! [`crate::render`]. Values are immutable once built: they are created either
//! by the parsers in [`crate::parser`] or directly from known parts.

mod account;
mod column;
mod database;
mod schema;

use std::fmt;
use std::str::FromStr;

pub use account::{AccountIdentifier, AccountObjectIdentifier, ExternalObjectIdentifier};
pub use column::TableColumnIdentifier;
pub use database::DatabaseObjectIdentifier;
pub use schema::{SchemaObjectIdentifier, SchemaObjectIdentifierWithArguments};

use crate::error::IdentifierError;
use crate::parser::parse_object_identifier_string;

/// Behaviour shared by every identifier shape.
pub trait Identifier {
    /// Number of dot-separated parts in the rendered name.
    const ARITY: usize;

    /// The innermost part, naming the object itself.
    fn name(&self) -> &str;

    /// Canonical text that the matching parser reads back unchanged.
    fn fully_qualified_name(&self) -> String;
}

/// Implements `Display` as the fully-qualified name and `FromStr` through the
/// given parser.
macro_rules! identifier_text_impls {
    ( $( $ty:ty => $parse:path ),* $(,)? ) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::identifier::Identifier::fully_qualified_name(self))
                }
            }

            impl std::str::FromStr for $ty {
                type Err = $crate::error::IdentifierError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $parse(s)
                }
            }
        )*
    };
}

identifier_text_impls! {
    AccountObjectIdentifier => crate::parser::parse_account_object_identifier,
    AccountIdentifier => crate::parser::parse_account_identifier,
    ExternalObjectIdentifier => crate::parser::parse_external_object_identifier,
    DatabaseObjectIdentifier => crate::parser::parse_database_object_identifier,
    SchemaObjectIdentifier => crate::parser::parse_schema_object_identifier,
    SchemaObjectIdentifierWithArguments => crate::parser::parse_schema_object_identifier_with_arguments,
    TableColumnIdentifier => crate::parser::parse_table_column_identifier,
}

/// Any identifier shape.
///
/// [`parse_object_identifier_string`] only produces the first four variants;
/// the remaining shapes share an arity with one of them and are only reached
/// through their dedicated parsers or by conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectIdentifier {
    AccountObject(AccountObjectIdentifier),
    DatabaseObject(DatabaseObjectIdentifier),
    SchemaObject(SchemaObjectIdentifier),
    TableColumn(TableColumnIdentifier),
    Account(AccountIdentifier),
    External(ExternalObjectIdentifier),
    SchemaObjectWithArguments(SchemaObjectIdentifierWithArguments),
}

impl ObjectIdentifier {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::AccountObject(id) => id.name(),
            Self::DatabaseObject(id) => id.name(),
            Self::SchemaObject(id) => id.name(),
            Self::TableColumn(id) => id.name(),
            Self::Account(id) => id.name(),
            Self::External(id) => id.name(),
            Self::SchemaObjectWithArguments(id) => id.name(),
        }
    }

    #[must_use]
    pub fn fully_qualified_name(&self) -> String {
        match self {
            Self::AccountObject(id) => id.fully_qualified_name(),
            Self::DatabaseObject(id) => id.fully_qualified_name(),
            Self::SchemaObject(id) => id.fully_qualified_name(),
            Self::TableColumn(id) => id.fully_qualified_name(),
            Self::Account(id) => id.fully_qualified_name(),
            Self::External(id) => id.fully_qualified_name(),
            Self::SchemaObjectWithArguments(id) => id.fully_qualified_name(),
        }
    }

    /// Number of dot-separated parts of the wrapped shape.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::AccountObject(_) => AccountObjectIdentifier::ARITY,
            Self::DatabaseObject(_) => DatabaseObjectIdentifier::ARITY,
            Self::SchemaObject(_) => SchemaObjectIdentifier::ARITY,
            Self::TableColumn(_) => TableColumnIdentifier::ARITY,
            Self::Account(_) => AccountIdentifier::ARITY,
            Self::External(_) => ExternalObjectIdentifier::ARITY,
            Self::SchemaObjectWithArguments(_) => SchemaObjectIdentifierWithArguments::ARITY,
        }
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

impl FromStr for ObjectIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_object_identifier_string(s)
    }
}

macro_rules! object_identifier_from {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for ObjectIdentifier {
                fn from(id: $ty) -> Self {
                    Self::$variant(id)
                }
            }
        )*
    };
}

object_identifier_from! {
    AccountObjectIdentifier => AccountObject,
    DatabaseObjectIdentifier => DatabaseObject,
    SchemaObjectIdentifier => SchemaObject,
    TableColumnIdentifier => TableColumn,
    AccountIdentifier => Account,
    ExternalObjectIdentifier => External,
    SchemaObjectIdentifierWithArguments => SchemaObjectWithArguments,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataType;

    #[test]
    fn reports_arity_per_shape() {
        let db = AccountObjectIdentifier::new("db");
        let schema = DatabaseObjectIdentifier::in_database(&db, "sch");
        let table = SchemaObjectIdentifier::in_schema(&schema, "t");
        let column = TableColumnIdentifier::in_table(&table, "c");
        let routine = table.with_arguments(vec![DataType::from("INT")]);
        let account = AccountIdentifier::new("org", "acc");
        let external = ExternalObjectIdentifier::new(account.clone(), db.clone());

        let arities: Vec<usize> = [
            ObjectIdentifier::from(db),
            schema.into(),
            table.into(),
            column.into(),
            account.into(),
            external.into(),
            routine.into(),
        ]
        .iter()
        .map(ObjectIdentifier::arity)
        .collect();
        assert_eq!(arities, vec![1, 2, 3, 4, 2, 3, 3]);
    }

    #[test]
    fn displays_fully_qualified_name() {
        let id = ObjectIdentifier::from(SchemaObjectIdentifier::new("db", "sch", "t"));
        assert_eq!(id.to_string(), r#""db"."sch"."t""#);
        assert_eq!(id.name(), "t");
    }
}
