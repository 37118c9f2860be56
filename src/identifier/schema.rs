use super::{AccountObjectIdentifier, DatabaseObjectIdentifier, Identifier};
use crate::arguments::DataType;
use crate::render::{join_parts, quote_part};

/// An object inside a schema: a table, view, stage and so on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaObjectIdentifier {
    database: String,
    schema: String,
    name: String,
}

impl SchemaObjectIdentifier {
    #[must_use]
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// Build an identifier for `name` inside an existing schema.
    #[must_use]
    pub fn in_schema(schema: &DatabaseObjectIdentifier, name: impl Into<String>) -> Self {
        Self::new(schema.database_name(), schema.name(), name)
    }

    #[must_use]
    pub fn database_name(&self) -> &str {
        &self.database
    }

    #[must_use]
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    #[must_use]
    pub fn database_id(&self) -> AccountObjectIdentifier {
        AccountObjectIdentifier::new(self.database.as_str())
    }

    #[must_use]
    pub fn schema_id(&self) -> DatabaseObjectIdentifier {
        DatabaseObjectIdentifier::new(self.database.as_str(), self.schema.as_str())
    }

    /// Address one overload of the routine with this name.
    ///
    /// Argument types must be non-empty to survive a round trip through
    /// [`crate::parse_schema_object_identifier_with_arguments`].
    #[must_use]
    pub fn with_arguments(
        &self,
        argument_data_types: Vec<DataType>,
    ) -> SchemaObjectIdentifierWithArguments {
        SchemaObjectIdentifierWithArguments::new(
            self.database.as_str(),
            self.schema.as_str(),
            self.name.as_str(),
            argument_data_types,
        )
    }
}

impl Identifier for SchemaObjectIdentifier {
    const ARITY: usize = 3;

    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        join_parts(&[
            self.database.as_str(),
            self.schema.as_str(),
            self.name.as_str(),
        ])
    }
}

/// One overload of a function or procedure.
///
/// The argument types are ordered and take part in equality, so `f(INT,
/// TEXT)` and `f(TEXT, INT)` are different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaObjectIdentifierWithArguments {
    database: String,
    schema: String,
    name: String,
    argument_data_types: Vec<DataType>,
}

impl SchemaObjectIdentifierWithArguments {
    #[must_use]
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
        argument_data_types: Vec<DataType>,
    ) -> Self {
        Self {
            database: database.into(),
            schema: schema.into(),
            name: name.into(),
            argument_data_types,
        }
    }

    #[must_use]
    pub fn database_name(&self) -> &str {
        &self.database
    }

    #[must_use]
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    #[must_use]
    pub fn argument_data_types(&self) -> &[DataType] {
        &self.argument_data_types
    }

    #[must_use]
    pub fn database_id(&self) -> AccountObjectIdentifier {
        AccountObjectIdentifier::new(self.database.as_str())
    }

    #[must_use]
    pub fn schema_id(&self) -> DatabaseObjectIdentifier {
        DatabaseObjectIdentifier::new(self.database.as_str(), self.schema.as_str())
    }

    /// The routine address without its overload.
    #[must_use]
    pub fn schema_object_id(&self) -> SchemaObjectIdentifier {
        SchemaObjectIdentifier::new(
            self.database.as_str(),
            self.schema.as_str(),
            self.name.as_str(),
        )
    }

    /// `name(T1, T2)`, unquoted, as shown in routine listings.
    #[must_use]
    pub fn arguments_signature(&self) -> String {
        format!("{}({})", self.name, self.joined_arguments())
    }

    fn joined_arguments(&self) -> String {
        self.argument_data_types
            .iter()
            .map(DataType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Identifier for SchemaObjectIdentifierWithArguments {
    const ARITY: usize = 3;

    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        format!(
            "{}.{}.{}({})",
            quote_part(&self.database),
            quote_part(&self.schema),
            quote_part(&self.name),
            self.joined_arguments()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routine() -> SchemaObjectIdentifierWithArguments {
        SchemaObjectIdentifier::new("db", "sch", "fn").with_arguments(vec![
            DataType::from("NUMBER"),
            DataType::from("VECTOR(INT, 20)"),
        ])
    }

    #[test]
    fn renders_arguments_after_quoted_name() {
        assert_eq!(
            routine().fully_qualified_name(),
            r#""db"."sch"."fn"(NUMBER, VECTOR(INT, 20))"#
        );
    }

    #[test]
    fn renders_empty_argument_list() {
        let id = SchemaObjectIdentifierWithArguments::new("db", "sch", "fn", Vec::new());
        assert_eq!(id.fully_qualified_name(), r#""db"."sch"."fn"()"#);
        assert_eq!(id.arguments_signature(), "fn()");
    }

    #[test]
    fn argument_order_is_significant() {
        let swapped = SchemaObjectIdentifier::new("db", "sch", "fn").with_arguments(vec![
            DataType::from("VECTOR(INT, 20)"),
            DataType::from("NUMBER"),
        ]);
        assert_ne!(routine(), swapped);
    }

    #[test]
    fn navigates_to_parents() {
        let id = routine();
        assert_eq!(id.schema_object_id(), SchemaObjectIdentifier::new("db", "sch", "fn"));
        assert_eq!(id.schema_id(), DatabaseObjectIdentifier::new("db", "sch"));
        assert_eq!(id.database_id(), AccountObjectIdentifier::new("db"));
        assert_eq!(id.arguments_signature(), "fn(NUMBER, VECTOR(INT, 20))");
    }
}
