use super::{Identifier, SchemaObjectIdentifier};
use crate::render::join_parts;

/// A column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableColumnIdentifier {
    database: String,
    schema: String,
    table: String,
    column: String,
}

impl TableColumnIdentifier {
    #[must_use]
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            schema: schema.into(),
            table: table.into(),
            column: column.into(),
        }
    }

    #[must_use]
    pub fn in_table(table: &SchemaObjectIdentifier, column: impl Into<String>) -> Self {
        Self::new(
            table.database_name(),
            table.schema_name(),
            table.name(),
            column,
        )
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
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// The table owning this column.
    #[must_use]
    pub fn table_id(&self) -> SchemaObjectIdentifier {
        SchemaObjectIdentifier::new(
            self.database.as_str(),
            self.schema.as_str(),
            self.table.as_str(),
        )
    }
}

impl Identifier for TableColumnIdentifier {
    const ARITY: usize = 4;

    fn name(&self) -> &str {
        &self.column
    }

    fn fully_qualified_name(&self) -> String {
        join_parts(&[
            self.database.as_str(),
            self.schema.as_str(),
            self.table.as_str(),
            self.column.as_str(),
        ])
    }
}
