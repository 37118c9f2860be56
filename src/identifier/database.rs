use super::{AccountObjectIdentifier, Identifier};
use crate::render::join_parts;

/// An object inside a database, most commonly a schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseObjectIdentifier {
    database: String,
    name: String,
}

impl DatabaseObjectIdentifier {
    #[must_use]
    pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            name: name.into(),
        }
    }

    /// Build an identifier for `name` inside an existing database.
    #[must_use]
    pub fn in_database(database: &AccountObjectIdentifier, name: impl Into<String>) -> Self {
        Self::new(database.name(), name)
    }

    #[must_use]
    pub fn database_name(&self) -> &str {
        &self.database
    }

    #[must_use]
    pub fn database_id(&self) -> AccountObjectIdentifier {
        AccountObjectIdentifier::new(self.database.as_str())
    }
}

impl Identifier for DatabaseObjectIdentifier {
    const ARITY: usize = 2;

    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        join_parts(&[self.database.as_str(), self.name.as_str()])
    }
}
