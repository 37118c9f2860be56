use super::Identifier;
use crate::render::join_parts;

/// A top-level object scoped to the account, such as a warehouse or a
/// database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountObjectIdentifier {
    name: String,
}

impl AccountObjectIdentifier {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Identifier for AccountObjectIdentifier {
    const ARITY: usize = 1;

    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        join_parts(&[self.name.as_str()])
    }
}

/// An account addressed through its organization.
///
/// Shares its arity with [`super::DatabaseObjectIdentifier`] but names an
/// account rather than an object inside a database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountIdentifier {
    organization_name: String,
    account_name: String,
}

impl AccountIdentifier {
    #[must_use]
    pub fn new(organization_name: impl Into<String>, account_name: impl Into<String>) -> Self {
        Self {
            organization_name: organization_name.into(),
            account_name: account_name.into(),
        }
    }

    #[must_use]
    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    #[must_use]
    pub fn account_name(&self) -> &str {
        &self.account_name
    }
}

impl Identifier for AccountIdentifier {
    const ARITY: usize = 2;

    /// The account name; the organization is only part of the qualified name.
    fn name(&self) -> &str {
        &self.account_name
    }

    fn fully_qualified_name(&self) -> String {
        join_parts(&[self.organization_name.as_str(), self.account_name.as_str()])
    }
}

/// An account-level object that lives in another account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalObjectIdentifier {
    account: AccountIdentifier,
    object: AccountObjectIdentifier,
}

impl ExternalObjectIdentifier {
    #[must_use]
    pub fn new(account: AccountIdentifier, object: AccountObjectIdentifier) -> Self {
        Self { account, object }
    }

    #[must_use]
    pub fn account_identifier(&self) -> &AccountIdentifier {
        &self.account
    }

    #[must_use]
    pub fn object_identifier(&self) -> &AccountObjectIdentifier {
        &self.object
    }
}

impl Identifier for ExternalObjectIdentifier {
    const ARITY: usize = 3;

    fn name(&self) -> &str {
        self.object.name()
    }

    fn fully_qualified_name(&self) -> String {
        join_parts(&[
            self.account.organization_name.as_str(),
            self.account.account_name.as_str(),
            self.object.name.as_str(),
        ])
    }
}
