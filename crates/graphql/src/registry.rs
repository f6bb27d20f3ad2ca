//! Lookup table of the query operations the client knows about.

use std::collections::BTreeMap;

use crate::customer_me::CUSTOMER_ME;
use crate::document::QueryDocument;
use crate::error::QueryError;
use crate::runtime_health::RUNTIME_DEPENDENCY_HEALTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Usable document.
    Active(&'static QueryDocument),
    /// Name reserved, no document yet.
    Declared,
}

/// Operation name → status. Built explicitly; there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct QueryRegistry {
    entries: BTreeMap<&'static str, QueryStatus>,
}

impl QueryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every operation shipped in this crate.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(&CUSTOMER_ME);
        registry.declare(RUNTIME_DEPENDENCY_HEALTH);
        registry
    }

    pub fn register(&mut self, document: &'static QueryDocument) {
        self.entries
            .insert(document.operation_name(), QueryStatus::Active(document));
    }

    /// Reserve an operation name without a document. Never downgrades an active entry.
    pub fn declare(&mut self, operation_name: &'static str) {
        self.entries
            .entry(operation_name)
            .or_insert(QueryStatus::Declared);
    }

    pub fn lookup(&self, operation_name: &str) -> Result<&'static QueryDocument, QueryError> {
        match self.entries.get_key_value(operation_name) {
            Some((_, QueryStatus::Active(doc))) => Ok(*doc),
            Some((name, QueryStatus::Declared)) => Err(QueryError::NotImplemented(*name)),
            None => Err(QueryError::Unknown(operation_name.to_string())),
        }
    }

    /// Documents that can be sent, ordered by operation name.
    pub fn active(&self) -> impl Iterator<Item = &'static QueryDocument> + '_ {
        self.entries.values().filter_map(|status| match status {
            QueryStatus::Active(doc) => Some(*doc),
            QueryStatus::Declared => None,
        })
    }

    pub fn status(&self, operation_name: &str) -> Option<QueryStatus> {
        self.entries.get(operation_name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_exposes_customer_me_only() {
        let registry = QueryRegistry::builtin();
        let active: Vec<&str> = registry.active().map(|d| d.operation_name()).collect();
        assert_eq!(active, vec!["CustomerMe"]);
        assert_eq!(registry.lookup("CustomerMe"), Ok(&CUSTOMER_ME));
    }

    #[test]
    fn health_query_is_declared_but_unusable() {
        let registry = QueryRegistry::builtin();
        assert_eq!(
            registry.status(RUNTIME_DEPENDENCY_HEALTH),
            Some(QueryStatus::Declared)
        );
        assert_eq!(
            registry.lookup(RUNTIME_DEPENDENCY_HEALTH),
            Err(QueryError::NotImplemented(RUNTIME_DEPENDENCY_HEALTH))
        );
    }

    #[test]
    fn unknown_names_are_reported() {
        let registry = QueryRegistry::builtin();
        assert_eq!(
            registry.lookup("InvoicesDue"),
            Err(QueryError::Unknown("InvoicesDue".to_string()))
        );
    }

    #[test]
    fn declare_does_not_shadow_active_document() {
        let mut registry = QueryRegistry::new();
        registry.register(&CUSTOMER_ME);
        registry.declare("CustomerMe");
        assert_eq!(registry.lookup("CustomerMe"), Ok(&CUSTOMER_ME));
    }
}
