//! Runtime dependency health query.
//!
//! Only the operation name exists so far. The selection set has not been
//! defined, so there is no document and no response type; callers get
//! [`QueryError::NotImplemented`] instead of an empty query.

use crate::document::QueryDocument;
use crate::error::QueryError;

pub const RUNTIME_DEPENDENCY_HEALTH: &str = "RuntimeDependencyHealth";

// TODO: add the document once the GraphQL server publishes its health schema.
pub fn document() -> Result<&'static QueryDocument, QueryError> {
    Err(QueryError::NotImplemented(RUNTIME_DEPENDENCY_HEALTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_is_not_available() {
        assert_eq!(
            document(),
            Err(QueryError::NotImplemented(RUNTIME_DEPENDENCY_HEALTH))
        );
    }
}
