//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ShelfError`]
//! via `#[from]`. Storage adapters box their error type into
//! [`ShelfError::Storage`] so the domain stays free of driver crates.

/// Top-level error for every operation in the system.
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    /// The request payload or a derived value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record matched the given identifier.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage layer failed for any other reason.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Request validation failures (client fault).
///
/// Validation covers only the *shape* of client input: payloads that do not
/// deserialize and path parameters that do not parse. Field values that
/// deserialize cleanly are accepted as-is; the store is the arbiter of what
/// gets persisted.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A path-supplied identifier was not a valid integer.
    #[error("record id must be an integer")]
    InvalidId,
}

/// A lookup by identifier matched no live record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Human-readable singular entity label (e.g. `"User"`).
    pub entity: &'static str,
    /// The identifier that was looked up, as supplied.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "User",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "User not found: 42");
    }

    #[test]
    fn should_convert_validation_error_transparently() {
        let err = ShelfError::from(ValidationError::InvalidId);
        assert_eq!(err.to_string(), "record id must be an integer");
    }

    #[test]
    fn should_prefix_storage_errors() {
        let inner: Box<dyn std::error::Error + Send + Sync> = "disk on fire".into();
        let err = ShelfError::Storage(inner);
        assert_eq!(err.to_string(), "storage error: disk on fire");
    }
}
