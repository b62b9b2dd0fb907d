//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ItemHubError`] via `From`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum ItemHubError {
    /// A domain invariant was violated by caller-supplied data.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed to read or write.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Caller-supplied data failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent or empty.
    #[error("all fields (name, date, address) are required: `{0}` is missing or empty")]
    MissingField(&'static str),

    /// The request body could not be interpreted as an item.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

/// No record matched the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Every identifier up to `u64::MAX` is already in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no item identifier left to assign")]
pub struct IdExhaustedError;

impl From<IdExhaustedError> for ItemHubError {
    fn from(err: IdExhaustedError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_missing_field_in_message() {
        let err = ValidationError::MissingField("date");
        assert_eq!(
            err.to_string(),
            "all fields (name, date, address) are required: `date` is missing or empty"
        );
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Item",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Item 42 not found");
    }

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: ItemHubError = ValidationError::MissingField("name").into();
        assert!(matches!(
            err,
            ItemHubError::Validation(ValidationError::MissingField("name"))
        ));
    }

    #[test]
    fn should_wrap_id_exhaustion_as_storage_error() {
        let err: ItemHubError = IdExhaustedError.into();
        assert!(matches!(err, ItemHubError::Storage(_)));
    }
}
