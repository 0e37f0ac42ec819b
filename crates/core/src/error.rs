use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use validator::ValidationError;

    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Todo",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Entity not found: Todo with id 42");
    }

    #[test]
    fn validation_errors_map_to_validation_variant() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("length"));

        let err = CoreError::from(errors);
        match err {
            CoreError::Validation(msg) => assert!(msg.contains("title"), "got: {msg}"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
