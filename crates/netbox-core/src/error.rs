use thiserror::Error;

/// Core error types for custom-field handling
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Expected a custom fields object, found {found}")]
    NotAMap { found: String },
}

impl CoreError {
    /// Create a new NotAMap error from the JSON kind that was found instead
    pub fn not_a_map(found: impl Into<String>) -> Self {
        Self::NotAMap {
            found: found.into(),
        }
    }
}

/// Result type for custom-field operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_map_message() {
        let err = CoreError::not_a_map("string");
        assert_eq!(err.to_string(), "Expected a custom fields object, found string");
    }
}
