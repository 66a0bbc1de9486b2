//! Error types for provider-side custom-field handling.

/// Errors raised while planning or writing requests.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Writing request parameters failed.
    #[error("Request error: {message}")]
    Request {
        /// Description of the failure.
        message: String,
    },

    /// Settings could not be loaded or are invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    /// Creates a new `Request` error.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Creates a new `Config` error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProviderError::request("boom").to_string(),
            "Request error: boom"
        );
        assert_eq!(
            ProviderError::config("bad prefix").to_string(),
            "Configuration error: bad prefix"
        );
    }
}
