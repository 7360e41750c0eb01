//! Error types for credential handling

/// Errors that can occur while loading or validating credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("BITGET_API_KEY".to_string());
        assert!(err.to_string().contains("BITGET_API_KEY"));

        let err = AuthError::InvalidCredentials("passphrase is empty".to_string());
        assert_eq!(err.to_string(), "Invalid credentials: passphrase is empty");
    }
}
