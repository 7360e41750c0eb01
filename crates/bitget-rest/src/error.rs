//! Error types for REST API operations

use bitget_auth::AuthError;

use crate::transport::TransportError;

/// Which parameter rule a call violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// A required parameter was not supplied
    Required(&'static str),
    /// Neither member of an either-or pair was supplied
    EitherOf(&'static str, &'static str),
}

impl std::fmt::Display for Missing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required(name) => write!(f, "the '{}' parameter is required", name),
            Self::EitherOf(a, b) => write!(f, "either '{}' or '{}' is required", a, b),
        }
    }
}

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Parameter validation failed; nothing was sent
    #[error("Missing parameter: {0}")]
    MissingParameter(Missing),

    /// Exchange answered with a non-2xx status
    #[error("API request error: status code ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Transport-level failure (DNS, connect, timeout)
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// 2xx response body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Request body could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// No endpoint with this name in the catalog
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// Credential loading failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Bitget error code (`code` field) from an API error body
    pub fn api_code(&self) -> Option<String> {
        self.api_field("code")
    }

    /// Bitget error message (`msg` field) from an API error body
    pub fn api_message(&self) -> Option<String> {
        self.api_field("msg")
    }

    fn api_field(&self, field: &str) -> Option<String> {
        let Self::Api { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        match value.get(field)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Status code of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the exchange rejected the request as malformed (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    /// Check if the exchange rejected the credentials or signature
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
            || matches!(
                self.api_code().as_deref(),
                Some("40002" | "40006" | "40009" | "40012" | "40037")
            )
    }

    /// Check if the error was raised before anything was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_)
                | Self::Serialization(_)
                | Self::UnknownEndpoint(_)
                | Self::Auth(_)
        )
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_messages() {
        let err = RestError::MissingParameter(Missing::Required("symbol"));
        assert_eq!(err.to_string(), "Missing parameter: the 'symbol' parameter is required");

        let err = RestError::MissingParameter(Missing::EitherOf("orderId", "clientOid"));
        assert!(err.to_string().contains("either 'orderId' or 'clientOid' is required"));
        assert!(err.is_local());
    }

    #[test]
    fn test_api_error_fields() {
        let err = RestError::Api {
            status: 400,
            body: r#"{"code":"40009","msg":"sign signature error","requestTime":1700000000000,"data":null}"#
                .to_string(),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.api_code().as_deref(), Some("40009"));
        assert_eq!(err.api_message().as_deref(), Some("sign signature error"));
        assert!(err.is_client_error());
        assert!(err.is_auth_rejected());
        assert!(!err.is_local());
    }

    #[test]
    fn test_api_error_with_non_json_body() {
        let err = RestError::Api {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(err.api_code(), None);
        assert!(!err.is_client_error());
        assert!(!err.is_auth_rejected());
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_local_errors_are_raised_before_sending() {
        assert!(RestError::UnknownEndpoint("spot_nothing".to_string()).is_local());
        assert!(RestError::Auth(AuthError::EnvVarNotSet("BITGET_API_KEY".to_string())).is_local());
        assert!(RestError::Serialization("bad".to_string()).is_local());
        assert!(!RestError::Transport(TransportError::Other("refused".to_string())).is_local());
    }

    #[test]
    fn test_non_api_errors_have_no_status() {
        let err = RestError::UnknownEndpoint("spot_nothing".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.api_message(), None);
    }
}
