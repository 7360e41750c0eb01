//! Response envelope
//!
//! Every Bitget v2 response wraps its payload in the same envelope:
//!
//! ```json
//! {"code": "00000", "msg": "success", "requestTime": 1700000000000, "data": ...}
//! ```
//!
//! The client returns bodies untouched; this type is an opt-in helper for
//! callers that want to unwrap `data` into their own types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RestError, RestResult};

/// `code` value of a successful response
pub const SUCCESS_CODE: &str = "00000";

/// Standard Bitget response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T = Value> {
    /// `"00000"` on success
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    /// Server time in milliseconds
    #[serde(default)]
    pub request_time: Option<i64>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Check if the exchange reported success
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    /// Decode an envelope from a response value returned by the client
    pub fn from_value(value: Value) -> RestResult<Self> {
        serde_json::from_value(value).map_err(RestError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct ServerTime {
        server_time: String,
    }

    #[test]
    fn test_decode_typed_data() {
        let value = json!({
            "code": "00000",
            "msg": "success",
            "requestTime": 1700000000001i64,
            "data": {"serverTime": "1700000000000"}
        });

        let envelope: ApiEnvelope<ServerTime> = ApiEnvelope::from_value(value).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.request_time, Some(1700000000001));
        assert_eq!(envelope.data.unwrap().server_time, "1700000000000");
    }

    #[test]
    fn test_error_envelope_without_data() {
        let value = json!({"code": "40034", "msg": "Parameter does not exist"});

        let envelope: ApiEnvelope = ApiEnvelope::from_value(value).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.msg.as_deref(), Some("Parameter does not exist"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_mismatched_data_is_parse_error() {
        let value = json!({"code": "00000", "data": [1, 2, 3]});

        let result: RestResult<ApiEnvelope<ServerTime>> = ApiEnvelope::from_value(value);
        assert!(matches!(result, Err(RestError::Parse(_))));
    }
}
