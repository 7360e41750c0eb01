//! Request signing
//!
//! Implements Bitget's HMAC-SHA256 signature scheme:
//! 1. pre-hash = timestamp + METHOD + request_path + body
//! 2. HMAC-SHA256(secret, pre-hash)
//! 3. Base64 encode the raw digest

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::trace;

use crate::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// `Content-Type` header name
pub const CONTENT_TYPE: &str = "Content-Type";
/// `Content-Type` value sent on every request
pub const APPLICATION_JSON: &str = "application/json";
/// API key header
pub const ACCESS_KEY: &str = "ACCESS-KEY";
/// Signature header
pub const ACCESS_SIGN: &str = "ACCESS-SIGN";
/// Timestamp header (milliseconds since the Unix epoch)
pub const ACCESS_TIMESTAMP: &str = "ACCESS-TIMESTAMP";
/// Passphrase header
pub const ACCESS_PASSPHRASE: &str = "ACCESS-PASSPHRASE";

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Build the string that gets signed
///
/// # Arguments
/// * `timestamp` - Milliseconds since the Unix epoch
/// * `method` - HTTP method, upper-cased here
/// * `request_path` - Path including `?query` for GET requests
/// * `body` - JSON body for POST requests, empty for GET
pub fn pre_hash(timestamp: i64, method: &str, request_path: &str, body: &str) -> String {
    format!("{}{}{}{}", timestamp, method.to_uppercase(), request_path, body)
}

/// HMAC-SHA256 `message` with `secret` and base64 encode the digest
pub fn sign(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Authentication headers for a single request
///
/// Valid only for the timestamp, method, path and body they were computed
/// from. Never reuse across requests.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    api_key: String,
    signature: String,
    timestamp: String,
    passphrase: String,
}

impl AuthHeaders {
    /// Base64 signature sent as `ACCESS-SIGN`
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Timestamp sent as `ACCESS-TIMESTAMP`
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Look up a header value by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Iterate headers in wire order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (CONTENT_TYPE, APPLICATION_JSON),
            (ACCESS_KEY, self.api_key.as_str()),
            (ACCESS_SIGN, self.signature.as_str()),
            (ACCESS_TIMESTAMP, self.timestamp.as_str()),
            (ACCESS_PASSPHRASE, self.passphrase.as_str()),
        ]
        .into_iter()
    }

    /// Owned `(name, value)` pairs in wire order
    pub fn to_vec(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("api_key", &self.api_key)
            .field("timestamp", &self.timestamp)
            .field("signature", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

/// Sign a request at the current time
pub fn sign_request(
    credentials: &Credentials,
    method: &str,
    request_path: &str,
    body: &str,
) -> AuthHeaders {
    sign_request_at(credentials, current_timestamp(), method, request_path, body)
}

/// Sign a request at a fixed timestamp
///
/// Pure: the same inputs always produce the same headers.
pub fn sign_request_at(
    credentials: &Credentials,
    timestamp: i64,
    method: &str,
    request_path: &str,
    body: &str,
) -> AuthHeaders {
    let message = pre_hash(timestamp, method, request_path, body);

    AuthHeaders {
        api_key: credentials.api_key().to_string(),
        signature: sign(&message, credentials.secret()),
        timestamp: timestamp.to_string(),
        passphrase: credentials.passphrase().to_string(),
    }
}

/// Signer bound to one request
///
/// Captures the timestamp when created, so the pre-hash and the
/// `ACCESS-TIMESTAMP` header always agree.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    timestamp: i64,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer stamped with the current time
    pub fn new(credentials: &'a Credentials) -> Self {
        Self::at(credentials, current_timestamp())
    }

    /// Create a signer with an explicit timestamp
    pub fn at(credentials: &'a Credentials, timestamp: i64) -> Self {
        Self {
            credentials,
            timestamp,
        }
    }

    /// Timestamp for this request
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Pre-hash string for the given request parts
    pub fn pre_hash(&self, method: &str, request_path: &str, body: &str) -> String {
        pre_hash(self.timestamp, method, request_path, body)
    }

    /// Sign the request and produce its headers
    pub fn sign(&self, method: &str, request_path: &str, body: &str) -> AuthHeaders {
        trace!(timestamp = self.timestamp, method, request_path, "Signing request");
        sign_request_at(self.credentials, self.timestamp, method, request_path, body)
    }
}
