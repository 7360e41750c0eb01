//! Credentials and request signing for the Bitget v2 REST API
//!
//! Every private Bitget request carries five headers. Four of them are derived
//! from the credentials and a per-request signature:
//!
//! ```text
//! ACCESS-SIGN = base64(HMAC-SHA256(secret, timestamp + METHOD + request_path + body))
//! ```
//!
//! where `request_path` includes the query string for GET requests and `body`
//! is the JSON payload for POST requests.
//!
//! # Example
//!
//! ```no_run
//! use bitget_auth::{sign_request, Credentials};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let headers = sign_request(&creds, "GET", "/api/v2/spot/account/assets?coin=USDT", "");
//!     for (name, value) in headers.iter() {
//!         println!("{name}: {value}");
//!     }
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use signer::{
    current_timestamp, pre_hash, sign, sign_request, sign_request_at, AuthHeaders, RequestSigner,
    ACCESS_KEY, ACCESS_PASSPHRASE, ACCESS_SIGN, ACCESS_TIMESTAMP, APPLICATION_JSON, CONTENT_TYPE,
};
