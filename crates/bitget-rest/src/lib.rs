//! REST API client for the Bitget cryptocurrency exchange (API v2)
//!
//! Instead of one method per endpoint, every operation is a row in a static
//! [`catalog`] and all of them go through the same pipeline:
//!
//! 1. check required and either-or parameters
//! 2. drop parameters the endpoint does not declare
//! 3. render the query string (GET) or JSON body (POST)
//! 4. sign with HMAC-SHA256 and attach the `ACCESS-*` headers
//! 5. send, and fail with [`RestError::Api`] on a non-2xx status
//!
//! Successful responses come back as a [`serde_json::Value`], exactly as the
//! exchange sent them. [`ApiEnvelope`] can unwrap the payload into your own
//! types.
//!
//! # Example
//!
//! ```no_run
//! use bitget_rest::{BitgetRestClient, ClientConfig, Credentials, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = BitgetRestClient::with_config(creds, ClientConfig::new().with_locale("en-US"))?;
//!
//!     let depth = client
//!         .call("spot_merge_depth", Params::new().with("symbol", "BTCUSDT").with("limit", "5"))
//!         .await?;
//!     println!("{}", depth);
//!
//!     let order = client
//!         .call(
//!             "spot_place_order",
//!             Params::new()
//!                 .with("symbol", "BTCUSDT")
//!                 .with("side", "buy")
//!                 .with("orderType", "limit")
//!                 .with("force", "gtc")
//!                 .with("price", "20000")
//!                 .with("size", "0.001"),
//!         )
//!         .await?;
//!     println!("{}", order);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! Enable the `test-utils` feature for [`MockTransport`], or implement
//! [`Transport`] yourself and pass it to [`BitgetRestClient::with_transport`].

pub mod catalog;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod params;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types
pub use bitget_auth::Credentials;
pub use client::{BitgetRestClient, ClientConfig, DEFAULT_BASE_URL};
pub use endpoint::{Category, EndpointSpec, HttpMethod, ProductType};
pub use error::{Missing, RestError, RestResult};
pub use params::Params;
pub use request::{RequestBuilder, SignedRequest};
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportError};
pub use types::ApiEnvelope;

#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;
