//! Main REST client implementation

use bitget_auth::Credentials;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

use crate::catalog;
use crate::endpoint::EndpointSpec;
use crate::error::{RestError, RestResult};
use crate::params::Params;
use crate::request::RequestBuilder;
use crate::transport::{ReqwestTransport, Transport};

/// Production REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.bitget.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default user agent
const DEFAULT_USER_AGENT: &str = concat!("bitget-rest/", env!("CARGO_PKG_VERSION"));

/// Bitget REST API client
///
/// Every operation in the [`catalog`] is reachable through [`call`](Self::call)
/// by name, or through [`execute`](Self::execute) with an [`EndpointSpec`].
/// Responses are returned as the exchange sent them.
///
/// # Example
///
/// ```no_run
/// use bitget_rest::{BitgetRestClient, Params};
/// use bitget_auth::Credentials;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BitgetRestClient::new(Credentials::from_env()?)?;
///
///     let tickers = client
///         .call("spot_ticker_info", Params::new().with("symbol", "BTCUSDT"))
///         .await?;
///     println!("{}", tickers);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitgetRestClient {
    credentials: Arc<Credentials>,
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl BitgetRestClient {
    /// Create a client with the default configuration
    pub fn new(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration
    ///
    /// # Errors
    /// [`RestError::Transport`] if the HTTP client cannot be built.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let transport = ReqwestTransport::new(
            Duration::from_secs(config.timeout_secs),
            config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
        )?;

        Ok(Self::with_transport(credentials, config, Arc::new(transport)))
    }

    /// Create a client that sends through a caller-supplied transport
    pub fn with_transport(
        credentials: Credentials,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        info!(base_url = %config.base_url, "Created Bitget REST client");

        Self {
            credentials: Arc::new(credentials),
            transport,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn builder(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.credentials, &self.config.base_url)
            .with_locale(self.config.locale.as_deref())
    }

    /// Validate, sign and send a request for `spec`
    pub async fn execute(&self, spec: &EndpointSpec, params: Params) -> RestResult<Value> {
        self.builder()
            .execute(spec, &params, self.transport.as_ref())
            .await
    }

    /// Look up `name` in the catalog and execute it
    ///
    /// # Errors
    /// [`RestError::UnknownEndpoint`] if no endpoint has this name, otherwise
    /// whatever [`execute`](Self::execute) returns.
    #[instrument(skip(self, params))]
    pub async fn call(&self, name: &str, params: Params) -> RestResult<Value> {
        let spec = catalog::find(name).ok_or_else(|| RestError::UnknownEndpoint(name.to_string()))?;
        self.execute(spec, params).await
    }
}

impl std::fmt::Debug for BitgetRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitgetRestClient")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host, without the `/api/v2/` prefix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Value of the `locale` header (e.g. `en-US`), omitted when `None`
    pub locale: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            locale: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set locale header
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}
