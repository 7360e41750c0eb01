//! API credentials for Bitget
//!
//! # Security
//!
//! The secret key and passphrase are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{AuthError, AuthResult};

/// Environment variable holding the API key
pub(crate) const ENV_API_KEY: &str = "BITGET_API_KEY";
/// Environment variable holding the API secret
pub(crate) const ENV_API_SECRET: &str = "BITGET_API_SECRET";
/// Environment variable holding the API passphrase
pub(crate) const ENV_PASSPHRASE: &str = "BITGET_PASSPHRASE";

/// API credentials for authenticated requests
///
/// Immutable once constructed. The secret and passphrase are zeroized when
/// the credentials are dropped.
pub struct Credentials {
    /// API key (sent in clear as `ACCESS-KEY`)
    api_key: String,
    /// HMAC key
    api_secret: SecretString,
    /// Passphrase chosen when the key was created
    passphrase: SecretString,
}

impl Credentials {
    /// Create new credentials
    ///
    /// # Arguments
    /// * `api_key` - Your Bitget API key
    /// * `api_secret` - Your Bitget secret key
    /// * `passphrase` - The passphrase set when creating the key
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] if any of the three is empty.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        let passphrase = passphrase.into();

        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AuthError::InvalidCredentials("API secret is empty".to_string()));
        }
        if passphrase.is_empty() {
            return Err(AuthError::InvalidCredentials("passphrase is empty".to_string()));
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
            passphrase: SecretString::from(passphrase),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITGET_API_KEY`, `BITGET_API_SECRET` and `BITGET_PASSPHRASE`.
    pub fn from_env() -> AuthResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AuthResult<Self> {
        let var = |name: &str| lookup(name).ok_or_else(|| AuthError::EnvVarNotSet(name.to_string()));

        let api_key = var(ENV_API_KEY)?;
        let api_secret = var(ENV_API_SECRET)?;
        let passphrase = var(ENV_PASSPHRASE)?;

        let credentials = Self::new(api_key, api_secret, passphrase)?;
        debug!("Loaded API credentials from environment");
        Ok(credentials)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the passphrase
    pub fn passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }

    /// Secret key bytes used as the HMAC key
    pub(crate) fn secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
            passphrase: SecretString::from(self.passphrase.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self
            .api_key
            .char_indices()
            .nth(8)
            .map_or(self.api_key.as_str(), |(idx, _)| &self.api_key[..idx]);

        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", shown))
            .field("api_secret", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}
