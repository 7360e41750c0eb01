//! Request construction pipeline
//!
//! validate → filter → serialize → sign → dispatch → check status.
//!
//! The query string (GET) or JSON body (POST) is rendered exactly once and the
//! same string is handed to both the signer and the transport, so what gets
//! signed is byte-for-byte what goes on the wire.

use bitget_auth::{Credentials, RequestSigner};
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace, warn};

use crate::endpoint::{EndpointSpec, HttpMethod};
use crate::error::{Missing, RestError, RestResult};
use crate::params::Params;
use crate::transport::Transport;

/// `locale` header name
pub const LOCALE: &str = "locale";

/// A fully constructed request, ready for the transport
///
/// Transient: the signature inside `headers` is only valid for this exact
/// method, path and body, and only around the time it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: HttpMethod,
    /// `base_url + request_path`
    pub url: String,
    /// Path plus query string, as signed
    pub request_path: String,
    /// Header name/value pairs in send order
    pub headers: Vec<(String, String)>,
    /// JSON body for POST, empty for GET
    pub body: String,
}

impl SignedRequest {
    /// Look up a header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Check `params` against the endpoint's parameter rules and keep only
/// declared parameters
///
/// The result holds required parameters in declared order followed by the
/// supplied optional parameters in the caller's order.
pub fn validate(spec: &EndpointSpec, params: &Params) -> RestResult<Params> {
    if let Some(name) = spec.required.iter().copied().find(|name| !params.is_present(name)) {
        return Err(RestError::MissingParameter(Missing::Required(name)));
    }

    // an empty identifier does not satisfy the pair
    for (a, b) in spec.active_either_or() {
        if !params.is_given(a) && !params.is_given(b) {
            return Err(RestError::MissingParameter(Missing::EitherOf(a, b)));
        }
    }

    let mut outgoing = Params::new();
    for name in spec.required {
        if let Some(value) = params.get(name) {
            outgoing.insert(*name, value.clone());
        }
    }
    for (key, value) in params.iter() {
        if spec.is_required(key) {
            continue;
        }
        if spec.accepts(key) {
            outgoing.insert(key, value.clone());
        } else {
            trace!(endpoint = spec.name, param = key, "Dropping undeclared parameter");
        }
    }

    Ok(outgoing)
}

/// Literal text of a parameter value as it appears in a query string
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Percent-encode the bytes a URL parser would rewrite in a query
///
/// Covers the WHATWG special-query set: controls, space, `"`, `#`, `'`, `<`,
/// `>` and non-ASCII. Everything else (`,`, `:`, `/`, `%`, ...) stays literal.
fn escape_query(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            0x00..=0x20 | b'"' | b'#' | b'\'' | b'<' | b'>' | 0x7F..=0xFF => {
                out.push_str(&format!("%{:02X}", byte));
            }
            _ => out.push(byte as char),
        }
    }
    out
}

/// Render parameters as `?k1=v1&k2=v2`, or an empty string if there are none
///
/// Keys and values are written literally. Only bytes that would otherwise be
/// rewritten in transit are escaped, so the signed path matches the URL sent.
pub fn render_query(params: &Params) -> String {
    if params.is_empty() {
        return String::new();
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, query_value(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("?{}", escape_query(&query))
}

/// Render parameters as a compact JSON object
pub fn render_body(params: &Params) -> RestResult<String> {
    let map: &Map<String, Value> = params.as_map();
    serde_json::to_string(map).map_err(|e| RestError::Serialization(e.to_string()))
}

/// Builds, signs and dispatches requests for one set of credentials
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    credentials: &'a Credentials,
    base_url: &'a str,
    locale: Option<&'a str>,
}

impl<'a> RequestBuilder<'a> {
    /// Create a builder targeting `base_url` (e.g. `https://api.bitget.com`)
    pub fn new(credentials: &'a Credentials, base_url: &'a str) -> Self {
        Self {
            credentials,
            base_url,
            locale: None,
        }
    }

    /// Send a `locale` header (e.g. `en-US`) with every request
    pub fn with_locale(mut self, locale: Option<&'a str>) -> Self {
        self.locale = locale;
        self
    }

    /// Validate, serialize and sign a request at the current time
    pub fn build(&self, spec: &EndpointSpec, params: &Params) -> RestResult<SignedRequest> {
        self.build_with(spec, params, RequestSigner::new(self.credentials))
    }

    /// Validate, serialize and sign a request at a fixed timestamp
    pub fn build_at(
        &self,
        spec: &EndpointSpec,
        params: &Params,
        timestamp: i64,
    ) -> RestResult<SignedRequest> {
        self.build_with(spec, params, RequestSigner::at(self.credentials, timestamp))
    }

    fn build_with(
        &self,
        spec: &EndpointSpec,
        params: &Params,
        signer: RequestSigner<'_>,
    ) -> RestResult<SignedRequest> {
        let outgoing = validate(spec, params)?;

        let (request_path, body) = match spec.method {
            HttpMethod::Get => (format!("{}{}", spec.path(), render_query(&outgoing)), String::new()),
            HttpMethod::Post => (spec.path(), render_body(&outgoing)?),
        };

        let mut headers = signer
            .sign(spec.method.as_str(), &request_path, &body)
            .to_vec();
        if let Some(locale) = self.locale {
            headers.push((LOCALE.to_string(), locale.to_string()));
        }

        Ok(SignedRequest {
            method: spec.method,
            url: format!("{}{}", self.base_url.trim_end_matches('/'), request_path),
            request_path,
            headers,
            body,
        })
    }

    /// Run the full pipeline and return the parsed response body
    ///
    /// # Errors
    /// - [`RestError::MissingParameter`] before anything is sent
    /// - [`RestError::Transport`] if the transport fails
    /// - [`RestError::Api`] for a non-2xx status, with the raw body
    /// - [`RestError::Parse`] if a 2xx body is not JSON
    #[instrument(skip_all, fields(endpoint = spec.name, method = %spec.method))]
    pub async fn execute(
        &self,
        spec: &EndpointSpec,
        params: &Params,
        transport: &dyn Transport,
    ) -> RestResult<Value> {
        let request = self.build(spec, params)?;

        debug!(path = %request.request_path, "Dispatching request");
        let response = transport.send(&request).await?;

        if !response.is_success() {
            warn!(status = response.status, "Request rejected");
            return Err(RestError::Api {
                status: response.status,
                body: response.body,
            });
        }

        debug!(status = response.status, "Request succeeded");
        serde_json::from_str(&response.body).map_err(RestError::Parse)
    }
}
