//! Caller-supplied request parameters

use serde_json::{Map, Value};

/// Parameters for one call
///
/// Keys keep their insertion order. Values are passed through as-is: strings,
/// numbers, booleans and lists are all accepted and never coerced.
///
/// # Example
///
/// ```
/// use bitget_rest::Params;
///
/// let params = Params::new()
///     .with("symbol", "BTCUSDT")
///     .with("limit", 5);
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check if a parameter was supplied
    ///
    /// An explicit JSON `null` counts as absent.
    pub fn is_present(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(value) if !value.is_null())
    }

    /// Check if a parameter carries a usable value
    ///
    /// Stricter than [`is_present`](Self::is_present): an empty string also
    /// counts as absent.
    pub fn is_given(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::String(s)) => !s.is_empty(),
            Some(value) => !value.is_null(),
            None => false,
        }
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Parameter names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub(crate) fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl TryFrom<Value> for Params {
    type Error = Value;

    /// Accepts a JSON object, hands anything else back unchanged
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
