//! Endpoint declarations
//!
//! Every Bitget REST operation is described by an [`EndpointSpec`]: its HTTP
//! method, where it lives under `/api/v2/`, and which parameters it accepts.

/// API version prefix shared by every endpoint
pub const API_VERSION: &str = "/api/v2/";

/// HTTP method used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Parameters go in the query string
    Get,
    /// Parameters go in a JSON body
    Post,
}

impl HttpMethod {
    /// Returns the method as sent on the wire and signed
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First path segment after the version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// Product-independent endpoints (`/api/v2/public/...`)
    Common,
    /// Spot trading
    Spot,
    /// USDT/USDC/coin-margined futures
    Mix,
}

impl ProductType {
    /// Returns the path segment, empty for [`ProductType::Common`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "",
            Self::Spot => "spot",
            Self::Mix => "mix",
        }
    }
}

/// Second path segment after the version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Public,
    Market,
    Trade,
    Account,
    Wallet,
    Order,
    Position,
}

impl Category {
    /// Returns the path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Market => "market",
            Self::Trade => "trade",
            Self::Account => "account",
            Self::Wallet => "wallet",
            Self::Order => "order",
            Self::Position => "position",
        }
    }
}

/// The `orderId` / `clientOid` alternative used by order lookups
pub const ORDER_ID_OR_CLIENT_OID: (&str, &str) = ("orderId", "clientOid");

/// Static declaration of one API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    /// Catalog name, e.g. `spot_place_order`
    pub name: &'static str,
    pub method: HttpMethod,
    pub product: ProductType,
    pub category: Category,
    /// Final path segment, e.g. `place-order`
    pub endpoint: &'static str,
    /// Parameters that must be supplied
    pub required: &'static [&'static str],
    /// Parameters that may be supplied
    pub optional: &'static [&'static str],
    /// Pairs where at least one member must be supplied
    pub either_or: &'static [(&'static str, &'static str)],
}

impl EndpointSpec {
    /// Declare a GET endpoint with no parameters
    pub const fn get(
        name: &'static str,
        product: ProductType,
        category: Category,
        endpoint: &'static str,
    ) -> Self {
        Self {
            name,
            method: HttpMethod::Get,
            product,
            category,
            endpoint,
            required: &[],
            optional: &[],
            either_or: &[],
        }
    }

    /// Declare a POST endpoint with no parameters
    pub const fn post(
        name: &'static str,
        product: ProductType,
        category: Category,
        endpoint: &'static str,
    ) -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::get(name, product, category, endpoint)
        }
    }

    pub const fn with_required(self, required: &'static [&'static str]) -> Self {
        Self { required, ..self }
    }

    pub const fn with_optional(self, optional: &'static [&'static str]) -> Self {
        Self { optional, ..self }
    }

    pub const fn with_either_or(self, either_or: &'static [(&'static str, &'static str)]) -> Self {
        Self { either_or, ..self }
    }

    /// Request path without query string, e.g. `/api/v2/spot/market/tickers`
    pub fn path(&self) -> String {
        let mut path = String::from(API_VERSION);
        if !self.product.as_str().is_empty() {
            path.push_str(self.product.as_str());
            path.push('/');
        }
        path.push_str(self.category.as_str());
        path.push('/');
        path.push_str(self.endpoint);
        path
    }

    /// Check whether a parameter is declared required or optional
    pub fn accepts(&self, name: &str) -> bool {
        self.is_required(name) || self.optional.iter().any(|p| *p == name)
    }

    /// Check whether a parameter is declared required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|p| *p == name)
    }

    /// Either-or pairs that apply to this endpoint
    ///
    /// A pair only applies when both of its members are declared parameters.
    pub fn active_either_or(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.either_or
            .iter()
            .copied()
            .filter(|(a, b)| self.accepts(a) && self.accepts(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKERS: EndpointSpec =
        EndpointSpec::get("spot_ticker_info", ProductType::Spot, Category::Market, "tickers")
            .with_optional(&["symbol"]);

    #[test]
    fn test_path_rendering() {
        assert_eq!(TICKERS.path(), "/api/v2/spot/market/tickers");

        let time = EndpointSpec {
            name: "common_server_time",
            product: ProductType::Common,
            category: Category::Public,
            endpoint: "time",
            optional: &[],
            ..TICKERS
        };
        assert_eq!(time.path(), "/api/v2/public/time");
    }

    #[test]
    fn test_accepts() {
        assert!(TICKERS.accepts("symbol"));
        assert!(!TICKERS.accepts("limit"));
        assert!(!TICKERS.is_required("symbol"));
    }

    #[test]
    fn test_either_or_applies_only_to_declared_fields() {
        let declared = EndpointSpec {
            optional: &["orderId", "clientOid"],
            either_or: &[ORDER_ID_OR_CLIENT_OID],
            ..TICKERS
        };
        assert_eq!(declared.active_either_or().count(), 1);

        let undeclared = EndpointSpec {
            optional: &["orderId"],
            either_or: &[ORDER_ID_OR_CLIENT_OID],
            ..TICKERS
        };
        assert_eq!(undeclared.active_either_or().count(), 0);
    }

    #[test]
    fn test_const_constructors() {
        let spec = EndpointSpec::post("spot_cancel_order", ProductType::Spot, Category::Trade, "cancel-order")
            .with_required(&["symbol"])
            .with_optional(&["orderId", "clientOid"])
            .with_either_or(&[ORDER_ID_OR_CLIENT_OID]);

        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.path(), "/api/v2/spot/trade/cancel-order");
        assert!(spec.is_required("symbol"));
        assert!(spec.accepts("clientOid"));
        assert_eq!(spec.either_or, &[("orderId", "clientOid")]);
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
