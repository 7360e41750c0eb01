//! Endpoint catalog
//!
//! Static tables of every supported operation, grouped by product and
//! category. Look operations up by name with [`find`] or walk them with [`all`].
//!
//! ```
//! use bitget_rest::catalog;
//!
//! let spec = catalog::find("spot_ticker_info").unwrap();
//! assert_eq!(spec.path(), "/api/v2/spot/market/tickers");
//! ```

pub mod common;
pub mod mix;
pub mod spot;

use crate::endpoint::EndpointSpec;

/// Every table in the catalog
static TABLES: &[&[EndpointSpec]] = &[
    common::PUBLIC,
    spot::MARKET,
    spot::TRADE,
    spot::PLAN,
    spot::ACCOUNT,
    spot::WALLET,
    mix::MARKET,
    mix::ACCOUNT,
    mix::POSITION,
    mix::TRADE,
    mix::PLAN,
];

/// Iterate over every declared endpoint
pub fn all() -> impl Iterator<Item = &'static EndpointSpec> {
    TABLES.iter().flat_map(|table| table.iter())
}

/// Look up an endpoint by its catalog name
pub fn find(name: &str) -> Option<&'static EndpointSpec> {
    all().find(|spec| spec.name == name)
}
