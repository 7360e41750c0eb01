//! Example: Bitget REST market data and account queries
//!
//! Run with: cargo run -p bitget-rest --example market_data
//!
//! Requires BITGET_API_KEY, BITGET_API_SECRET and BITGET_PASSPHRASE.
//! Set RUST_LOG=bitget_rest=debug to see each request being dispatched.

use bitget_rest::{BitgetRestClient, ClientConfig, Credentials, Params, RestError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = Credentials::from_env()?;
    let client = BitgetRestClient::with_config(credentials, ClientConfig::new().with_locale("en-US"))?;

    println!("=== Bitget REST API Example ===\n");

    let time = client.call("common_server_time", Params::new()).await?;
    println!("Server time: {}", time["data"]["serverTime"]);

    let depth = client
        .call(
            "spot_merge_depth",
            Params::new().with("symbol", "BTCUSDT").with("limit", "5"),
        )
        .await?;
    println!("BTCUSDT depth: {}", depth["data"]);

    let funding = client
        .call(
            "mix_current_funding_rate",
            Params::new()
                .with("symbol", "BTCUSDT")
                .with("productType", "USDT-FUTURES"),
        )
        .await?;
    println!("BTCUSDT funding: {}", funding["data"]);

    match client.call("spot_get_account_assets", Params::new().with("coin", "USDT")).await {
        Ok(assets) => println!("USDT assets: {}", assets["data"]),
        Err(e) if e.is_auth_rejected() => println!("Credentials rejected: {:?}", e.api_message()),
        Err(e) => return Err(e.into()),
    }

    // Validation happens locally, before anything is sent
    match client.call("spot_cancel_order", Params::new().with("symbol", "BTCUSDT")).await {
        Err(RestError::MissingParameter(missing)) => println!("Rejected locally: {}", missing),
        other => println!("Unexpected: {:?}", other),
    }

    Ok(())
}
