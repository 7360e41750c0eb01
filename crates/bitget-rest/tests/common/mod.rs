//! Common test utilities for integration tests
//!
//! Mock-transport wiring plus fixture responses shaped like live Bitget v2
//! replies.

use bitget_rest::{BitgetRestClient, ClientConfig, Credentials, MockTransport, SignedRequest};
use std::sync::Arc;

pub const API_KEY: &str = "bg_integration_key";
pub const API_SECRET: &str = "integration-secret";
pub const PASSPHRASE: &str = "integration-pass";

/// Server time reply
pub const SERVER_TIME_RESPONSE: &str =
    r#"{"code":"00000","msg":"success","requestTime":1700000000123,"data":{"serverTime":"1700000000120"}}"#;

/// Recent fills reply
pub const RECENT_TRADES_RESPONSE: &str = r#"{
    "code": "00000",
    "msg": "success",
    "requestTime": 1700000000123,
    "data": [
        {"symbol": "BTCUSDT", "tradeId": "1", "side": "buy", "price": "37000.01", "size": "0.01", "ts": "1700000000000"}
    ]
}"#;

/// Place-order reply
pub const PLACE_ORDER_RESPONSE: &str =
    r#"{"code":"00000","msg":"success","requestTime":1700000000123,"data":{"orderId":"1098394857234","clientOid":"a1b2"}}"#;

/// Signature rejection
pub const INVALID_SIGNATURE_RESPONSE: &str = r#"{"msg":"invalid signature"}"#;

/// Last request a mock transport received
pub fn last_sent(transport: &MockTransport) -> SignedRequest {
    transport.requests().pop().expect("nothing was sent")
}

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET, PASSPHRASE).unwrap()
}

/// Client wired to a fresh mock transport
pub fn client() -> (BitgetRestClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let client = BitgetRestClient::with_transport(credentials(), ClientConfig::default(), transport.clone());
    (client, transport)
}
