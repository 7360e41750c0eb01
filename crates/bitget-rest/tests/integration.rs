//! Integration tests for the Bitget REST client
//!
//! Drives the full pipeline through `BitgetRestClient` with a mock
//! transport and checks what would have gone over the wire.

mod common;

use bitget_auth::{
    pre_hash, sign, ACCESS_KEY, ACCESS_PASSPHRASE, ACCESS_SIGN, ACCESS_TIMESTAMP,
    APPLICATION_JSON, CONTENT_TYPE,
};
use bitget_rest::{catalog, ApiEnvelope, HttpMethod, Missing, Params, RestError, SignedRequest};
use common::*;
use serde_json::{json, Value};

/// Recompute the signature of a sent request from its own headers
fn assert_signed(request: &SignedRequest) {
    let timestamp: i64 = request
        .header(ACCESS_TIMESTAMP)
        .expect("timestamp header")
        .parse()
        .expect("numeric timestamp");
    let message = pre_hash(timestamp, request.method.as_str(), &request.request_path, &request.body);

    assert_eq!(request.header(ACCESS_SIGN), Some(sign(&message, API_SECRET).as_str()));
}

// =============================================================================
// Query and Body Construction
// =============================================================================

#[tokio::test]
async fn test_get_query_is_signed_and_sent() {
    let (client, transport) = client();
    transport.push_response(200, RECENT_TRADES_RESPONSE);

    client
        .call("spot_recent_trades", Params::new().with("symbol", "BTCUSDT").with("limit", "5"))
        .await
        .unwrap();

    let sent = last_sent(&transport);
    assert_eq!(sent.method, HttpMethod::Get);
    assert_eq!(sent.request_path, "/api/v2/spot/market/fills?symbol=BTCUSDT&limit=5");
    assert_eq!(
        sent.url,
        "https://api.bitget.com/api/v2/spot/market/fills?symbol=BTCUSDT&limit=5"
    );
    assert!(sent.body.is_empty());

    let timestamp: i64 = sent.header(ACCESS_TIMESTAMP).unwrap().parse().unwrap();
    let message = pre_hash(timestamp, "GET", &sent.request_path, "");
    assert!(message.ends_with("GET/api/v2/spot/market/fills?symbol=BTCUSDT&limit=5"));
    assert_signed(&sent);
}

#[tokio::test]
async fn test_auth_headers_present() {
    let (client, transport) = client();
    transport.push_response(200, SERVER_TIME_RESPONSE);

    client.call("common_server_time", Params::new()).await.unwrap();

    let sent = last_sent(&transport);
    assert_eq!(sent.header(CONTENT_TYPE), Some(APPLICATION_JSON));
    assert_eq!(sent.header(ACCESS_KEY), Some(API_KEY));
    assert_eq!(sent.header(ACCESS_PASSPHRASE), Some(PASSPHRASE));
    assert!(sent.header(ACCESS_SIGN).is_some());
    assert_eq!(sent.headers.len(), 5);
    assert_signed(&sent);
}

#[tokio::test]
async fn test_place_order_body_has_exactly_required_fields() {
    let (client, transport) = client();
    transport.push_response(200, PLACE_ORDER_RESPONSE);

    let params = Params::new()
        .with("symbol", "BTCUSDT")
        .with("side", "buy")
        .with("orderType", "limit")
        .with("force", "gtc")
        .with("size", "0.001");
    client.call("spot_place_order", params).await.unwrap();

    let sent = last_sent(&transport);
    assert_eq!(sent.method, HttpMethod::Post);
    assert_eq!(sent.request_path, "/api/v2/spot/trade/place-order");

    let body: Value = serde_json::from_str(&sent.body).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 5);
    for key in ["symbol", "side", "orderType", "force", "size"] {
        assert!(object.contains_key(key), "missing {key}");
    }
    assert_signed(&sent);
}

#[tokio::test]
async fn test_undeclared_keys_never_leave_the_client() {
    let (client, transport) = client();
    transport.push_response(200, RECENT_TRADES_RESPONSE);
    transport.push_response(200, PLACE_ORDER_RESPONSE);

    client
        .call(
            "spot_recent_trades",
            Params::new().with("symbol", "BTCUSDT").with("sneaky", "1"),
        )
        .await
        .unwrap();
    client
        .call(
            "spot_cancel_order",
            Params::new()
                .with("symbol", "BTCUSDT")
                .with("orderId", "1")
                .with("sneaky", "1"),
        )
        .await
        .unwrap();

    for request in transport.requests() {
        assert!(!request.request_path.contains("sneaky"));
        assert!(!request.url.contains("sneaky"));
        assert!(!request.body.contains("sneaky"));
        assert_signed(&request);
    }
}

#[tokio::test]
async fn test_mix_endpoint_either_or_by_client_oid() {
    let (client, transport) = client();
    transport.push_response(200, r#"{"code":"00000","msg":"success","data":{}}"#);

    client
        .call(
            "mix_order_detail",
            Params::new()
                .with("symbol", "BTCUSDT")
                .with("productType", "USDT-FUTURES")
                .with("clientOid", "abc"),
        )
        .await
        .unwrap();

    assert_eq!(
        last_sent(&transport).request_path,
        "/api/v2/mix/order/detail?symbol=BTCUSDT&productType=USDT-FUTURES&clientOid=abc"
    );
}

#[tokio::test]
async fn test_comma_separated_query_sent_literally() {
    let (client, transport) = client();
    transport.push_response(200, r#"{"code":"00000","msg":"success","data":[]}"#);

    client
        .call(
            "spot_get_account_bills",
            Params::new().with("coin", "USDT").with("businessType", "deposit,withdraw"),
        )
        .await
        .unwrap();

    let sent = last_sent(&transport);
    assert_eq!(
        sent.request_path,
        "/api/v2/spot/account/bills?coin=USDT&businessType=deposit,withdraw"
    );
    assert_signed(&sent);
}

// =============================================================================
// Validation Failures
// =============================================================================

#[tokio::test]
async fn test_cancel_order_without_identifier() {
    let (client, transport) = client();

    let err = client
        .call("spot_cancel_order", Params::new().with("symbol", "BTCUSDT"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RestError::MissingParameter(Missing::EitherOf("orderId", "clientOid"))
    ));
    assert!(err.to_string().contains("clientOid"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_blank_identifiers_send_nothing() {
    let (client, transport) = client();
    transport.push_response(200, PLACE_ORDER_RESPONSE);

    let err = client
        .call(
            "spot_cancel_order",
            Params::new()
                .with("symbol", "BTCUSDT")
                .with("orderId", "")
                .with("clientOid", ""),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RestError::MissingParameter(Missing::EitherOf("orderId", "clientOid"))
    ));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_missing_required_sends_nothing() {
    let (client, transport) = client();
    transport.push_response(200, PLACE_ORDER_RESPONSE);

    let err = client
        .call("spot_place_order", Params::new().with("symbol", "BTCUSDT"))
        .await
        .unwrap_err();

    assert!(matches!(err, RestError::MissingParameter(Missing::Required("side"))));
    assert!(err.is_local());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_unknown_endpoint_name() {
    let (client, transport) = client();

    let err = client.call("spot_plase_order", Params::new()).await.unwrap_err();

    assert!(matches!(err, RestError::UnknownEndpoint(ref name) if name == "spot_plase_order"));
    assert!(transport.requests().is_empty());
}

// =============================================================================
// Responses
// =============================================================================

#[tokio::test]
async fn test_success_body_returned_unmodified() {
    let (client, transport) = client();
    transport.push_response(200, RECENT_TRADES_RESPONSE);

    let value = client
        .call("spot_recent_trades", Params::new().with("symbol", "BTCUSDT"))
        .await
        .unwrap();

    let expected: Value = serde_json::from_str(RECENT_TRADES_RESPONSE).unwrap();
    assert_eq!(value, expected);
}

#[tokio::test]
async fn test_non_2xx_returns_raw_body() {
    let (client, transport) = client();
    transport.push_response(400, INVALID_SIGNATURE_RESPONSE);

    let err = client.call("spot_get_account_info", Params::new()).await.unwrap_err();

    match &err {
        RestError::Api { status, body } => {
            assert_eq!(*status, 400);
            assert_eq!(body, INVALID_SIGNATURE_RESPONSE);
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    assert!(err.is_client_error());
    assert_eq!(err.api_message().as_deref(), Some("invalid signature"));
    assert!(!err.is_local());
}

#[tokio::test]
async fn test_transport_failure_is_not_an_api_error() {
    let (client, _transport) = client();

    // nothing queued, so the transport fails
    let err = client.call("common_server_time", Params::new()).await.unwrap_err();
    assert!(matches!(err, RestError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_envelope_unwraps_payload() {
    let (client, transport) = client();
    transport.push_response(200, PLACE_ORDER_RESPONSE);

    let spec = catalog::find("spot_place_order").unwrap();
    let params = Params::new()
        .with("symbol", "BTCUSDT")
        .with("side", "sell")
        .with("orderType", "market")
        .with("force", "gtc")
        .with("size", "0.5");
    let value = client.execute(spec, params).await.unwrap();

    let envelope: ApiEnvelope = ApiEnvelope::from_value(value).unwrap();
    assert!(envelope.is_success());
    assert_eq!(envelope.data, Some(json!({"orderId": "1098394857234", "clientOid": "a1b2"})));
}
