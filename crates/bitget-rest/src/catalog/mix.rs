//! Futures endpoints (`/api/v2/mix/...`)
//!
//! Nearly every mix endpoint needs a `productType` (`USDT-FUTURES`,
//! `COIN-FUTURES`, `USDC-FUTURES` or their `S`-prefixed demo variants).

use crate::endpoint::Category::{self, Account, Market, Order, Position};
use crate::endpoint::{EndpointSpec, ProductType, ORDER_ID_OR_CLIENT_OID};

const fn get(name: &'static str, category: Category, endpoint: &'static str) -> EndpointSpec {
    EndpointSpec::get(name, ProductType::Mix, category, endpoint)
}

const fn post(name: &'static str, category: Category, endpoint: &'static str) -> EndpointSpec {
    EndpointSpec::post(name, ProductType::Mix, category, endpoint)
}

/// Contract reference data and market data
pub static MARKET: &[EndpointSpec] = &[
    get("mix_vip_fee_rate", Market, "vip-fee-rate"),
    get("mix_interest_rate_history", Market, "union-interest-rate-history")
        .with_required(&["coin"]),
    get("mix_interest_exchange_rate", Market, "exchange-rate"),
    get("mix_discount_rate", Market, "discount-rate"),
    get("mix_merge_market_depth", Market, "merge-depth")
        .with_required(&["symbol", "productType"])
        .with_optional(&["precision", "limit"]),
    get("mix_ticker", Market, "ticker").with_required(&["symbol", "productType"]),
    get("mix_all_tickers", Market, "tickers").with_required(&["productType"]),
    get("mix_recent_transactions", Market, "fills")
        .with_required(&["symbol", "productType"])
        .with_optional(&["limit"]),
    get("mix_history_transactions", Market, "fills-history")
        .with_required(&["symbol", "productType"])
        .with_optional(&["limit", "idLessThan", "startTime", "endTime"]),
    get("mix_candlestick_data", Market, "candles")
        .with_required(&["symbol", "productType", "granularity"])
        .with_optional(&["startTime", "endTime", "kLineType", "limit"]),
    get("mix_historical_candlestick", Market, "history-candles")
        .with_required(&["symbol", "productType", "granularity"])
        .with_optional(&["startTime", "endTime", "limit"]),
    get("mix_historical_index_price_candlestick", Market, "history-index-candles")
        .with_required(&["symbol", "productType", "granularity"])
        .with_optional(&["startTime", "endTime", "limit"]),
    get("mix_historical_mark_price_candlestick", Market, "history-mark-candles")
        .with_required(&["symbol", "productType", "granularity"])
        .with_optional(&["startTime", "endTime", "limit"]),
    get("mix_open_interest", Market, "open-interest").with_required(&["symbol", "productType"]),
    get("mix_next_funding_time", Market, "funding-time").with_required(&["symbol", "productType"]),
    get("mix_mark_index_market_prices", Market, "symbol-price")
        .with_required(&["symbol", "productType"]),
    get("mix_historical_funding_rates", Market, "history-fund-rate")
        .with_required(&["symbol", "productType"])
        .with_optional(&["pageSize", "pageNo"]),
    get("mix_current_funding_rate", Market, "current-funding-rate")
        .with_required(&["symbol", "productType"]),
    get("mix_contract_config", Market, "contracts")
        .with_required(&["productType"])
        .with_optional(&["symbol"]),
];

/// Margin accounts, leverage and account settings
pub static ACCOUNT: &[EndpointSpec] = &[
    get("mix_account", Account, "account").with_required(&["symbol", "productType", "marginCoin"]),
    get("mix_accounts", Account, "accounts").with_required(&["productType"]),
    get("mix_sub_account_assets", Account, "sub-account-assets").with_required(&["productType"]),
    get("mix_interest_history", Account, "interest-history")
        .with_required(&["productType"])
        .with_optional(&["coin", "idLessThan", "startTime", "endTime", "limit"]),
    get("mix_open_count", Account, "open-count")
        .with_required(&["symbol", "productType", "marginCoin", "openAmount", "openPrice"])
        .with_optional(&["leverage"]),
    post("mix_set_auto_margin", Account, "set-auto-margin")
        .with_required(&["symbol", "autoMargin", "marginCoin", "holdSide"]),
    post("mix_set_leverage", Account, "set-leverage")
        .with_required(&["symbol", "productType", "marginCoin", "leverage"])
        .with_optional(&["holdSide"]),
    post("mix_set_margin", Account, "set-margin")
        .with_required(&["symbol", "productType", "marginCoin", "amount"])
        .with_optional(&["holdSide"]),
    post("mix_set_asset_mode", Account, "set-asset-mode")
        .with_required(&["productType", "assetMode"]),
    post("mix_set_margin_mode", Account, "set-margin-mode")
        .with_required(&["symbol", "productType", "marginCoin", "marginMode"]),
    post("mix_set_position_mode", Account, "set-position-mode")
        .with_required(&["productType", "posMode"]),
    get("mix_account_bill", Account, "bill")
        .with_required(&["productType"])
        .with_optional(&[
            "symbol",
            "coin",
            "businessType",
            "idLessThan",
            "startTime",
            "endTime",
            "limit",
        ]),
];

/// Open and historical positions
pub static POSITION: &[EndpointSpec] = &[
    get("mix_single_position", Position, "single-position")
        .with_required(&["symbol", "productType", "marginCoin"]),
    get("mix_all_positions", Position, "all-position")
        .with_required(&["productType"])
        .with_optional(&["marginCoin"]),
    get("mix_history_positions", Position, "history-position").with_optional(&[
        "symbol",
        "productType",
        "idLessThan",
        "startTime",
        "endTime",
        "limit",
    ]),
];

/// Order placement, cancellation and queries
pub static TRADE: &[EndpointSpec] = &[
    post("mix_place_order", Order, "place-order")
        .with_required(&[
            "symbol",
            "productType",
            "marginMode",
            "marginCoin",
            "size",
            "side",
            "orderType",
        ])
        .with_optional(&[
            "price",
            "tradeSide",
            "force",
            "clientOid",
            "reduceOnly",
            "presetStopSurplusPrice",
            "presetStopLossPrice",
            "stpMode",
        ]),
    post("mix_reversal", Order, "click-backhand")
        .with_required(&["symbol", "marginCoin", "productType", "side", "size"])
        .with_optional(&["tradeSide", "clientOid"]),
    post("mix_batch_place_order", Order, "batch-place-order")
        .with_required(&["symbol", "productType", "marginCoin", "marginMode", "orderList"]),
    post("mix_modify_order", Order, "modify-order")
        .with_required(&["symbol", "productType", "marginCoin", "newClientOid"])
        .with_optional(&[
            "orderId",
            "clientOid",
            "newSize",
            "newPrice",
            "newPresetStopSurplusPrice",
            "newPresetStopLossPrice",
        ])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    post("mix_cancel_order", Order, "cancel-order")
        .with_required(&["symbol", "productType"])
        .with_optional(&["marginCoin", "orderId", "clientOid"])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    post("mix_batch_cancel_orders", Order, "batch-cancel-orders")
        .with_required(&["productType"])
        .with_optional(&["symbol", "marginCoin", "orderIdList"]),
    post("mix_flash_close_position", Order, "close-positions")
        .with_required(&["productType"])
        .with_optional(&["symbol", "holdSide"]),
    get("mix_order_detail", Order, "detail")
        .with_required(&["symbol", "productType"])
        .with_optional(&["orderId", "clientOid"])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    get("mix_order_fills", Order, "fills")
        .with_required(&["productType"])
        .with_optional(&["orderId", "symbol", "idLessThan", "startTime", "endTime", "limit"]),
    get("mix_order_fill_history", Order, "fill-history")
        .with_required(&["productType"])
        .with_optional(&["orderId", "symbol", "idLessThan", "startTime", "endTime", "limit"]),
    get("mix_pending_orders", Order, "orders-pending")
        .with_required(&["productType"])
        .with_optional(&[
            "orderId",
            "clientOid",
            "symbol",
            "status",
            "idLessThan",
            "startTime",
            "endTime",
            "limit",
        ]),
    get("mix_history_orders", Order, "orders-history")
        .with_required(&["productType"])
        .with_optional(&[
            "orderId",
            "clientOid",
            "symbol",
            "idLessThan",
            "orderSource",
            "startTime",
            "endTime",
            "limit",
        ]),
    post("mix_cancel_all_orders", Order, "cancel-all-orders")
        .with_required(&["productType"])
        .with_optional(&["marginCoin", "requestTime", "receiveWindow"]),
];

/// Plan (trigger) and take-profit / stop-loss orders
pub static PLAN: &[EndpointSpec] = &[
    post("mix_place_tpsl_order", Order, "place-tpsl-order")
        .with_required(&[
            "marginCoin",
            "productType",
            "symbol",
            "planType",
            "triggerPrice",
            "holdSide",
            "size",
        ])
        .with_optional(&["triggerType", "executePrice", "rangeRate", "clientOid"]),
    post("mix_place_plan_order", Order, "place-plan-order")
        .with_required(&[
            "planType",
            "symbol",
            "productType",
            "marginMode",
            "marginCoin",
            "size",
            "triggerPrice",
            "triggerType",
            "side",
            "orderType",
        ])
        .with_optional(&[
            "price",
            "callbackRatio",
            "tradeSide",
            "clientOid",
            "reduceOnly",
            "stopSurplusTriggerPrice",
            "stopSurplusExecutePrice",
            "stopSurplusTriggerType",
            "stopLossTriggerPrice",
            "stopLossExecutePrice",
            "stopLossTriggerType",
        ]),
    post("mix_modify_tpsl_order", Order, "modify-tpsl-order")
        .with_required(&["marginCoin", "productType", "symbol", "triggerPrice", "size"])
        .with_optional(&["orderId", "clientOid", "triggerType", "executePrice", "rangeRate"])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    post("mix_modify_plan_order", Order, "modify-plan-order")
        .with_required(&["symbol", "productType"])
        .with_optional(&[
            "orderId",
            "clientOid",
            "newSize",
            "newPrice",
            "newCallbackRatio",
            "newTriggerPrice",
            "newTriggerType",
            "newStopSurplusTriggerPrice",
            "newStopSurplusExecutePrice",
            "newStopSurplusTriggerType",
            "newStopLossTriggerPrice",
            "newStopLossExecutePrice",
            "newStopLossTriggerType",
        ])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    post("mix_cancel_plan_order", Order, "cancel-plan-order")
        .with_required(&["productType"])
        .with_optional(&["orderIdList", "symbol", "marginCoin", "planType"]),
    get("mix_pending_plan_orders", Order, "orders-plan-pending")
        .with_required(&["productType", "planType"])
        .with_optional(&[
            "orderId",
            "clientOid",
            "symbol",
            "idLessThan",
            "startTime",
            "endTime",
            "limit",
        ]),
    get("mix_history_plan_orders", Order, "orders-plan-history")
        .with_required(&["productType", "planType"])
        .with_optional(&[
            "orderId",
            "clientOid",
            "symbol",
            "planStatus",
            "idLessThan",
            "startTime",
            "endTime",
            "limit",
        ]),
    get("mix_plan_sub_order", Order, "plan-sub-order")
        .with_required(&["planOrderId", "planType", "productType"]),
];
