//! Spot endpoints (`/api/v2/spot/...`)

use crate::endpoint::Category::{self, Account, Market, Public, Trade, Wallet};
use crate::endpoint::{EndpointSpec, ProductType, ORDER_ID_OR_CLIENT_OID};

const fn get(name: &'static str, category: Category, endpoint: &'static str) -> EndpointSpec {
    EndpointSpec::get(name, ProductType::Spot, category, endpoint)
}

const fn post(name: &'static str, category: Category, endpoint: &'static str) -> EndpointSpec {
    EndpointSpec::post(name, ProductType::Spot, category, endpoint)
}

/// Public reference data and market data
pub static MARKET: &[EndpointSpec] = &[
    get("spot_coin_info", Public, "coins").with_optional(&["coin"]),
    get("spot_symbol_info", Public, "symbols").with_optional(&["symbol"]),
    get("spot_vip_fee_rate", Market, "vip-fee-rate"),
    get("spot_ticker_info", Market, "tickers").with_optional(&["symbol"]),
    get("spot_merge_depth", Market, "merge-depth")
        .with_required(&["symbol"])
        .with_optional(&["precision", "limit"]),
    get("spot_orderbook_depth", Market, "orderbook")
        .with_required(&["symbol"])
        .with_optional(&["type", "limit"]),
    get("spot_candlestick_data", Market, "candles")
        .with_required(&["symbol", "granularity"])
        .with_optional(&["startTime", "endTime", "limit"]),
    get("spot_history_candlestick_data", Market, "history-candles")
        .with_required(&["symbol", "granularity", "endTime"])
        .with_optional(&["limit"]),
    get("spot_recent_trades", Market, "fills")
        .with_required(&["symbol"])
        .with_optional(&["limit"]),
    get("spot_market_trades", Market, "fills-history")
        .with_required(&["symbol"])
        .with_optional(&["limit", "idLessThan", "startTime", "endTime"]),
];

/// Order placement, cancellation and queries
pub static TRADE: &[EndpointSpec] = &[
    post("spot_place_order", Trade, "place-order")
        .with_required(&["symbol", "side", "orderType", "force", "size"])
        .with_optional(&[
            "price",
            "clientOid",
            "triggerPrice",
            "tpslType",
            "requestTime",
            "receiveWindow",
            "stpMode",
            "presetTakeProfitPrice",
            "executeTakeProfitPrice",
            "presetStopLossPrice",
            "executeStopLossPrice",
        ]),
    post("spot_cancel_replace_order", Trade, "cancel-replace-order")
        .with_required(&["symbol", "price", "size"])
        .with_optional(&[
            "clientOid",
            "orderId",
            "newClientOid",
            "presetTakeProfitPrice",
            "executeTakeProfitPrice",
            "presetStopLossPrice",
            "executeStopLossPrice",
        ])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    post("spot_cancel_order", Trade, "cancel-order")
        .with_required(&["symbol"])
        .with_optional(&["tpslType", "orderId", "clientOid"])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    post("spot_batch_place_order", Trade, "batch-orders")
        .with_required(&["orderList", "side", "orderType", "force", "size"])
        .with_optional(&[
            "symbol",
            "batchMode",
            "price",
            "clientOid",
            "stpMode",
            "presetTakeProfitPrice",
            "executeTakeProfitPrice",
            "presetStopLossPrice",
            "executeStopLossPrice",
        ]),
    post("spot_batch_cancel_replace_order", Trade, "batch-cancel-replace-order")
        .with_required(&["orderList", "symbol", "price", "size"])
        .with_optional(&[
            "clientOid",
            "orderId",
            "newClientOid",
            "presetTakeProfitPrice",
            "executeTakeProfitPrice",
            "presetStopLossPrice",
            "executeStopLossPrice",
        ])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    post("spot_batch_cancel_order", Trade, "batch-cancel-order")
        .with_required(&["orderList"])
        .with_optional(&["symbol", "batchMode", "orderId", "clientOid"])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    post("spot_cancel_order_symbol", Trade, "cancel-symbol-order").with_required(&["symbol"]),
    get("spot_order_info", Trade, "orderInfo")
        .with_optional(&["orderId", "clientOid", "requestTime", "receiveWindow"])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    get("spot_current_orders", Trade, "unfilled-orders").with_optional(&[
        "symbol",
        "startTime",
        "endTime",
        "idLessThan",
        "limit",
        "orderId",
        "tpslType",
        "requestTime",
        "receiveWindow",
    ]),
    get("spot_history_orders", Trade, "history-orders").with_optional(&[
        "symbol",
        "startTime",
        "endTime",
        "idLessThan",
        "limit",
        "orderId",
        "tpslType",
        "requestTime",
        "receiveWindow",
    ]),
    get("spot_fills", Trade, "fills")
        .with_required(&["symbol"])
        .with_optional(&["orderId", "startTime", "endTime", "limit", "idLessThan"]),
];

/// Plan (trigger) orders
pub static PLAN: &[EndpointSpec] = &[
    post("spot_place_plan_order", Trade, "place-plan-order")
        .with_required(&["symbol", "side", "triggerPrice", "orderType", "size", "triggerType"])
        .with_optional(&["executePrice", "planType", "clientOid", "force", "stpMode"]),
    post("spot_modify_plan_order", Trade, "modify-plan-order")
        .with_required(&["triggerPrice", "orderType", "size"])
        .with_optional(&["orderId", "clientOid", "executePrice"])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    post("spot_cancel_plan_order", Trade, "cancel-plan-order")
        .with_optional(&["orderId", "clientOid"])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    get("spot_get_current_plan_orders", Trade, "current-plan-order")
        .with_required(&["symbol"])
        .with_optional(&["limit", "idLessThan", "startTime", "endTime"]),
    get("spot_get_plan_sub_order", Trade, "plan-sub-order").with_required(&["planOrderId"]),
    get("spot_get_history_plan_orders", Trade, "history-plan-order")
        .with_required(&["symbol", "startTime", "endTime"])
        .with_optional(&["limit"]),
    post("spot_batch_cancel_plan_order", Trade, "batch-cancel-plan-order")
        .with_optional(&["symbolList"]),
];

/// Account information, bills and settings
pub static ACCOUNT: &[EndpointSpec] = &[
    get("spot_get_account_info", Account, "info"),
    get("spot_get_account_assets", Account, "assets").with_optional(&["coin", "assetType"]),
    get("spot_get_sub_account_assets", Account, "subaccount-assets"),
    get("spot_get_account_bills", Account, "bills").with_optional(&[
        "coin",
        "groupType",
        "businessType",
        "startTime",
        "endTime",
        "limit",
        "idLessThan",
    ]),
    get("spot_get_mainsub_transfer_record", Account, "sub-main-trans-record").with_optional(&[
        "coin",
        "role",
        "subUid",
        "startTime",
        "endTime",
        "clientOid",
        "limit",
        "idLessThan",
    ]),
    get("spot_get_transfer_record", Account, "transferRecords")
        .with_required(&["coin", "fromType"])
        .with_optional(&["startTime", "endTime", "clientOid", "limit", "idLessThan"]),
    post("spot_switch_bgb_deduct", Account, "switch-deduct").with_required(&["deduct"]),
    get("spot_get_bgb_deduct_info", Account, "deduct-info"),
];

/// Transfers, deposits and withdrawals
pub static WALLET: &[EndpointSpec] = &[
    post("spot_modify_deposit_account", Wallet, "modify-deposit-account")
        .with_required(&["accountType", "coin"]),
    post("spot_transfer", Wallet, "transfer")
        .with_required(&["fromType", "toType", "amount", "coin", "symbol"])
        .with_optional(&["clientOid"]),
    get("spot_get_transferable_coin_list", Wallet, "transfer-coin-info")
        .with_required(&["fromType", "toType"]),
    post("spot_sub_transfer", Wallet, "subaccount-transfer")
        .with_required(&["fromType", "toType", "amount", "coin", "fromUserId", "toUserId"])
        .with_optional(&["symbol", "clientOid"]),
    post("spot_withdraw", Wallet, "withdrawal")
        .with_required(&["coin", "transferType", "address", "size"])
        .with_optional(&["chain", "innerToType", "areaCode", "tag", "remark", "clientOid"]),
    get("spot_get_deposit_address", Wallet, "deposit-address")
        .with_required(&["coin"])
        .with_optional(&["chain", "size"]),
    get("spot_get_subaccount_deposit_address", Wallet, "subaccount-deposit-address")
        .with_required(&["subUid", "coin"])
        .with_optional(&["chain", "size"]),
    post("spot_cancel_withdrawal", Wallet, "cancel-withdrawal").with_required(&["orderId"]),
    get("spot_get_subaccount_deposit_records", Wallet, "subaccount-deposit-records")
        .with_required(&["subUid"])
        .with_optional(&["coin", "startTime", "endTime", "idLessThan", "limit"]),
    get("spot_get_withdrawal_records", Wallet, "withdrawal-records")
        .with_required(&["startTime", "endTime"])
        .with_optional(&["coin", "clientOid", "idLessThan", "orderId", "limit"])
        .with_either_or(&[ORDER_ID_OR_CLIENT_OID]),
    get("spot_get_deposit_records", Wallet, "deposit-records")
        .with_required(&["startTime", "endTime"])
        .with_optional(&["coin", "orderId", "idLessThan", "limit"]),
];
