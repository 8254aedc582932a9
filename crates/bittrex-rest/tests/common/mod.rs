//! Common test utilities and fixtures for integration tests
//!
//! Bodies mirror what the v2.0 API returns, trimmed to the fields the tests
//! look at.

#![allow(dead_code)]

use bittrex_rest::{BittrexRestClient, ClientConfig, Credentials};
use std::time::Duration;
use wiremock::{MockServer, Request};

/// `getmarketsummary` for BTC-LTC with an eight-decimal last price
pub const MARKET_SUMMARY: &str = r#"{
    "success": true,
    "message": "",
    "result": {
        "MarketName": "BTC-LTC",
        "High": 0.01350000,
        "Low": 0.01200000,
        "Volume": 3833.97619253,
        "Last": 123.45000001,
        "BaseVolume": 47.03987026,
        "TimeStamp": "2014-07-09T07:19:30.15",
        "Bid": 0.01271001,
        "Ask": 0.01291100,
        "OpenBuyOrders": 45,
        "OpenSellOrders": 45,
        "PrevDay": 0.01229501,
        "Created": "2014-02-13T00:00:00"
    }
}"#;

/// `getmarketsummaries` with two markets
pub const MARKET_SUMMARIES: &str = r#"{
    "success": true,
    "message": "",
    "result": [
        {
            "Market": {
                "MarketCurrency": "LTC",
                "BaseCurrency": "BTC",
                "MarketCurrencyLong": "Litecoin",
                "BaseCurrencyLong": "Bitcoin",
                "MinTradeSize": 0.01435906,
                "MarketName": "BTC-LTC",
                "IsActive": true,
                "Created": "2014-02-13T00:00:00"
            },
            "Summary": {
                "MarketName": "BTC-LTC",
                "High": 0.01350000,
                "Low": 0.01200000,
                "Last": 0.01281000,
                "Bid": 0.01271001,
                "Ask": 0.01291100
            },
            "IsVerified": false
        },
        {
            "Market": {
                "MarketCurrency": "ETH",
                "BaseCurrency": "BTC",
                "MarketName": "BTC-ETH",
                "IsActive": true
            },
            "Summary": {
                "MarketName": "BTC-ETH",
                "Last": 0.03100000
            },
            "IsVerified": true
        }
    ]
}"#;

/// `getmarketorderbook` with two levels a side
pub const ORDER_BOOK: &str = r#"{
    "success": true,
    "message": "",
    "result": {
        "buy": [
            {"Quantity": 12.37, "Rate": 0.02525000},
            {"Quantity": 32.55412402, "Rate": 0.02524000}
        ],
        "sell": [
            {"Quantity": 38.48, "Rate": 0.02526000},
            {"Quantity": 10.00000000, "Rate": 0.02527000}
        ]
    }
}"#;

/// `getbalances` in the wrapped v2 shape
pub const BALANCES: &str = r#"{
    "success": true,
    "message": "",
    "result": [
        {
            "Currency": {"Currency": "BTC", "CurrencyLong": "Bitcoin", "TxFee": 0.00050000},
            "Balance": {
                "Currency": "BTC",
                "Balance": 4.21549076,
                "Available": 4.21549076,
                "Pending": 0.00000000,
                "CryptoAddress": "1MacMr6715hjds342dXuLqXcju6fgwHA31"
            },
            "BitcoinMarket": null,
            "EthereumMarket": null
        }
    ]
}"#;

/// `getbalance` for one currency
pub const BALANCE: &str = r#"{
    "success": true,
    "message": "",
    "result": {
        "Currency": "BTC",
        "Balance": 4.21549076,
        "Available": 4.21549076,
        "Pending": 0.00000000,
        "CryptoAddress": "1MacMr6715hjds342dXuLqXcju6fgwHA31",
        "Requested": false,
        "Uuid": null
    }
}"#;

/// Envelope with an empty list result
pub const EMPTY_LIST: &str = r#"{"success": true, "message": "", "result": []}"#;

/// Envelope the exchange sends for rejected calls
pub const FAILURE: &str = r#"{"success": false, "message": "INVALID_MARKET", "result": null}"#;

/// Key used by [`private_client`]
pub const API_KEY: &str = "key";

/// Secret used by [`private_client`]
pub const API_SECRET: &str = "secret";

/// Public client talking to the mock server
pub fn public_client(server: &MockServer) -> BittrexRestClient {
    BittrexRestClient::with_config(ClientConfig::new().with_base_url(server.uri()))
        .expect("client should build")
}

/// Fully credentialed client talking to the mock server
pub fn private_client(server: &MockServer) -> BittrexRestClient {
    client_with(server, Credentials::new(API_KEY, API_SECRET))
}

/// Client with arbitrary credentials talking to the mock server
pub fn client_with(server: &MockServer, credentials: Credentials) -> BittrexRestClient {
    BittrexRestClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_credentials(credentials)
            .with_timeout(Duration::from_secs(5)),
    )
    .expect("client should build")
}

/// Query pairs of a received request, in wire order
pub fn query_pairs(request: &Request) -> Vec<(String, String)> {
    serde_urlencoded::from_str(request.url.query().unwrap_or("")).expect("query should decode")
}

/// Value of one query parameter of a received request
pub fn query_value(request: &Request, name: &str) -> Option<String> {
    query_pairs(request)
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// All requests the server saw
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording should be enabled")
}
