//! Integration tests for public endpoints against a mock exchange

mod common;

use bittrex_rest::decode::{binary_float, decimal_string};
use bittrex_rest::{BittrexRestClient, ClientConfig, NumberPolicy, RestError, TickInterval};
use common::*;
use rust_decimal_macros::dec;
use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Market Summaries
// =============================================================================

#[tokio::test]
async fn test_market_summaries_contains_btc_ltc() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/markets/getmarketsummaries"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MARKET_SUMMARIES))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let response = client.get_market_summaries().await.unwrap();

    assert!(response.success);
    let entries = response.result.unwrap();
    let ltc = entries
        .iter()
        .find(|entry| entry.name() == Some("BTC-LTC"))
        .expect("BTC-LTC should be listed");
    assert_eq!(ltc.summary.as_ref().unwrap().last, Some(dec!(0.01281000)));

    let requests = received(&server).await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("apisign").is_none());
    assert!(query_pairs(&requests[0]).is_empty());
}

#[tokio::test]
async fn test_market_summary_keeps_exact_decimals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/market/getmarketsummary"))
        .and(query_param("marketname", "BTC-LTC"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MARKET_SUMMARY))
        .mount(&server)
        .await;

    let client = public_client(&server);
    let summary = client.get_market_summary("BTC-LTC").await.unwrap().result.unwrap();

    assert_eq!(summary.market_name, "BTC-LTC");
    assert_eq!(summary.last, Some(dec!(123.45000001)));
    assert_eq!(summary.bid, Some(dec!(0.01271001)));
    assert_eq!(summary.open_buy_orders, Some(45));
    assert_eq!(summary.spread(), Some(dec!(0.00020099)));
}

#[tokio::test]
async fn test_raw_dispatch_applies_number_policy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/market/getmarketsummary"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MARKET_SUMMARY))
        .mount(&server)
        .await;

    let client = BittrexRestClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_number_policy(NumberPolicy::default().with_float(decimal_string)),
    )
    .unwrap();

    let response = client
        .dispatch("market", "getmarketsummary", &[("marketname", "BTC-LTC")])
        .await
        .unwrap();
    let result = response.result.unwrap();

    assert_eq!(result["Last"], Value::String("123.45000001".to_string()));
    assert_eq!(result["OpenBuyOrders"].as_u64(), Some(45));
}

#[tokio::test]
async fn test_binary_float_policy_rounds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/market/getmarketsummary"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"success":true,"message":"","result":{"MarketName":"BTC-LTC","Last":0.30000000000000001}}"#),
        )
        .mount(&server)
        .await;

    let exact = public_client(&server)
        .get_market_summary("BTC-LTC")
        .await
        .unwrap();
    assert_eq!(exact.result.unwrap().last, Some(dec!(0.30000000000000001)));

    let rounding = BittrexRestClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_number_policy(NumberPolicy::default().with_float(binary_float)),
    )
    .unwrap();
    let rounded = rounding.get_market_summary("BTC-LTC").await.unwrap();
    assert_eq!(rounded.result.unwrap().last, Some(dec!(0.3)));
}

#[tokio::test]
async fn test_raw_dispatch_accepts_numbers_wider_than_decimal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/currencies/getcurrencies"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"success":true,"message":"","result":[{"Currency":"BTC","TxFee":0.123456789012345678901234567890123}]}"#,
        ))
        .mount(&server)
        .await;

    let response = public_client(&server)
        .dispatch("currencies", "getcurrencies", &[] as &[(&str, &str)])
        .await
        .unwrap();
    let result = response.result.unwrap();

    assert_eq!(result[0]["TxFee"].to_string(), "0.123456789012345678901234567890123");
}

// =============================================================================
// Other Public Commands
// =============================================================================

#[tokio::test]
async fn test_orderbook() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/market/getmarketorderbook"))
        .and(query_param("marketname", "BTC-ETH"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ORDER_BOOK))
        .mount(&server)
        .await;

    let client = public_client(&server);
    let book = client.market().get_market_orderbook("BTC-ETH").await.unwrap().result.unwrap();

    assert_eq!(book.buy.len(), 2);
    assert_eq!(book.best_bid(), Some(dec!(0.02525)));
    assert_eq!(book.best_ask(), Some(dec!(0.02526)));
    assert_eq!(book.spread(), Some(dec!(0.00001)));
    assert_eq!(book.buy[1].quantity, dec!(32.55412402));
}

#[tokio::test]
async fn test_ticks_query_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/market/GetTicks"))
        .and(query_param("marketName", "BTC-LTC"))
        .and(query_param("tickInterval", "thirtyMin"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"success":true,"message":"","result":[
                {"O":0.0128,"H":0.0129,"L":0.0127,"C":0.01285,"V":120.5,"T":"2017-08-01T00:00:00","BV":1.54}
            ]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let ticks = client
        .get_ticks("BTC-LTC", TickInterval::ThirtyMin)
        .await
        .unwrap()
        .result
        .unwrap();

    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].close, dec!(0.01285));
    assert_eq!(ticks[0].time, "2017-08-01T00:00:00");
}

#[tokio::test]
async fn test_markets_currencies_and_wallet_health_paths() {
    let server = MockServer::start().await;
    for route in [
        "/pub/markets/getmarkets",
        "/pub/currencies/getcurrencies",
        "/pub/currencies/getwallethealth",
    ] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_LIST))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = public_client(&server);
    assert!(client.get_markets().await.unwrap().result.unwrap().is_empty());
    assert!(client.get_currencies().await.unwrap().result.unwrap().is_empty());
    assert!(client.get_wallet_health().await.unwrap().result.unwrap().is_empty());
}

// =============================================================================
// Envelope Handling
// =============================================================================

#[tokio::test]
async fn test_failure_envelope_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/market/getmarketsummary"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FAILURE))
        .mount(&server)
        .await;

    let client = public_client(&server);
    let response = client.get_market_summary("BTC-NOPE").await.unwrap();

    assert!(!response.is_success());
    assert_eq!(response.message, "INVALID_MARKET");
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_unknown_command_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_LIST))
        .expect(0)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let err = client
        .dispatch("market", "getfoo", &[("marketname", "BTC-LTC")])
        .await
        .unwrap_err();

    assert!(matches!(err, RestError::InvalidCommand { ref command } if command == "getfoo"));
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/markets/getmarkets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = public_client(&server).get_markets().await.unwrap_err();
    assert!(matches!(err, RestError::Malformed(_)));
}

#[tokio::test]
async fn test_unexpected_shape_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pub/markets/getmarkets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"success":true,"message":"","result":{"not":"a list"}}"#),
        )
        .mount(&server)
        .await;

    let err = public_client(&server).get_markets().await.unwrap_err();
    assert!(matches!(err, RestError::Malformed(_)));
}
