//! Integration tests for the Binance kline provider.

use solsignal::models::Sample;
use solsignal::services::{BinanceKlineProvider, MarketDataProvider, ServiceError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{mock_klines, uptrend_klines};

#[tokio::test]
async fn klines_are_decoded_oldest_first() {
    let server = MockServer::start().await;
    mock_klines(&server, "SOLUSDT", 200, uptrend_klines(200)).await;

    let provider = BinanceKlineProvider::with_base_url(server.uri(), "1m");
    let samples = provider.get_samples("SOLUSDT", 200).await.expect("klines");

    assert_eq!(samples.len(), 200);
    assert_eq!(samples[0], Sample::new(100.0, 1000.0));
    assert_eq!(samples[199], Sample::new(299.0, 1000.0));
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/klines"))
        .respond_with(ResponseTemplate::new(400).set_body_string("{\"code\":-1121}"))
        .mount(&server)
        .await;

    let provider = BinanceKlineProvider::with_base_url(server.uri(), "1m");
    match provider.get_samples("NOPE", 200).await {
        Err(ServiceError::Api { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("-1121"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_response_is_reported() {
    let server = MockServer::start().await;
    mock_klines(&server, "SOLUSDT", 200, serde_json::json!([])).await;

    let provider = BinanceKlineProvider::with_base_url(server.uri(), "1m");
    let result = provider.get_samples("SOLUSDT", 200).await;
    assert!(matches!(result, Err(ServiceError::EmptySeries(_))));
}

#[tokio::test]
async fn malformed_rows_are_decode_errors() {
    let server = MockServer::start().await;
    mock_klines(&server, "SOLUSDT", 200, serde_json::json!([[0, "1", "2"]])).await;

    let provider = BinanceKlineProvider::with_base_url(server.uri(), "1m");
    let result = provider.get_samples("SOLUSDT", 200).await;
    assert!(matches!(result, Err(ServiceError::Decode(_))));
}
