use std::sync::Arc;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinmarketcap_api_client::auth::StaticCredentials;
use coinmarketcap_api_client::private::{
    IdMapRequest, MetadataRequest, PrivateApiClient, QuotesRequest, TickersRequest,
};
use coinmarketcap_api_client::types::{ApiResponse, PriceConversionRequest, SortDir};
use rust_decimal::Decimal;

fn build_client(server: &MockServer) -> PrivateApiClient {
    PrivateApiClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new("test_key")))
        .build()
        .unwrap()
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "data": data,
        "status": {
            "timestamp": "2024-03-01T10:00:00.000Z",
            "error_code": 0,
            "error_message": null,
            "elapsed": 10,
            "credit_count": 1
        }
    })
}

#[tokio::test]
async fn test_get_id_map() {
    let server = MockServer::start().await;
    let response = ok_envelope(serde_json::json!([
        { "id": 1, "name": "Bitcoin", "symbol": "BTC", "slug": "bitcoin" },
        { "id": 1027, "name": "Ethereum", "symbol": "ETH", "slug": "ethereum" }
    ]));

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/map"))
        .and(query_param("symbol", "BTC,ETH"))
        .and(header("X-CMC_PRO_API_KEY", "test_key"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let map = client
        .get_id_map(Some(&IdMapRequest::for_symbols(vec!["BTC", "ETH"])))
        .await
        .unwrap();

    assert_eq!(map["data"][1]["id"], 1027);
}

#[tokio::test]
async fn test_get_metadata_by_id() {
    let server = MockServer::start().await;
    let response = ok_envelope(serde_json::json!({
        "1": { "id": 1, "name": "Bitcoin", "symbol": "BTC", "category": "coin" }
    }));

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/info"))
        .and(query_param("id", "1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let info = client
        .get_metadata(&MetadataRequest::by_id(vec![1, 2]))
        .await
        .unwrap();

    assert_eq!(info["data"]["1"]["category"], "coin");
}

#[tokio::test]
async fn test_get_metadata_requires_identifier() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client
        .get_metadata(&MetadataRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "Invalid argument: Either ID or symbol is required to be passed in."
    );
}

#[tokio::test]
async fn test_get_tickers_with_max_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/listings/latest"))
        .and(query_param("limit", "5000"))
        .and(query_param("sort_dir", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = TickersRequest {
        limit: Some(0),
        sort_dir: Some(SortDir::Asc),
        ..Default::default()
    };
    let tickers = client.get_tickers(Some(&request)).await.unwrap();

    assert!(tickers["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_quotes_with_convert() {
    let server = MockServer::start().await;
    let response = ok_envelope(serde_json::json!({
        "ETH": {
            "id": 1027,
            "symbol": "ETH",
            "quote": { "EUR": { "price": 3012.5 } }
        }
    }));

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/quotes/latest"))
        .and(query_param("symbol", "ETH"))
        .and(query_param("convert", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let quotes = client
        .get_quotes(&QuotesRequest::by_symbol("ETH").convert("EUR"))
        .await
        .unwrap();

    assert_eq!(quotes["data"]["ETH"]["quote"]["EUR"]["price"], 3012.5);
}

#[tokio::test]
async fn test_get_global_upper_cases_currency() {
    let server = MockServer::start().await;
    let response = ok_envelope(serde_json::json!({
        "active_cryptocurrencies": 9000,
        "quote": { "GBP": { "total_market_cap": 1.5e12 } }
    }));

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .and(query_param("convert", "GBP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let global = client.get_global(Some("gbp".into())).await.unwrap();

    assert_eq!(global["data"]["active_cryptocurrencies"], 9000);
}

#[tokio::test]
async fn test_convert_currency() {
    let server = MockServer::start().await;
    let response = ok_envelope(serde_json::json!({
        "id": 1,
        "symbol": "BTC",
        "amount": 2,
        "quote": { "USD": { "price": 130000.0 } }
    }));

    Mock::given(method("GET"))
        .and(path("/v1/tools/price-conversion"))
        .and(query_param("amount", "2"))
        .and(query_param("id", "1"))
        .and(query_param("convert", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = PriceConversionRequest::new(Decimal::TWO).id(1).convert("USD");
    let converted = client.convert_currency(&request).await.unwrap();

    assert_eq!(converted["data"]["quote"]["USD"]["price"], 130000.0);
}

#[tokio::test]
async fn test_error_status_is_returned_as_value() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": {
            "timestamp": "2024-03-01T10:00:00.000Z",
            "error_code": 1001,
            "error_message": "This API Key is invalid.",
            "elapsed": 0,
            "credit_count": 0
        }
    });

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/map"))
        .respond_with(ResponseTemplate::new(401).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let value = client.get_id_map(None).await.unwrap();
    let envelope: ApiResponse = ApiResponse::from_value(value).unwrap();

    assert!(envelope.status.is_error());
    assert_eq!(envelope.status.error_code, Some(1001));
    assert!(envelope.data.is_none());
}

#[tokio::test]
async fn test_non_json_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/map"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_id_map(None).await.unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_custom_header_overrides_baseline() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cryptocurrency/map"))
        .and(header("Accept", "application/vnd.cmc+json"))
        .and(header("X-Trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = PrivateApiClient::builder()
        .base_url(server.uri())
        .api_key("test_key")
        .header("Accept", "application/vnd.cmc+json")
        .header("X-Trace", "abc")
        .build()
        .unwrap();
    client.get_id_map(None).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/global-metrics/quotes/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(serde_json::json!({}))))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let other = client.clone();
    let (usd, eur) = tokio::join!(
        client.get_global(Some("usd".into())),
        other.get_global(Some(vec!["eur", "gbp"].into())),
    );
    usd.unwrap();
    eur.unwrap();

    let requests = server.received_requests().await.unwrap();
    let mut queries: Vec<_> = requests
        .iter()
        .map(|request| request.url.query().unwrap().to_string())
        .collect();
    queries.sort();
    assert_eq!(queries, vec!["convert=EUR%2CGBP", "convert=USD"]);
}
