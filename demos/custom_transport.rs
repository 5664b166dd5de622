//! Example: Supplying your own transport.
//!
//! Run with: cargo run --example custom_transport
//!
//! The transport here never touches the network; it prints each request and
//! answers with a canned envelope.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use reqwest::StatusCode;

use coinmarketcap_api_client::private::PrivateApiClient;
use coinmarketcap_api_client::{CoinMarketCapError, HttpRequest, HttpResponse, Transport};

struct OfflineTransport;

impl Transport for OfflineTransport {
    fn fetch(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, CoinMarketCapError>> {
        Box::pin(async move {
            println!("{} {}", request.method, request.url);
            Ok(HttpResponse::new(
                StatusCode::OK,
                r#"{"data":{"quote":{"USD":{"total_market_cap":2.4e12}}},"status":{"error_code":0}}"#,
            ))
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = PrivateApiClient::builder()
        .api_key("offline")
        .transport(Arc::new(OfflineTransport))
        .build()?;

    let global = client.get_global(Some("usd".into())).await?;
    println!("Market cap: {}", global["data"]["quote"]["USD"]["total_market_cap"]);
    Ok(())
}
