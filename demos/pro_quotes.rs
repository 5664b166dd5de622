//! Example: Pro API market data.
//!
//! Run with: cargo run --example pro_quotes

use std::sync::Arc;

use coinmarketcap_api_client::auth::EnvCredentials;
use coinmarketcap_api_client::private::{
    IdMapRequest, MetadataRequest, PrivateApiClient, QuotesRequest, TickersRequest,
};
use coinmarketcap_api_client::types::{PriceConversionRequest, SortDir};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set COINMARKETCAP_API_KEY to run this example.");
            return Ok(());
        }
    };

    let client = PrivateApiClient::builder()
        .credentials(credentials)
        .user_agent("coinmarketcap-api-client-examples/pro_quotes")
        .build()?;

    println!("=== ID Map ===");
    let map = client
        .get_id_map(Some(&IdMapRequest::for_symbols(vec!["BTC", "ETH"])))
        .await?;
    for coin in map["data"].as_array().into_iter().flatten() {
        println!("{} -> {}", coin["symbol"], coin["id"]);
    }

    println!("\n=== Metadata ===");
    let info = client.get_metadata(&MetadataRequest::by_id(1)).await?;
    println!("Bitcoin website: {}", info["data"]["1"]["urls"]["website"][0]);

    println!("\n=== Top 5 Listings ===");
    let request = TickersRequest {
        limit: Some(5),
        sort_dir: Some(SortDir::Desc),
        ..Default::default()
    };
    let tickers = client.get_tickers(Some(&request)).await?;
    for ticker in tickers["data"].as_array().into_iter().flatten() {
        println!("#{} {}", ticker["cmc_rank"], ticker["symbol"]);
    }

    println!("\n=== Quotes ===");
    let quotes = client
        .get_quotes(&QuotesRequest::by_symbol(vec!["BTC", "ETH"]).convert("EUR"))
        .await?;
    println!("BTC/EUR: {}", quotes["data"]["BTC"]["quote"]["EUR"]["price"]);

    println!("\n=== Global Metrics ===");
    let global = client.get_global(Some("gbp".into())).await?;
    println!("Market cap (GBP): {}", global["data"]["quote"]["GBP"]["total_market_cap"]);

    println!("\n=== Conversion ===");
    let request = PriceConversionRequest::new(Decimal::TWO).symbol("ETH").convert("USD");
    let converted = client.convert_currency(&request).await?;
    println!("2 ETH = {} USD", converted["data"]["quote"]["USD"]["price"]);

    Ok(())
}
