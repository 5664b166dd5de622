//! Example: Portfolio web API.
//!
//! Run with: cargo run --example portfolio
//!
//! The portfolio API authenticates with the session token of a logged-in
//! CoinMarketCap account, read here from `COINMARKETCAP_SESSION_TOKEN`.

use std::sync::Arc;

use coinmarketcap_api_client::auth::EnvCredentials;
use coinmarketcap_api_client::public::{
    PublicApiClient, QueryAssetsRequest, SpotlightRequest, TransactionsByCryptoRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env_var("COINMARKETCAP_SESSION_TOKEN") {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set COINMARKETCAP_SESSION_TOKEN to run this example.");
            return Ok(());
        }
    };

    let client = PublicApiClient::builder().credentials(credentials).build()?;

    println!("=== Statistics ===");
    let stats = client.query_statistics(None).await?;
    println!("{}", stats["data"]);

    println!("\n=== Holdings ===");
    let request = QueryAssetsRequest {
        page_size: 50,
        ..Default::default()
    };
    let assets = client.query_assets(Some(&request)).await?;
    for portfolio in assets["data"].as_array().into_iter().flatten() {
        for holding in portfolio["list"].as_array().into_iter().flatten() {
            println!("{} {}", holding["symbol"], holding["amount"]);
        }
    }

    println!("\n=== Bitcoin Transactions ===");
    let request = TransactionsByCryptoRequest {
        cryptocurrency_id: Some(1),
        ..Default::default()
    };
    let transactions = client.query_transactions_by_crypto(Some(&request)).await?;
    println!("{}", transactions["data"]);

    println!("\n=== Watchlist ===");
    let watchlist = client.query_watchlist(None).await?;
    println!("{}", watchlist["data"]);

    println!("\n=== Spotlight (7d) ===");
    let request = SpotlightRequest {
        time_frame: "7d".to_string(),
        ..Default::default()
    };
    let spotlight = client.query_spotlight(Some(&request)).await?;
    for gainer in spotlight["data"]["gainerList"].as_array().into_iter().flatten().take(5) {
        println!("{} {}", gainer["symbol"], gainer["priceChange"]);
    }

    println!("\n=== Bitcoin Votes ===");
    let votes = client.get_votes(1).await?;
    println!("{}", votes["data"]);

    Ok(())
}
