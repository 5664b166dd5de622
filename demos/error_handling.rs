//! Example: Working with CoinMarketCapError and response status codes.
//!
//! Run with: cargo run --example error_handling

use coinmarketcap_api_client::CoinMarketCapError;
use coinmarketcap_api_client::private::{MetadataRequest, PrivateApiClient};
use coinmarketcap_api_client::types::ApiResponse;
use coinmarketcap_api_client::types::envelope::error_codes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match PrivateApiClient::builder().build() {
        Err(err) if err.is_configuration() => println!("Configuration error: {}", err),
        Err(err) => println!("Unexpected error: {}", err),
        Ok(_) => println!("Unexpectedly built a client without a key"),
    }

    let client = PrivateApiClient::new("not-a-real-key")?;

    let request = MetadataRequest {
        id: Some(1.into()),
        symbol: Some("BTC".into()),
    };
    match client.get_metadata(&request).await {
        Err(CoinMarketCapError::InvalidArgument(message)) => {
            println!("Rejected before sending: {}", message)
        }
        other => println!("Unexpected result: {:?}", other.map(|_| ())),
    }

    // The server answers 401 here; the body still comes back as a value.
    match client.get_global(None).await {
        Ok(value) => {
            let envelope: ApiResponse = ApiResponse::from_value(value)?;
            if envelope.status.error_code == Some(error_codes::API_KEY_INVALID) {
                println!(
                    "Server rejected the key: {}",
                    envelope.status.error_message.unwrap_or_default()
                );
            }
        }
        Err(err) if err.is_transport() => println!("Network failure: {}", err),
        Err(err) => println!("Unexpected error: {}", err),
    }

    Ok(())
}
