/*
[INPUT]:  OANDA_ACCESS_TOKEN and OANDA_ACCOUNT_ID environment variables
[OUTPUT]: Account details and current prices printed to stdout
[POS]:    Demos - REST client usage
[UPDATE]: When the REST client surface changes
*/

use oanda_adapter::{ClientConfig, Environment, OandaClient};

/// Demo: query account details and current prices over REST
///
/// Uses the practice environment; set OANDA_ACCESS_TOKEN and
/// OANDA_ACCOUNT_ID before running.
#[tokio::main]
async fn main() {
    println!("=== OANDA Account & Rates Demo ===\n");

    let token = match std::env::var("OANDA_ACCESS_TOKEN") {
        Ok(token) => token,
        Err(_) => {
            eprintln!("Set OANDA_ACCESS_TOKEN to run this demo");
            return;
        }
    };
    let account_id = std::env::var("OANDA_ACCOUNT_ID").unwrap_or_default();

    let client = match OandaClient::with_config(
        Environment::Practice,
        ClientConfig::with_access_token(token),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ REST client created (practice environment)\n");

    println!("Listing accounts...");
    match client.get_accounts(&[]).await {
        Ok(accounts) => println!("✓ Accounts: {}", accounts),
        Err(e) => println!("✗ Error: {}", e),
    }

    if !account_id.is_empty() {
        println!("\nQuerying account {}...", account_id);
        match client.get_account(&account_id, &[]).await {
            Ok(account) => println!("✓ Account: {}", account),
            Err(e) => println!("✗ Error: {}", e),
        }

        println!("\nListing instruments...");
        match client.get_instruments(&account_id, &[]).await {
            Ok(instruments) => println!("✓ Instruments: {}", instruments),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\nQuerying EUR_USD price...");
    match client.get_prices(&[("instruments", "EUR_USD")]).await {
        Ok(prices) => println!("✓ Prices: {}", prices),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Account & rates demo complete");
}
