//! Demo 2: Markets for a Currency
//!
//! Showcases: list_markets_by_currency, ticker lookups under the rate limit
//!
//! Run: cargo run --bin currency_markets -- LTC

use bittrex_rest::{BittrexClient, ClientConfig};
use colored::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let currency = std::env::args().nth(1).unwrap_or_else(|| "LTC".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  MARKETS TRADING {}", currency).cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = BittrexClient::with_config(ClientConfig::new().with_calls_per_second(2.0))?;

    let markets = client.market().list_markets_by_currency(&currency).await?;
    println!("{} Found {} markets\n", "✓".green(), markets.len());

    let start = Instant::now();
    for market in &markets {
        let response = client.get_ticker(market).await?;
        if response.success {
            println!(
                "  {:<12} {} {:<16} {} {}",
                market.yellow(),
                "BID:".dimmed(),
                response.result["Bid"],
                "ASK:".dimmed(),
                response.result["Ask"]
            );
        } else {
            println!("  {:<12} {} {}", market.yellow(), "✗".red(), response.message);
        }
    }

    println!(
        "\n{} {} tickers in {:.1}s",
        "✓".green(),
        markets.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
