//! Demo 1: Market Summaries
//!
//! Showcases: public endpoints, per-version paths, failure envelopes
//!
//! Run: cargo run --bin market_summaries -- [v1.1|v2.0]

use bittrex_rest::{ApiVersion, BittrexClient, ClientConfig};
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let version: ApiVersion = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => ApiVersion::default(),
    };

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  BITTREX MARKET SUMMARIES ({})", version).cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = BittrexClient::with_config(ClientConfig::new().with_api_version(version))?;

    let response = client.market().get_market_summaries().await?;
    if !response.success {
        println!("{} {}", "✗".red(), response.message);
        return Ok(());
    }

    let summaries = response.result.as_array().cloned().unwrap_or_default();
    println!("{} {} markets\n", "✓".green(), summaries.len());

    for summary in summaries.iter().take(20) {
        // v2.0 nests the v1.1 shape under "Summary"
        let summary = summary.get("Summary").unwrap_or(summary);
        let name = summary["MarketName"].as_str().unwrap_or("?");
        let last = &summary["Last"];
        let volume = &summary["BaseVolume"];

        println!(
            "  {:<12} {} {:<16} {} {}",
            name.yellow(),
            "LAST:".dimmed(),
            last,
            "VOL:".dimmed(),
            volume
        );
    }

    Ok(())
}
