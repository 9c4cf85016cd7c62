//! Demo 3: Account Balances
//!
//! Showcases: signed private calls, credentials from secrets.json or env
//!
//! Run: cargo run --bin balances
//!
//! Reads `secrets.json` (`{"key": "...", "secret": "..."}`) from the current
//! directory, falling back to BITTREX_API_KEY and BITTREX_API_SECRET.

use bittrex_auth::{Credentials, SecretsFile};
use bittrex_rest::{BittrexClient, ClientConfig};
use colored::*;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  BITTREX ACCOUNT BALANCES".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let credentials = if Path::new(SecretsFile::DEFAULT_PATH).exists() {
        println!("{} Loaded {}", "✓".green(), SecretsFile::DEFAULT_PATH);
        SecretsFile::load(SecretsFile::DEFAULT_PATH)?.into_credentials()
    } else {
        Credentials::from_env()
    };

    if !credentials.is_complete() {
        println!("{} No API credentials found", "✗".red());
        return Ok(());
    }

    let client = BittrexClient::with_config(ClientConfig::new().with_credentials(credentials))?;

    let response = client.get_balances().await?;
    if !response.success {
        println!("{} {}", "✗".red(), response.message);
        return Ok(());
    }

    let balances = response.result.as_array().cloned().unwrap_or_default();
    for balance in balances
        .iter()
        .filter(|b| b["Balance"].as_f64().unwrap_or(0.0) > 0.0)
    {
        println!(
            "  {:<8} {} {:<18} {} {}",
            balance["Currency"].as_str().unwrap_or("?").yellow(),
            "BALANCE:".dimmed(),
            balance["Balance"],
            "AVAILABLE:".dimmed(),
            balance["Available"]
        );
    }

    Ok(())
}
