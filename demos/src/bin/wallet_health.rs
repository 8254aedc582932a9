//! Demo 4: Wallet Health
//!
//! Showcases: currencies and wallet status, custom number policy
//!
//! Run: cargo run --bin wallet_health

use bittrex_rest::decode::decimal_string;
use bittrex_rest::{BittrexRestClient, ClientConfig, NumberPolicy};
use colored::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  WALLET HEALTH".cyan().bold());
    println!("{}", "  Bittrex v2.0 - Wallets lagging behind the chain".cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let client = BittrexRestClient::new()?;
    let response = client.get_wallet_health().await?;

    let mut lagging: Vec<_> = response
        .result
        .unwrap_or_default()
        .into_iter()
        .filter(|entry| entry.health.minutes_since_bh_updated.unwrap_or(0) > 30)
        .collect();
    lagging.sort_by_key(|entry| std::cmp::Reverse(entry.health.minutes_since_bh_updated));

    for entry in &lagging {
        let health = &entry.health;
        let active = if health.is_active.unwrap_or(false) {
            "ACTIVE".green()
        } else {
            "DISABLED".red()
        };
        println!(
            "  {:<8} {:>8} min behind  block {:>10}  {}",
            health.currency.yellow(),
            health.minutes_since_bh_updated.unwrap_or(0),
            health.block_height.unwrap_or(0),
            active
        );
    }
    println!();
    println!("{} {} wallets lagging", "✓".green(), lagging.len());

    // Raw access: fees stay as exact strings under this policy
    let raw = BittrexRestClient::with_config(
        ClientConfig::new().with_number_policy(NumberPolicy::default().with_float(decimal_string)),
    )?;
    let currencies = raw
        .dispatch("currencies", "getcurrencies", &[] as &[(&str, &str)])
        .await?;

    if let Some(list) = currencies.result.as_ref().and_then(|r| r.as_array()) {
        println!();
        println!("{}", "  Withdrawal fees (first 10)".white().bold());
        for currency in list.iter().take(10) {
            println!(
                "  {:<8} {}",
                currency["Currency"].as_str().unwrap_or("?"),
                currency["TxFee"].as_str().unwrap_or("-")
            );
        }
    }

    Ok(())
}
