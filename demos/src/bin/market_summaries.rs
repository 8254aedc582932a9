//! Demo 1: Market Summaries
//!
//! Showcases: public market data, exact decimal prices
//!
//! Run: cargo run --bin market_summaries
//! Log every request URL: RUST_LOG=bittrex_rest::endpoint=info cargo run --bin market_summaries

use bittrex_rest::{BittrexRestClient, ClientConfig, MarketSummary};
use colored::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const TOP_MARKETS: usize = 15;

fn change_percent(summary: &MarketSummary) -> Option<Decimal> {
    let last = summary.last?;
    let prev = summary.prev_day?;
    if prev.is_zero() {
        return None;
    }
    Some(((last - prev) / prev * Decimal::ONE_HUNDRED).round_dp(2))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  MARKET SUMMARIES".cyan().bold());
    println!("{}", "  Bittrex v2.0 - Top BTC markets by base volume".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = BittrexRestClient::with_config(ClientConfig::new().with_debug_endpoint(true))?;
    let response = client.get_market_summaries().await?;

    if !response.is_success() {
        println!("{} {}", "✗ Exchange refused:".red(), response.message);
        return Ok(());
    }

    let mut summaries: Vec<MarketSummary> = response
        .result
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| entry.summary)
        .filter(|summary| summary.market_name.starts_with("BTC-"))
        .collect();

    summaries.sort_by(|a, b| b.base_volume.cmp(&a.base_volume));

    println!(
        "  {:<12} {:>16} {:>16} {:>14} {:>9}",
        "MARKET".white().bold(),
        "LAST".white().bold(),
        "SPREAD".white().bold(),
        "BTC VOLUME".white().bold(),
        "24H %".white().bold()
    );
    println!("  {}", "─".repeat(71));

    for summary in summaries.iter().take(TOP_MARKETS) {
        let change = match change_percent(summary) {
            Some(change) if change.is_sign_negative() => format!("{}", change).red(),
            Some(change) => format!("+{}", change).green(),
            None => "-".dimmed(),
        };

        println!(
            "  {:<12} {:>16} {:>16} {:>14} {:>9}",
            summary.market_name,
            summary.last.map(|d| d.to_string()).unwrap_or_default(),
            summary.spread().map(|d| d.to_string()).unwrap_or_default(),
            summary.base_volume.map(|d| d.round_dp(3).to_string()).unwrap_or_default(),
            change
        );
    }

    println!();
    println!(
        "  {} {} markets listed",
        "✓".green(),
        summaries.len()
    );

    Ok(())
}
