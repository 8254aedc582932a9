//! Demo 2: ASCII Depth Chart
//!
//! Showcases: order book snapshot, spread and mid price
//!
//! Run: cargo run --bin depth_chart -- BTC-LTC

use bittrex_rest::{BittrexRestClient, OrderBookEntry};
use colored::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Duration;

const LEVELS_TO_SHOW: usize = 10;
const HALF_WIDTH: usize = 25;
const REFRESHES: usize = 10;

fn bar_len(quantity: Decimal, max_quantity: Decimal) -> usize {
    if max_quantity.is_zero() {
        return 0;
    }
    ((quantity / max_quantity) * Decimal::from(HALF_WIDTH))
        .to_usize()
        .unwrap_or(0)
        .min(HALF_WIDTH)
}

fn draw_depth_chart(market: &str, bids: &[OrderBookEntry], asks: &[OrderBookEntry]) {
    let currency = market.split('-').nth(1).unwrap_or(market);

    let max_quantity = bids
        .iter()
        .chain(asks.iter())
        .take(LEVELS_TO_SHOW * 2)
        .map(|level| level.quantity)
        .max()
        .unwrap_or(dec!(1));

    // Asks, highest first
    let asks_to_show: Vec<_> = asks.iter().take(LEVELS_TO_SHOW).collect();
    for level in asks_to_show.iter().rev() {
        let len = bar_len(level.quantity, max_quantity);
        println!(
            "  {:>14.4} │{}{}│ {:<12}",
            level.quantity,
            " ".repeat(HALF_WIDTH - len),
            "█".repeat(len).red(),
            level.rate
        );
    }

    let (spread, mid) = match (bids.first(), asks.first()) {
        (Some(bid), Some(ask)) => (ask.rate - bid.rate, (ask.rate + bid.rate) / dec!(2)),
        _ => (Decimal::ZERO, Decimal::ZERO),
    };

    println!(
        "  {:>14} ├{}┤ {}",
        "",
        "─".repeat(HALF_WIDTH * 2),
        format!("SPREAD: {}", spread).yellow()
    );

    for level in bids.iter().take(LEVELS_TO_SHOW) {
        let len = bar_len(level.quantity, max_quantity);
        println!(
            "  {:>14.4} │{}{}│ {:<12}",
            level.quantity,
            "█".repeat(len).green(),
            " ".repeat(HALF_WIDTH - len),
            level.rate
        );
    }

    println!();
    println!(
        "  {} {}  {} {:.4} {}  {} {:.4} {}",
        "Mid:".white(),
        mid,
        "Bid Vol:".green(),
        bids.iter().take(LEVELS_TO_SHOW).map(|l| l.quantity).sum::<Decimal>(),
        currency,
        "Ask Vol:".red(),
        asks.iter().take(LEVELS_TO_SHOW).map(|l| l.quantity).sum::<Decimal>(),
        currency
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let market = std::env::args().nth(1).unwrap_or_else(|| "BTC-LTC".to_string());
    let client = BittrexRestClient::new()?;

    for _ in 0..REFRESHES {
        let response = client.get_market_orderbook(&market).await?;
        if !response.is_success() {
            println!("{} {}", "✗ Exchange refused:".red(), response.message);
            return Ok(());
        }
        let book = response.result.unwrap_or_default();

        // Clear screen
        print!("\x1B[2J\x1B[H");

        println!("{}", "═".repeat(70).cyan());
        println!("{}{}", format!("  {} DEPTH CHART", market).cyan().bold(), "  (polling)".dimmed());
        println!("{}", "═".repeat(70).cyan());
        println!();
        println!(
            "  {} = Asks (Sell)    {} = Bids (Buy)",
            "███".red(),
            "███".green()
        );
        println!();

        draw_depth_chart(&market, &book.buy, &book.sell);

        println!();
        println!(
            "  {} {}",
            "Updated:".dimmed(),
            chrono::Local::now().format("%H:%M:%S%.3f")
        );

        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    Ok(())
}
