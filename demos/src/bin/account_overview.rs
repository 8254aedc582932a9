//! Demo 3: Account Overview
//!
//! Showcases: credentials, signed requests, balances and open orders
//!
//! Run: BITTREX_API_KEY=... BITTREX_API_SECRET=... cargo run --bin account_overview
//! Or:  cargo run --bin account_overview -- secrets.json

use bittrex_auth::Credentials;
use bittrex_rest::{BittrexRestClient, RestError};
use colored::*;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "  Bittrex v2.0 - Signed endpoints".cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let credentials = match std::env::args().nth(1) {
        Some(path) => Credentials::from_json_file(path)?,
        None => Credentials::from_env().unwrap_or_default(),
    };
    let client = BittrexRestClient::with_credentials(credentials)?;

    let balances = match client.get_balance(None).await {
        Ok(response) => response,
        Err(RestError::AuthRequired) => {
            println!(
                "{} Set BITTREX_API_KEY and BITTREX_API_SECRET or pass a secrets file",
                "✗".red()
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if !balances.is_success() {
        println!("{} {}", "✗ Exchange refused:".red(), balances.message);
        return Ok(());
    }

    println!(
        "  {:<8} {:>18} {:>18} {:>14}",
        "CURRENCY".white().bold(),
        "TOTAL".white().bold(),
        "AVAILABLE".white().bold(),
        "PENDING".white().bold()
    );
    println!("  {}", "─".repeat(61));

    if let Some(balances) = &balances.result {
        for balance in balances.iter() {
            let total = balance.total.unwrap_or(Decimal::ZERO);
            if total.is_zero() {
                continue;
            }
            println!(
                "  {:<8} {:>18} {:>18} {:>14}",
                balance.currency.yellow(),
                total,
                balance.available.unwrap_or(Decimal::ZERO),
                balance.pending.unwrap_or(Decimal::ZERO)
            );
        }
    }

    println!();

    let open_orders = client.get_open_orders(None).await?;
    let orders = open_orders.result.unwrap_or_default();
    println!("{} {} open orders", "✓".green(), orders.len());

    for order in &orders {
        println!(
            "  {} {:<10} {:<12} qty {} @ {}",
            "•".cyan(),
            order.exchange.as_deref().unwrap_or("?"),
            order.order_type.as_deref().unwrap_or("?"),
            order.quantity.unwrap_or(Decimal::ZERO),
            order.limit.unwrap_or(Decimal::ZERO)
        );
    }

    Ok(())
}
