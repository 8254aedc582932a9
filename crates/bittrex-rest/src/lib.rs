//! REST API client for the Bittrex cryptocurrency exchange (API v2.0)
//!
//! Every call is a `GET` against `{base}/{pub|key}/{group}/{command}?{query}`.
//! Public commands are unsigned. Private commands carry a nonce and the API
//! key in the query and an `apisign` header with the HMAC-SHA512 of the full
//! URL.
//!
//! # Features
//!
//! - **Market Data**: Markets, summaries, currencies, wallet health, order book, candles
//! - **Account**: Orders, open orders, order history, balances
//! - **Trading**: Place and cancel orders
//! - **Funding**: Withdrawals, deposit history, deposit addresses
//!
//! # Numbers
//!
//! Response bodies go through a [`NumberPolicy`] before they are decoded.
//! The default keeps every fractional number as an exact decimal, so prices
//! land in [`rust_decimal::Decimal`] fields without binary rounding.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_rest::{BittrexRestClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BittrexRestClient::new()?;
//!     let summaries = client.get_market_summaries().await?;
//!     println!("{} markets", summaries.result.map(|r| r.len()).unwrap_or(0));
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BittrexRestClient::with_credentials(creds)?;
//!     let balances = auth_client.get_balance(None).await?;
//!     println!("Balances: {:?}", balances.result);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failures
//!
//! An envelope with `success: false` is returned as-is. Only unknown
//! commands, missing credentials, non-200 statuses, transport failures and
//! undecodable bodies become a [`RestError`].

pub mod client;
pub mod command;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types
pub use bittrex_auth::{Credentials, NonceGenerator};
pub use client::{encode_query, BittrexRestClient, ClientConfig, PreparedRequest, DEFAULT_BASE_URL};
pub use command::{classify, Access};
pub use decode::{NumberDecoder, NumberPolicy};
pub use error::{RestError, RestResult};

// Re-export endpoint-specific types
pub use types::{
    // Envelope
    ApiResponse,
    // Market data
    Market, MarketSummary, MarketSummaryEntry, Currency, WalletHealth, WalletHealthEntry,
    OrderBook, OrderBookEntry, Tick, TickInterval,
    // Account
    Order, Balance, BalanceEntry, Balances,
    // Trading
    OrderRequest, OrderSide, OrderType, TimeInEffect, ConditionType, PlacedOrder,
    // Funding
    Withdrawal, Deposit, DepositAddress, WithdrawalReceipt,
};
