//! API endpoint implementations

pub mod account;
pub mod funding;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use funding::FundingEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

/// Parameters of commands that take none
pub(crate) const NO_PARAMS: &[(&str, &str)] = &[];
