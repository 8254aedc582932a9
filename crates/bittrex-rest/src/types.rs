//! Types for Bittrex REST API requests and responses

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// API Response Wrapper
// ============================================================================

/// Standard Bittrex response envelope
///
/// The client hands this back as decoded; it never turns `success: false`
/// into an error because the exchange also uses the flag for states such as
/// "address still generating".
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the exchange considers the call successful
    pub success: bool,
    /// Message (empty on success)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// Command-specific payload
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Split into the payload or the exchange's message
    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.result)
        } else {
            Err(self.message)
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Market listed by `getmarkets`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    /// Traded currency (e.g. "LTC")
    pub market_currency: String,
    /// Quote currency (e.g. "BTC")
    pub base_currency: String,
    pub market_currency_long: Option<String>,
    pub base_currency_long: Option<String>,
    /// Minimum order quantity
    pub min_trade_size: Option<Decimal>,
    /// Market name (e.g. "BTC-LTC")
    pub market_name: String,
    pub is_active: bool,
    pub created: Option<String>,
    pub notice: Option<String>,
    pub is_sponsored: Option<bool>,
    pub logo_url: Option<String>,
}

/// 24h summary of one market
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    pub market_name: String,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub last: Option<Decimal>,
    pub base_volume: Option<Decimal>,
    pub time_stamp: Option<String>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub open_buy_orders: Option<u64>,
    pub open_sell_orders: Option<u64>,
    pub prev_day: Option<Decimal>,
    pub created: Option<String>,
}

impl MarketSummary {
    /// Mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.bid? + self.ask?) / Decimal::TWO)
    }

    /// Spread (ask minus bid)
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.ask? - self.bid?)
    }
}

/// Entry of `getmarketsummaries`
///
/// The v2 API nests market metadata and the summary; older payloads put
/// `MarketName` at the top level. Both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummaryEntry {
    pub market_name: Option<String>,
    pub market: Option<Market>,
    pub summary: Option<MarketSummary>,
    pub is_verified: Option<bool>,
}

impl MarketSummaryEntry {
    /// Market name, wherever the payload put it
    pub fn name(&self) -> Option<&str> {
        self.market_name
            .as_deref()
            .or_else(|| self.summary.as_ref().map(|s| s.market_name.as_str()))
            .or_else(|| self.market.as_ref().map(|m| m.market_name.as_str()))
    }
}

/// Currency listed by `getcurrencies`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    /// Symbol (e.g. "BTC")
    pub currency: String,
    pub currency_long: Option<String>,
    pub min_confirmation: Option<u32>,
    /// Withdrawal fee
    pub tx_fee: Option<Decimal>,
    pub is_active: Option<bool>,
    pub coin_type: Option<String>,
    pub base_address: Option<String>,
    pub notice: Option<String>,
}

/// Entry of `getwallethealth`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WalletHealthEntry {
    pub health: WalletHealth,
    pub currency: Option<Currency>,
}

/// Wallet status of one currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WalletHealth {
    pub currency: String,
    pub deposit_queue_depth: Option<u64>,
    pub withdraw_queue_depth: Option<u64>,
    pub block_height: Option<u64>,
    pub wallet_balance: Option<Decimal>,
    pub wallet_connections: Option<u64>,
    #[serde(rename = "MinutesSinceBHUpdated")]
    pub minutes_since_bh_updated: Option<u64>,
    pub last_checked: Option<String>,
    pub is_active: Option<bool>,
}

/// Order book snapshot from `getmarketorderbook`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderBook {
    /// Bids, best first
    #[serde(default, alias = "Buy")]
    pub buy: Vec<OrderBookEntry>,
    /// Asks, best first
    #[serde(default, alias = "Sell")]
    pub sell: Vec<OrderBookEntry>,
}

impl OrderBook {
    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.buy.first().map(|level| level.rate)
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.sell.first().map(|level| level.rate)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// One price level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderBookEntry {
    pub quantity: Decimal,
    pub rate: Decimal,
}

/// Candle from `GetTicks`
#[derive(Debug, Clone, Deserialize)]
pub struct Tick {
    #[serde(rename = "O")]
    pub open: Decimal,
    #[serde(rename = "H")]
    pub high: Decimal,
    #[serde(rename = "L")]
    pub low: Decimal,
    #[serde(rename = "C")]
    pub close: Decimal,
    /// Volume in the market currency
    #[serde(rename = "V")]
    pub volume: Decimal,
    /// Volume in the base currency
    #[serde(rename = "BV")]
    pub base_volume: Option<Decimal>,
    /// Candle open time
    #[serde(rename = "T")]
    pub time: String,
}

/// Candle width accepted by `GetTicks`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TickInterval {
    /// 1 minute
    OneMin,
    /// 5 minutes
    FiveMin,
    /// 30 minutes
    ThirtyMin,
    /// 1 hour
    Hour,
    /// 1 day
    Day,
}

impl TickInterval {
    /// Wire name of the interval
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMin => "oneMin",
            Self::FiveMin => "fiveMin",
            Self::ThirtyMin => "thirtyMin",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

impl std::fmt::Display for TickInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// Order as returned by `getorder`, `getopenorders` and `getorderhistory`
///
/// The three commands report overlapping but different field sets, so
/// everything except the order id is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub order_uuid: String,
    /// Market name (e.g. "BTC-LTC")
    pub exchange: Option<String>,
    /// LIMIT_BUY, LIMIT_SELL, ...
    #[serde(alias = "Type")]
    pub order_type: Option<String>,
    pub quantity: Option<Decimal>,
    pub quantity_remaining: Option<Decimal>,
    pub limit: Option<Decimal>,
    #[serde(alias = "Commission")]
    pub commission_paid: Option<Decimal>,
    pub price: Option<Decimal>,
    pub price_per_unit: Option<Decimal>,
    pub opened: Option<String>,
    pub closed: Option<String>,
    pub time_stamp: Option<String>,
    pub is_open: Option<bool>,
    pub cancel_initiated: Option<bool>,
    pub immediate_or_cancel: Option<bool>,
    pub is_conditional: Option<bool>,
    pub condition: Option<String>,
    pub condition_target: Option<Decimal>,
}

impl Order {
    /// Quantity already filled
    pub fn filled(&self) -> Option<Decimal> {
        Some(self.quantity? - self.quantity_remaining?)
    }
}

/// Balance of one currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    pub currency: String,
    #[serde(rename = "Balance")]
    pub total: Option<Decimal>,
    pub available: Option<Decimal>,
    pub pending: Option<Decimal>,
    pub crypto_address: Option<String>,
    pub requested: Option<bool>,
    pub uuid: Option<String>,
}

/// Entry of `getbalances`
///
/// The v2 API wraps each balance together with currency metadata and market
/// snapshots; a bare balance object is accepted as well.
#[derive(Debug, Clone)]
pub struct BalanceEntry {
    pub balance: Balance,
    pub currency: Option<Currency>,
    pub bitcoin_market: Option<Value>,
    pub ethereum_market: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WrappedBalance {
    balance: Balance,
    currency: Option<Currency>,
    bitcoin_market: Option<Value>,
    ethereum_market: Option<Value>,
}

impl<'de> Deserialize<'de> for BalanceEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.get("Balance").map_or(false, Value::is_object) {
            let wrapped: WrappedBalance = from_value(value)?;
            Ok(Self {
                balance: wrapped.balance,
                currency: wrapped.currency,
                bitcoin_market: wrapped.bitcoin_market,
                ethereum_market: wrapped.ethereum_market,
            })
        } else {
            Ok(Self {
                balance: from_value(value)?,
                currency: None,
                bitcoin_market: None,
                ethereum_market: None,
            })
        }
    }
}

/// Result of `get_balance`: one currency (`getbalance`) or all (`getbalances`)
#[derive(Debug, Clone)]
pub enum Balances {
    /// Balance of the requested currency
    One(Balance),
    /// Balances of every currency
    All(Vec<BalanceEntry>),
}

impl Balances {
    /// Iterate over the balances regardless of shape
    pub fn iter(&self) -> impl Iterator<Item = &Balance> {
        let (one, all) = match self {
            Self::One(balance) => (Some(balance), &[][..]),
            Self::All(entries) => (None, entries.as_slice()),
        };
        one.into_iter().chain(all.iter().map(|entry| &entry.balance))
    }

    /// Find the balance of a currency
    pub fn get(&self, currency: &str) -> Option<&Balance> {
        self.iter().find(|balance| balance.currency == currency)
    }
}

impl<'de> Deserialize<'de> for Balances {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_array() {
            from_value(value).map(Self::All)
        } else {
            from_value(value).map(Self::One)
        }
    }
}

fn from_value<T: DeserializeOwned, E: serde::de::Error>(value: Value) -> Result<T, E> {
    serde_json::from_value(value).map_err(E::custom)
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Command that places an order on this side
    pub fn command(&self) -> &'static str {
        match self {
            Self::Buy => "tradebuy",
            Self::Sell => "tradesell",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order
    Market,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limit => write!(f, "LIMIT"),
            Self::Market => write!(f, "MARKET"),
        }
    }
}

/// How long an order stays on the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInEffect {
    /// Rests until filled or cancelled
    GoodTilCancelled,
    /// Fills what it can, cancels the rest
    ImmediateOrCancel,
    /// Fills completely or not at all
    FillOrKill,
}

/// Trigger condition of a conditional order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConditionType {
    /// Unconditional
    #[default]
    #[serde(rename = "CONDITION_NONE")]
    None,
    #[serde(rename = "GREATER_THAN")]
    GreaterThan,
    #[serde(rename = "LESS_THAN")]
    LessThan,
    #[serde(rename = "STOP_LOSS_FIXED")]
    StopLossFixed,
    #[serde(rename = "STOP_LOSS_PERCENTAGE")]
    StopLossPercentage,
}

/// Request to place an order
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Order side
    pub side: OrderSide,
    /// Market name (e.g. "BTC-LTC")
    pub market: String,
    /// Quantity in the market currency
    pub quantity: Decimal,
    /// Limit rate in the base currency
    pub rate: Decimal,
    /// Order type
    pub order_type: OrderType,
    /// Time in effect
    pub time_in_effect: TimeInEffect,
    /// Trigger condition (unconditional when `None`)
    pub condition: Option<ConditionType>,
    /// Trigger target (`0` when `None`)
    pub target: Option<Decimal>,
}

impl OrderRequest {
    /// Create an order with every mandatory field
    pub fn new(
        side: OrderSide,
        market: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
        order_type: OrderType,
        time_in_effect: TimeInEffect,
    ) -> Self {
        Self {
            side,
            market: market.into(),
            quantity,
            rate,
            order_type,
            time_in_effect,
            condition: None,
            target: None,
        }
    }

    /// Create a good-til-cancelled limit order
    pub fn limit(
        market: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        rate: Decimal,
    ) -> Self {
        Self::new(
            side,
            market,
            quantity,
            rate,
            OrderType::Limit,
            TimeInEffect::GoodTilCancelled,
        )
    }

    /// Set time in effect
    pub fn with_time_in_effect(mut self, time_in_effect: TimeInEffect) -> Self {
        self.time_in_effect = time_in_effect;
        self
    }

    /// Make the order conditional
    pub fn with_condition(mut self, condition: ConditionType, target: Decimal) -> Self {
        self.condition = Some(condition);
        self.target = Some(target);
        self
    }

    /// Command used to place this order
    pub fn command(&self) -> &'static str {
        self.side.command()
    }
}

/// Result of `tradebuy` / `tradesell`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlacedOrder {
    #[serde(alias = "OrderUuid", alias = "uuid")]
    pub order_id: Option<String>,
    pub market_name: Option<String>,
    pub quantity: Option<Decimal>,
    pub rate: Option<Decimal>,
    pub order_type: Option<String>,
}

// ============================================================================
// Funding Types
// ============================================================================

/// Withdrawal record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Withdrawal {
    pub payment_uuid: String,
    pub currency: String,
    pub amount: Decimal,
    pub address: Option<String>,
    pub opened: Option<String>,
    pub authorized: Option<bool>,
    pub pending_payment: Option<bool>,
    pub tx_cost: Option<Decimal>,
    pub tx_id: Option<String>,
    pub canceled: Option<bool>,
    pub invalid_address: Option<bool>,
}

/// Deposit record (history or pending)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deposit {
    pub id: Option<u64>,
    pub currency: String,
    pub amount: Decimal,
    pub confirmations: Option<u64>,
    pub last_updated: Option<String>,
    pub tx_id: Option<String>,
    pub crypto_address: Option<String>,
}

/// Deposit address of one currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositAddress {
    pub currency: String,
    pub address: Option<String>,
}

/// Receipt of a withdrawal request
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalReceipt {
    #[serde(alias = "Uuid", alias = "PaymentUuid")]
    pub uuid: Option<String>,
}
