//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::client::BittrexRestClient;
use crate::error::RestResult;
use crate::types::{
    ApiResponse, Currency, Market, MarketSummary, MarketSummaryEntry, OrderBook, Tick, TickInterval,
    WalletHealthEntry,
};
use serde::Serialize;
use tracing::{debug, instrument};

use super::NO_PARAMS;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a BittrexRestClient,
}

#[derive(Serialize)]
struct MarketParams<'a> {
    marketname: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TickParams<'a> {
    market_name: &'a str,
    tick_interval: &'static str,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a BittrexRestClient) -> Self {
        Self { client }
    }

    /// List all markets
    #[instrument(skip(self))]
    pub async fn get_markets(&self) -> RestResult<ApiResponse<Vec<Market>>> {
        debug!("Fetching markets");
        self.client.request("markets", "getmarkets", NO_PARAMS).await
    }

    /// Get the 24h summary of one market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    #[instrument(skip(self))]
    pub async fn get_market_summary(&self, market: &str) -> RestResult<ApiResponse<MarketSummary>> {
        debug!("Fetching market summary");
        self.client
            .request("market", "getmarketsummary", &MarketParams { marketname: market })
            .await
    }

    /// Get summaries of all markets
    #[instrument(skip(self))]
    pub async fn get_market_summaries(&self) -> RestResult<ApiResponse<Vec<MarketSummaryEntry>>> {
        debug!("Fetching market summaries");
        self.client
            .request("markets", "getmarketsummaries", NO_PARAMS)
            .await
    }

    /// List all currencies
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<ApiResponse<Vec<Currency>>> {
        debug!("Fetching currencies");
        self.client
            .request("currencies", "getcurrencies", NO_PARAMS)
            .await
    }

    /// Get wallet status of all currencies
    #[instrument(skip(self))]
    pub async fn get_wallet_health(&self) -> RestResult<ApiResponse<Vec<WalletHealthEntry>>> {
        debug!("Fetching wallet health");
        self.client
            .request("currencies", "getwallethealth", NO_PARAMS)
            .await
    }

    /// Get both sides of a market's order book
    #[instrument(skip(self))]
    pub async fn get_market_orderbook(&self, market: &str) -> RestResult<ApiResponse<OrderBook>> {
        debug!("Fetching order book");
        self.client
            .request("market", "getmarketorderbook", &MarketParams { marketname: market })
            .await
    }

    /// Get candles of a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `interval` - Candle width
    #[instrument(skip(self))]
    pub async fn get_ticks(
        &self,
        market: &str,
        interval: TickInterval,
    ) -> RestResult<ApiResponse<Vec<Tick>>> {
        debug!("Fetching ticks");
        let params = TickParams {
            market_name: market,
            tick_interval: interval.as_str(),
        };
        self.client.request("market", "GetTicks", &params).await
    }
}
