//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::client::BittrexRestClient;
use crate::error::RestResult;
use crate::types::{ApiResponse, Balances, Order};
use serde::Serialize;
use tracing::{debug, instrument};

use super::NO_PARAMS;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a BittrexRestClient,
}

#[derive(Serialize)]
struct OrderIdParams<'a> {
    orderid: &'a str,
}

#[derive(Serialize)]
struct MarketParams<'a> {
    marketname: &'a str,
}

#[derive(Serialize)]
struct CurrencyParams<'a> {
    currencyname: &'a str,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a BittrexRestClient) -> Self {
        Self { client }
    }

    /// Get a single order by id
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> RestResult<ApiResponse<Order>> {
        debug!("Fetching order");
        self.client
            .request("orders", "getorder", &OrderIdParams { orderid: order_id })
            .await
    }

    /// Get open orders
    ///
    /// # Arguments
    /// * `market` - Limit to one market; `None` or `""` lists open orders of every market
    #[instrument(skip(self))]
    pub async fn get_open_orders(
        &self,
        market: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Order>>> {
        debug!("Fetching open orders");
        match market.filter(|market| !market.is_empty()) {
            Some(market) => {
                self.client
                    .request("market", "getopenorders", &MarketParams { marketname: market })
                    .await
            }
            None => self.client.request("orders", "getopenorders", NO_PARAMS).await,
        }
    }

    /// Get closed orders
    #[instrument(skip(self))]
    pub async fn get_order_history(&self) -> RestResult<ApiResponse<Vec<Order>>> {
        debug!("Fetching order history");
        self.client
            .request("orders", "getorderhistory", NO_PARAMS)
            .await
    }

    /// Get balances
    ///
    /// With a currency the result is [`Balances::One`], otherwise (`None` or
    /// `""`) [`Balances::All`].
    #[instrument(skip(self))]
    pub async fn get_balance(&self, currency: Option<&str>) -> RestResult<ApiResponse<Balances>> {
        debug!("Fetching balances");
        match currency.filter(|currency| !currency.is_empty()) {
            Some(currency) => {
                self.client
                    .request(
                        "balance",
                        "getbalance",
                        &CurrencyParams {
                            currencyname: currency,
                        },
                    )
                    .await
            }
            None => self.client.request("balance", "getbalances", NO_PARAMS).await,
        }
    }
}
