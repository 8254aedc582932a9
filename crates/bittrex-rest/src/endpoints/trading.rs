//! Private trading endpoints
//!
//! These endpoints require authentication with trading permissions.

use crate::client::BittrexRestClient;
use crate::error::RestResult;
use crate::types::{ApiResponse, ConditionType, OrderRequest, OrderType, PlacedOrder, TimeInEffect};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// Private trading endpoints
pub struct TradingEndpoints<'a> {
    client: &'a BittrexRestClient,
}

/// Query of `tradebuy` / `tradesell`, in wire order
#[derive(Serialize)]
struct PlaceOrderParams<'a> {
    marketname: &'a str,
    ordertype: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    rate: Decimal,
    timeineffect: TimeInEffect,
    conditiontype: ConditionType,
    #[serde(with = "rust_decimal::serde::str")]
    target: Decimal,
}

impl<'a> From<&'a OrderRequest> for PlaceOrderParams<'a> {
    fn from(order: &'a OrderRequest) -> Self {
        Self {
            marketname: &order.market,
            ordertype: order.order_type,
            quantity: order.quantity,
            rate: order.rate,
            timeineffect: order.time_in_effect,
            conditiontype: order.condition.unwrap_or_default(),
            target: order.target.unwrap_or(Decimal::ZERO),
        }
    }
}

#[derive(Serialize)]
struct CancelParams<'a> {
    #[serde(rename = "orderId")]
    order_id: &'a str,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a BittrexRestClient) -> Self {
        Self { client }
    }

    /// Place a new order
    ///
    /// Buys go to `tradebuy`, sells to `tradesell`. Unconditional orders are
    /// sent with `CONDITION_NONE` and a target of `0`.
    ///
    /// # Example
    /// ```no_run
    /// # use bittrex_rest::{BittrexRestClient, Credentials, OrderRequest, OrderSide};
    /// # use rust_decimal_macros::dec;
    /// # async fn example(client: &BittrexRestClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let order = OrderRequest::limit("BTC-LTC", OrderSide::Buy, dec!(1.5), dec!(0.0123));
    /// let placed = client.trading()?.place_order(&order).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, order), fields(market = %order.market, side = %order.side))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<ApiResponse<PlacedOrder>> {
        debug!(
            quantity = %order.quantity,
            rate = %order.rate,
            order_type = %order.order_type,
            "Placing order"
        );
        self.client
            .request("market", order.command(), &PlaceOrderParams::from(order))
            .await
    }

    /// Cancel an order by id
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<ApiResponse<Value>> {
        debug!("Cancelling order");
        self.client
            .request("market", "tradecancel", &CancelParams { order_id })
            .await
    }
}
