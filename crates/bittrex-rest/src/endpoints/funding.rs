//! Private funding endpoints (deposits and withdrawals)
//!
//! These endpoints require authentication.

use crate::client::BittrexRestClient;
use crate::error::RestResult;
use crate::types::{ApiResponse, Deposit, DepositAddress, Withdrawal, WithdrawalReceipt};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

/// Private funding endpoints
pub struct FundingEndpoints<'a> {
    client: &'a BittrexRestClient,
}

#[derive(Serialize)]
struct CurrencyParams<'a> {
    currencyname: &'a str,
}

impl<'a> CurrencyParams<'a> {
    // History commands expect the parameter even when it is empty
    fn optional(currency: Option<&'a str>) -> Self {
        Self {
            currencyname: currency.unwrap_or(""),
        }
    }
}

#[derive(Serialize)]
struct WithdrawParams<'a> {
    currencyname: &'a str,
    #[serde(with = "rust_decimal::serde::str")]
    quantity: Decimal,
    address: &'a str,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(client: &'a BittrexRestClient) -> Self {
        Self { client }
    }

    /// Withdraw funds
    ///
    /// # Arguments
    /// * `currency` - Currency to withdraw (e.g., "BTC")
    /// * `amount` - Amount to withdraw
    /// * `address` - Destination address
    #[instrument(skip(self))]
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> RestResult<ApiResponse<WithdrawalReceipt>> {
        debug!("Requesting withdrawal");
        let params = WithdrawParams {
            currencyname: currency,
            quantity: amount,
            address,
        };
        self.client
            .request("balance", "withdrawcurrency", &params)
            .await
    }

    /// Get withdrawal history
    #[instrument(skip(self))]
    pub async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Withdrawal>>> {
        debug!("Fetching withdrawal history");
        self.client
            .request(
                "balance",
                "getwithdrawalhistory",
                &CurrencyParams::optional(currency),
            )
            .await
    }

    /// Get deposit history
    #[instrument(skip(self))]
    pub async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Deposit>>> {
        debug!("Fetching deposit history");
        self.client
            .request(
                "balance",
                "getdeposithistory",
                &CurrencyParams::optional(currency),
            )
            .await
    }

    /// Get deposits still waiting for confirmations
    #[instrument(skip(self))]
    pub async fn get_pending_deposits(
        &self,
        currency: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Deposit>>> {
        debug!("Fetching pending deposits");
        self.client
            .request(
                "balance",
                "getpendingdeposits",
                &CurrencyParams::optional(currency),
            )
            .await
    }

    /// Get the deposit address of a currency
    #[instrument(skip(self))]
    pub async fn get_deposit_address(
        &self,
        currency: &str,
    ) -> RestResult<ApiResponse<DepositAddress>> {
        debug!("Fetching deposit address");
        self.client
            .request(
                "balance",
                "getdepositaddress",
                &CurrencyParams {
                    currencyname: currency,
                },
            )
            .await
    }

    /// Generate a new deposit address for a currency
    #[instrument(skip(self))]
    pub async fn generate_deposit_address(
        &self,
        currency: &str,
    ) -> RestResult<ApiResponse<DepositAddress>> {
        debug!("Generating deposit address");
        self.client
            .request(
                "balance",
                "generatedepositaddress",
                &CurrencyParams {
                    currencyname: currency,
                },
            )
            .await
    }
}
