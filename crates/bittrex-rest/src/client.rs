//! Main REST client implementation

use crate::command::{classify, Access};
use crate::decode::NumberPolicy;
use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::types::{
    ApiResponse, Balances, Currency, Deposit, DepositAddress, Market, MarketSummary,
    MarketSummaryEntry, Order, OrderBook, OrderRequest, PlacedOrder, Tick, TickInterval,
    WalletHealthEntry, Withdrawal, WithdrawalReceipt,
};
use bittrex_auth::{Credentials, NonceGenerator};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default API root (no trailing slash)
pub const DEFAULT_BASE_URL: &str = "https://bittrex.com/Api/v2.0";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Header carrying the request signature
pub const SIGNATURE_HEADER: &str = "apisign";

/// Bittrex REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use bittrex_rest::{BittrexRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BittrexRestClient::new()?;
///     let summary = client.get_market_summary("BTC-LTC").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BittrexRestClient::with_credentials(creds)?;
///     let balances = auth_client.get_balance(None).await?;
///
///     Ok(())
/// }
/// ```
pub struct BittrexRestClient {
    http_client: Client,
    credentials: Credentials,
    nonces: NonceGenerator,
    number_policy: NumberPolicy,
    base_url: String,
    debug_endpoint: bool,
}

/// A fully assembled request, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// Access class of the command
    pub access: Access,
    /// Complete URL, query string included
    pub url: String,
    /// Nonce placed in the query (private commands only)
    pub nonce: Option<u64>,
    /// Value of the `apisign` header (private commands only)
    pub signature: Option<String>,
}

#[derive(Serialize)]
struct AuthParams<'a> {
    nonce: u64,
    apikey: &'a str,
}

impl BittrexRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_deref().unwrap_or("bittrex-rest/0.1.0"))
            .build()?;

        info!(
            private = config.credentials.is_complete(),
            timeout_ms = config.timeout.as_millis() as u64,
            "Created Bittrex REST client"
        );

        Ok(Self {
            http_client,
            credentials: config.credentials,
            nonces: NonceGenerator::new(),
            number_policy: config.number_policy,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            debug_endpoint: config.debug_endpoint,
        })
    }

    /// Check if the client has both key and secret for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_complete()
    }

    /// Credentials this client signs with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Numeric decoding policy applied to response bodies
    pub fn number_policy(&self) -> NumberPolicy {
        self.number_policy
    }

    /// API root every request URL starts with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Assemble the URL (and signature) for a command without sending it
    ///
    /// Fails with [`RestError::InvalidCommand`] for unknown commands and with
    /// [`RestError::AuthRequired`] for private commands when key or secret is
    /// missing. Private requests consume a nonce.
    pub fn prepare<P>(&self, group: &str, command: &str, params: &P) -> RestResult<PreparedRequest>
    where
        P: Serialize + ?Sized,
    {
        let access = classify(command).ok_or_else(|| RestError::InvalidCommand {
            command: command.to_string(),
        })?;

        match access {
            Access::Public => {
                let query = encode_query(params)?;
                Ok(PreparedRequest {
                    access,
                    url: self.endpoint_url(access, group, command, &query),
                    nonce: None,
                    signature: None,
                })
            }
            Access::Private => {
                let signer = self.credentials.signer().ok_or(RestError::AuthRequired)?;
                let nonce = self.nonces.next_nonce();

                let mut query = encode_query(params)?;
                let auth = encode_query(&AuthParams {
                    nonce,
                    apikey: signer.api_key(),
                })?;
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&auth);

                let url = self.endpoint_url(access, group, command, &query);
                let signature = signer.sign(&url)?;

                Ok(PreparedRequest {
                    access,
                    url,
                    nonce: Some(nonce),
                    signature: Some(signature),
                })
            }
        }
    }

    /// Send a command and return the decoded envelope
    ///
    /// Every number in the body goes through the client's [`NumberPolicy`].
    /// The envelope's `success` flag is not inspected.
    pub async fn dispatch<P>(
        &self,
        group: &str,
        command: &str,
        params: &P,
    ) -> RestResult<ApiResponse<Value>>
    where
        P: Serialize + ?Sized,
    {
        self.request(group, command, params).await
    }

    /// Send a command and decode its result into `T`
    ///
    /// A payload that does not fit `T` is reported as
    /// [`RestError::Malformed`].
    #[instrument(skip(self, params))]
    pub async fn request<T, P>(
        &self,
        group: &str,
        command: &str,
        params: &P,
    ) -> RestResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let prepared = self.prepare(group, command, params)?;
        let body = self.execute(&prepared).await?;

        let value = self.number_policy.decode(&body)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Perform the GET for a prepared request and return the raw body
    async fn execute(&self, prepared: &PreparedRequest) -> RestResult<String> {
        if self.debug_endpoint {
            info!(target: "bittrex_rest::endpoint", "{}", prepared.url);
        }

        debug!("Making {} request", prepared.access);

        let mut request = self.http_client.get(&prepared.url);
        if let Some(signature) = &prepared.signature {
            request = request.header(SIGNATURE_HEADER, signature);
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "Unexpected HTTP status");
            return Err(RestError::BadStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn endpoint_url(&self, access: Access, group: &str, command: &str, query: &str) -> String {
        format!(
            "{}/{}/{}/{}?{}",
            self.base_url,
            access.path_segment(),
            group,
            command,
            query
        )
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// List all markets
    pub async fn get_markets(&self) -> RestResult<ApiResponse<Vec<Market>>> {
        self.market().get_markets().await
    }

    /// Get the 24h summary of a market (e.g. "BTC-LTC")
    pub async fn get_market_summary(&self, market: &str) -> RestResult<ApiResponse<MarketSummary>> {
        self.market().get_market_summary(market).await
    }

    /// Get summaries of all markets
    pub async fn get_market_summaries(&self) -> RestResult<ApiResponse<Vec<MarketSummaryEntry>>> {
        self.market().get_market_summaries().await
    }

    /// List all currencies
    pub async fn get_currencies(&self) -> RestResult<ApiResponse<Vec<Currency>>> {
        self.market().get_currencies().await
    }

    /// Get wallet status of all currencies
    pub async fn get_wallet_health(&self) -> RestResult<ApiResponse<Vec<WalletHealthEntry>>> {
        self.market().get_wallet_health().await
    }

    /// Get the order book of a market
    pub async fn get_market_orderbook(&self, market: &str) -> RestResult<ApiResponse<OrderBook>> {
        self.market().get_market_orderbook(market).await
    }

    /// Get candles of a market
    pub async fn get_ticks(
        &self,
        market: &str,
        interval: TickInterval,
    ) -> RestResult<ApiResponse<Vec<Tick>>> {
        self.market().get_ticks(market, interval).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        self.require_credentials()?;
        Ok(AccountEndpoints::new(self))
    }

    /// Get a single order
    pub async fn get_order(&self, order_id: &str) -> RestResult<ApiResponse<Order>> {
        self.account()?.get_order(order_id).await
    }

    /// Get open orders, optionally limited to one market
    pub async fn get_open_orders(
        &self,
        market: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Order>>> {
        self.account()?.get_open_orders(market).await
    }

    /// Get order history
    pub async fn get_order_history(&self) -> RestResult<ApiResponse<Vec<Order>>> {
        self.account()?.get_order_history().await
    }

    /// Get the balance of one currency, or of all currencies
    pub async fn get_balance(&self, currency: Option<&str>) -> RestResult<ApiResponse<Balances>> {
        self.account()?.get_balance(currency).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(TradingEndpoints::new(self))
    }

    /// Place a new order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<ApiResponse<PlacedOrder>> {
        self.trading()?.place_order(order).await
    }

    /// Cancel an order by id
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<ApiResponse<Value>> {
        self.trading()?.cancel_order(order_id).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(FundingEndpoints::new(self))
    }

    /// Withdraw funds to an address
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> RestResult<ApiResponse<WithdrawalReceipt>> {
        self.funding()?.withdraw(currency, amount, address).await
    }

    /// Get withdrawal history, optionally for one currency
    pub async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Withdrawal>>> {
        self.funding()?.get_withdrawal_history(currency).await
    }

    /// Get deposit history, optionally for one currency
    pub async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Deposit>>> {
        self.funding()?.get_deposit_history(currency).await
    }

    /// Get pending deposits, optionally for one currency
    pub async fn get_pending_deposits(
        &self,
        currency: Option<&str>,
    ) -> RestResult<ApiResponse<Vec<Deposit>>> {
        self.funding()?.get_pending_deposits(currency).await
    }

    /// Get the deposit address of a currency
    pub async fn get_deposit_address(
        &self,
        currency: &str,
    ) -> RestResult<ApiResponse<DepositAddress>> {
        self.funding()?.get_deposit_address(currency).await
    }

    /// Ask the exchange to generate a deposit address for a currency
    pub async fn generate_deposit_address(
        &self,
        currency: &str,
    ) -> RestResult<ApiResponse<DepositAddress>> {
        self.funding()?.generate_deposit_address(currency).await
    }

    fn require_credentials(&self) -> RestResult<()> {
        if self.credentials.is_complete() {
            Ok(())
        } else {
            Err(RestError::AuthRequired)
        }
    }
}

impl std::fmt::Debug for BittrexRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BittrexRestClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("debug_endpoint", &self.debug_endpoint)
            .finish()
    }
}

/// Form-encode request parameters in declaration order
pub fn encode_query<P>(params: &P) -> RestResult<String>
where
    P: Serialize + ?Sized,
{
    serde_urlencoded::to_string(params).map_err(|e| RestError::InvalidParameter(e.to_string()))
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (key and secret are each optional)
    pub credentials: Credentials,
    /// Request timeout
    pub timeout: Duration,
    /// Numeric decoding policy for response bodies
    pub number_policy: NumberPolicy,
    /// Log every request URL before sending it
    pub debug_endpoint: bool,
    /// API root (no trailing slash needed)
    pub base_url: String,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::anonymous(),
            timeout: DEFAULT_TIMEOUT,
            number_policy: NumberPolicy::default(),
            debug_endpoint: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the numeric decoding policy
    pub fn with_number_policy(mut self, number_policy: NumberPolicy) -> Self {
        self.number_policy = number_policy;
        self
    }

    /// Log request URLs before sending
    pub fn with_debug_endpoint(mut self, debug_endpoint: bool) -> Self {
        self.debug_endpoint = debug_endpoint;
        self
    }

    /// Point the client at another API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bittrex_auth::sign_url;

    const NO_PARAMS: &[(&str, &str)] = &[];

    fn private_client() -> BittrexRestClient {
        BittrexRestClient::with_credentials(Credentials::new("key", "secret")).unwrap()
    }

    #[test]
    fn test_client_without_credentials() {
        let client = BittrexRestClient::new().unwrap();
        assert!(!client.has_credentials());
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(60))
            .with_debug_endpoint(true)
            .with_base_url("http://localhost:8080/")
            .with_user_agent("test-agent");

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.debug_endpoint);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));

        let client = BittrexRestClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(ClientConfig::default().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_auth_required_error() {
        let client = BittrexRestClient::new().unwrap();
        assert!(matches!(client.account(), Err(RestError::AuthRequired)));
        assert!(matches!(client.trading(), Err(RestError::AuthRequired)));
        assert!(matches!(client.funding(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_public_url_shape() {
        let client = BittrexRestClient::new().unwrap();
        let prepared = client
            .prepare("market", "getmarketsummary", &[("marketname", "BTC-LTC")])
            .unwrap();

        assert_eq!(prepared.access, Access::Public);
        assert_eq!(
            prepared.url,
            "https://bittrex.com/Api/v2.0/pub/market/getmarketsummary?marketname=BTC-LTC"
        );
        assert_eq!(prepared.nonce, None);
        assert_eq!(prepared.signature, None);
    }

    #[test]
    fn test_public_url_without_params_keeps_question_mark() {
        let client = BittrexRestClient::new().unwrap();
        let prepared = client.prepare("markets", "getmarkets", NO_PARAMS).unwrap();
        assert_eq!(prepared.url, "https://bittrex.com/Api/v2.0/pub/markets/getmarkets?");
    }

    #[test]
    fn test_private_url_shape_and_signature() {
        let client = private_client();
        let prepared = client
            .prepare("orders", "getorder", &[("orderid", "abc")])
            .unwrap();

        let nonce = prepared.nonce.unwrap();
        assert_eq!(prepared.access, Access::Private);
        assert_eq!(
            prepared.url,
            format!(
                "https://bittrex.com/Api/v2.0/key/orders/getorder?orderid=abc&nonce={}&apikey=key",
                nonce
            )
        );
        assert_eq!(
            prepared.signature.unwrap(),
            sign_url(b"secret", &prepared.url).unwrap()
        );
    }

    #[test]
    fn test_private_url_without_params() {
        let client = private_client();
        let prepared = client.prepare("orders", "getorderhistory", NO_PARAMS).unwrap();
        let nonce = prepared.nonce.unwrap();
        assert!(prepared
            .url
            .ends_with(&format!("/key/orders/getorderhistory?nonce={}&apikey=key", nonce)));
    }

    #[test]
    fn test_invalid_command_checked_first() {
        let client = BittrexRestClient::new().unwrap();
        let err = client.prepare("market", "getfoo", NO_PARAMS).unwrap_err();
        assert!(matches!(err, RestError::InvalidCommand { ref command } if command == "getfoo"));
    }

    #[test]
    fn test_private_command_needs_key_and_secret() {
        for credentials in [
            Credentials::anonymous(),
            Credentials::anonymous().with_api_key("key"),
            Credentials::anonymous().with_api_secret("secret"),
        ] {
            let client = BittrexRestClient::with_credentials(credentials).unwrap();
            let err = client.prepare("balance", "getbalances", NO_PARAMS).unwrap_err();
            assert!(matches!(err, RestError::AuthRequired));
        }
    }

    #[test]
    fn test_rapid_private_calls_have_increasing_nonces() {
        let client = private_client();
        let first = client.prepare("orders", "getorderhistory", NO_PARAMS).unwrap();
        let second = client.prepare("orders", "getorderhistory", NO_PARAMS).unwrap();

        assert!(second.nonce.unwrap() > first.nonce.unwrap());
        assert_ne!(first.signature, second.signature);
    }

    #[test]
    fn test_query_round_trip() {
        let client = BittrexRestClient::new().unwrap();
        let prepared = client
            .prepare("market", "getmarketsummary", &[("marketname", "BTC-LTC")])
            .unwrap();

        let (_, query) = prepared.url.split_once('?').unwrap();
        let decoded: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap();
        assert_eq!(decoded, vec![("marketname".to_string(), "BTC-LTC".to_string())]);
    }

    #[test]
    fn test_query_is_form_encoded() {
        let client = BittrexRestClient::new().unwrap();
        let prepared = client
            .prepare("market", "getmarketsummary", &[("marketname", "BTC LTC&x")])
            .unwrap();
        assert!(prepared.url.ends_with("?marketname=BTC+LTC%26x"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let client = private_client();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret\""));
        assert!(debug.contains("[REDACTED]"));
    }
}
