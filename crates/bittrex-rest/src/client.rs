//! Main REST client implementation

use crate::catalog::Endpoint;
use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::rate_limiter::RateLimiter;
use crate::request::{RequestBuilder, DEFAULT_BASE_URL};
use crate::transport::{HttpTransport, Transport};
use bittrex_auth::{AuthError, CredentialCipher, Credentials, SecretsFile};
use bittrex_types::{ApiResponse, ApiVersion, OrderbookType, RequestParams};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default call rate
const DEFAULT_CALLS_PER_SECOND: f64 = 1.0;

/// A fully built request, ready to dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Full request URL, query string included
    pub url: String,
    /// Hex HMAC-SHA512 of `url`, sent in the `apisign` header
    pub signature: String,
}

/// Bittrex REST API client
///
/// Every call goes through the same pipeline: resolve the endpoint path for
/// the configured API version, build the URL (adding `apikey` and `nonce`
/// for private endpoints), sign it, wait for the rate limiter, and dispatch
/// through the [`Transport`].
///
/// Clones share the rate limiter, transport and shutdown token.
///
/// # Example
///
/// ```no_run
/// use bittrex_rest::{BittrexClient, ClientConfig, Credentials};
/// use bittrex_types::ApiVersion;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BittrexClient::new()?;
///     let markets = client.get_markets().await?;
///
///     // With authentication for private endpoints
///     let config = ClientConfig::new()
///         .with_credentials(Credentials::from_env())
///         .with_api_version(ApiVersion::V1_1)
///         .with_calls_per_second(2.0);
///     let auth_client = BittrexClient::with_config(config)?;
///     let balances = auth_client.get_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BittrexClient {
    credentials: Credentials,
    request_builder: RequestBuilder,
    rate_limiter: Arc<RateLimiter>,
    transport: Arc<dyn Transport>,
    timeout: Duration,
    cipher: Option<Arc<dyn CredentialCipher>>,
    shutdown: CancellationToken,
}

impl BittrexClient {
    /// Create a new client without credentials
    ///
    /// Only public endpoints will return useful data.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration, using HTTP transport
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport = HttpTransport::new(config.timeout, config.user_agent.as_deref())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a new client with a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> RestResult<Self> {
        let rate_limiter = RateLimiter::per_second(config.calls_per_second)?;
        let request_builder = RequestBuilder::with_base_url(config.base_url, config.api_version);

        info!(
            version = %config.api_version,
            calls_per_second = config.calls_per_second,
            "Created Bittrex REST client"
        );

        Ok(Self {
            credentials: config.credentials.unwrap_or_default(),
            request_builder,
            rate_limiter: Arc::new(rate_limiter),
            transport,
            timeout: config.timeout,
            cipher: config.cipher,
            shutdown: CancellationToken::new(),
        })
    }

    /// API version this client talks to
    pub fn api_version(&self) -> ApiVersion {
        self.request_builder.version()
    }

    /// Credentials used for signing
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Check if both the API key and secret are set
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_complete()
    }

    /// Replace encrypted credentials with their decrypted form
    ///
    /// Fails with [`AuthError::CipherUnavailable`] if the client was built
    /// without a [`CredentialCipher`].
    pub fn decrypt_credentials(mut self) -> RestResult<Self> {
        let cipher = self.cipher.as_ref().ok_or(AuthError::CipherUnavailable)?;
        self.credentials = SecretsFile::from_credentials(&self.credentials).decrypt(cipher.as_ref())?;
        debug!("Decrypted client credentials");
        Ok(self)
    }

    /// Encrypt the current credentials for storage in a secrets file
    pub fn export_credentials(&self) -> RestResult<SecretsFile> {
        let cipher = self.cipher.as_ref().ok_or(AuthError::CipherUnavailable)?;
        Ok(SecretsFile::encrypt(&self.credentials, cipher.as_ref())?)
    }

    /// Stop the client
    ///
    /// Tasks waiting on the rate limiter return [`RestError::Cancelled`],
    /// as does every later call.
    pub fn shutdown(&self) {
        info!("Shutting down Bittrex REST client");
        self.shutdown.cancel();
    }

    /// Check if [`BittrexClient::shutdown`] has been called
    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Build and sign the request for `endpoint` without sending it
    pub fn prepare(&self, endpoint: Endpoint, params: &RequestParams) -> RestResult<SignedRequest> {
        let url = self
            .request_builder
            .build(endpoint, params, self.credentials.api_key())?;
        let signature = self.credentials.sign(&url);

        Ok(SignedRequest { url, signature })
    }

    /// Run one call through the full pipeline
    ///
    /// The URL (and its nonce) is built and signed once the rate limiter lets
    /// the call through, so nonces follow dispatch order across clones.
    /// Returns the decoded envelope even when `success` is false.
    #[instrument(skip(self, params), fields(version = %self.api_version()))]
    pub async fn query(&self, endpoint: Endpoint, params: RequestParams) -> RestResult<ApiResponse> {
        if self.shutdown.is_cancelled() {
            return Err(RestError::Cancelled);
        }

        endpoint.resolve(self.api_version())?;

        let (_, request) = self
            .rate_limiter
            .wait_cancellable_then(&self.shutdown, || self.prepare(endpoint, &params))
            .await?;
        let request = request?;

        debug!(protection = ?endpoint.protection(), "Dispatching request");

        let response = tokio::time::timeout(
            self.timeout,
            self.transport.get(&request.url, &request.signature),
        )
        .await
        .map_err(|_| RestError::Timeout(self.timeout))??;

        if !response.success {
            debug!(message = %response.message, "Bittrex reported failure");
        }

        Ok(response)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get the open and available trading markets
    pub async fn get_markets(&self) -> RestResult<ApiResponse> {
        self.market().get_markets().await
    }

    /// Get the current tick values for a market (v1.1 only)
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    pub async fn get_ticker(&self, market: &str) -> RestResult<ApiResponse> {
        self.market().get_ticker(market).await
    }

    /// Get the order book for a market
    pub async fn get_orderbook(
        &self,
        market: &str,
        depth_type: OrderbookType,
    ) -> RestResult<ApiResponse> {
        self.market().get_orderbook(market, depth_type).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self)
    }

    /// Get all balances for the account
    pub async fn get_balances(&self) -> RestResult<ApiResponse> {
        self.account().get_balances().await
    }

    /// Get the balance of one currency
    pub async fn get_balance(&self, currency: &str) -> RestResult<ApiResponse> {
        self.account().get_balance(currency).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(self)
    }

    /// Get open orders, optionally for a single market
    pub async fn get_open_orders(&self, market: Option<&str>) -> RestResult<ApiResponse> {
        self.trading().get_open_orders(market).await
    }
}

impl std::fmt::Debug for BittrexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BittrexClient")
            .field("api_version", &self.api_version())
            .field("has_credentials", &self.has_credentials())
            .field("has_cipher", &self.cipher.is_some())
            .finish()
    }
}

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API version to talk to
    pub api_version: ApiVersion,
    /// Maximum call rate
    pub calls_per_second: f64,
    /// Request timeout
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// API root URL
    pub base_url: String,
    /// Cipher for encrypted credentials (optional)
    pub cipher: Option<Arc<dyn CredentialCipher>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            api_version: ApiVersion::default(),
            calls_per_second: DEFAULT_CALLS_PER_SECOND,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            cipher: None,
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
        self.credentials = Some(credentials);
        self
    }

    /// Set API version
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Set maximum call rate
    pub fn with_calls_per_second(mut self, calls_per_second: f64) -> Self {
        self.calls_per_second = calls_per_second;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set API root URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the cipher used for encrypted credentials
    pub fn with_cipher(mut self, cipher: Arc<dyn CredentialCipher>) -> Self {
        self.cipher = Some(cipher);
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("credentials", &self.credentials)
            .field("api_version", &self.api_version)
            .field("calls_per_second", &self.calls_per_second)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .field("cipher", &self.cipher.as_ref().map(|_| "<cipher>"))
            .finish()
    }
}
