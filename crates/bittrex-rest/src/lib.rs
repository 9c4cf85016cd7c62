//! REST API client for the Bittrex cryptocurrency exchange
//!
//! This crate provides a client for both the v1.1 and v2.0 Bittrex HTTP
//! APIs, covering market data, account management and order execution.
//!
//! # Features
//!
//! - **Market Data**: Markets, currencies, ticker, summaries, orderbook, history, candles
//! - **Account**: Balances, deposit addresses, withdrawals, order and funding history
//! - **Trading**: Limit orders (v1.1), conditional orders (v2.0), cancel, open orders
//!
//! # Authentication
//!
//! Private endpoints carry `apikey` and `nonce` in the query string. The
//! full URL is signed with HMAC-SHA512 and the hex digest is sent in the
//! `apisign` header.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_rest::{BittrexClient, ClientConfig, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BittrexClient::new()?;
//!     let ticker = client.get_ticker("BTC-LTC").await?;
//!     println!("BTC-LTC: {:?}", ticker.result);
//!
//!     // Private endpoints (auth required)
//!     let config = ClientConfig::new().with_credentials(Credentials::from_env());
//!     let auth_client = BittrexClient::with_config(config)?;
//!     let balances = auth_client.get_balances().await?;
//!     println!("Balances: {:?}", balances.result);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rate Limiting
//!
//! Every call, public or private, waits until at least `1 / calls_per_second`
//! seconds have passed since the previous call made by the same client
//! (default: 1 call/second). Clones of a client share the limit.

pub mod catalog;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod rate_limiter;
pub mod request;
pub mod transport;

// Re-export main types
pub use catalog::Endpoint;
pub use client::{BittrexClient, ClientConfig, SignedRequest};
pub use endpoints::{AccountEndpoints, MarketEndpoints, TradeRequest, TradingEndpoints};
pub use error::{RestError, RestResult};
pub use rate_limiter::RateLimiter;
pub use request::{RequestBuilder, DEFAULT_BASE_URL};
pub use transport::{HttpTransport, Transport, TransportError};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::{MockTransport, RecordedRequest};

pub use bittrex_auth::{CredentialCipher, Credentials, SecretsFile};
pub use bittrex_types::{
    ApiResponse, ApiVersion, ConditionType, Decimal, OrderType, OrderbookType, ProtectionLevel,
    RequestParams, TickInterval, TimeInEffect,
};
