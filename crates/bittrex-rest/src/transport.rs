//! HTTP transport abstraction
//!
//! This module provides a trait-based abstraction over the network call,
//! enabling unit testing of the request pipeline without real HTTP traffic.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_rest::transport::{HttpTransport, Transport, TransportError};
//! use std::time::Duration;
//!
//! async fn example() -> Result<(), TransportError> {
//!     let transport = HttpTransport::new(Duration::from_secs(30), None)?;
//!     let url = "https://bittrex.com/api/v1.1/public/getmarkets?";
//!     let response = transport.get(url, "").await?;
//!     println!("success: {}", response.success);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use bittrex_types::ApiResponse;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Header carrying the HMAC-SHA512 signature of the request URL
pub const SIGNATURE_HEADER: &str = "apisign";

const DEFAULT_USER_AGENT: &str = concat!("bittrex-rest/", env!("CARGO_PKG_VERSION"));

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection or protocol failure
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status code
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Status code
        status: u16,
        /// Response body, if it could be read
        body: String,
    },

    /// Response body was not a valid response envelope
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Request timed out inside the HTTP client
    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Trait for the network call behind every request
///
/// This trait enables unit testing of the client by allowing mock
/// implementations to be injected instead of a real HTTP client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET on `url`, sending `signature` in the `apisign` header
    async fn get(&self, url: &str, signature: &str) -> Result<ApiResponse, TransportError>;
}

/// Real HTTP transport using reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given request timeout and user agent
    pub fn new(timeout: Duration, user_agent: Option<&str>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, url, signature))]
    async fn get(&self, url: &str, signature: &str) -> Result<ApiResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .header(SIGNATURE_HEADER, signature)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "Request rejected");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// A request captured by [`MockTransport`]
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Full request URL
    pub url: String,
    /// Value of the `apisign` header
    pub signature: String,
}

/// Mock transport for testing
///
/// Replays queued responses in order and records every request.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockTransport {
    responses: parking_lot::Mutex<std::collections::VecDeque<Result<ApiResponse, TransportError>>>,
    requests: parking_lot::Mutex<Vec<RecordedRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to be returned by the next get()
    pub fn push_response(&self, response: ApiResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    /// Queue a response given as raw JSON
    ///
    /// # Panics
    /// If `json` is not a valid response envelope.
    pub fn push_json(&self, json: &str) {
        let response = serde_json::from_str(json).expect("mock response must be valid JSON");
        self.push_response(response);
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Requests seen so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Most recent request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str, signature: &str) -> Result<ApiResponse, TransportError> {
        self.requests.lock().push(RecordedRequest {
            url: url.to_string(),
            signature: signature.to_string(),
        });

        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Http("no mock response queued".into())))
    }
}
