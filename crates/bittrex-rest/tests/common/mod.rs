//! Common test utilities and fixtures for integration tests
//!
//! Contains sample response envelopes in the shape Bittrex returns them.

#![allow(dead_code)]

use async_trait::async_trait;
use bittrex_rest::{ApiResponse, BittrexClient, ClientConfig, Transport, TransportError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::time::Instant;

/// Sample `getmarkets` response
pub const MARKETS_RESPONSE: &str = r#"{
    "success": true,
    "message": "",
    "result": [
        {"MarketCurrency": "LTC", "BaseCurrency": "BTC", "MarketName": "BTC-LTC", "IsActive": true},
        {"MarketCurrency": "DOGE", "BaseCurrency": "BTC", "MarketName": "BTC-DOGE", "IsActive": true},
        {"MarketCurrency": "LTC", "BaseCurrency": "ETH", "MarketName": "ETH-LTC", "IsActive": true},
        {"MarketCurrency": "LTC", "BaseCurrency": "USDT", "MarketName": "USDT-LTC", "IsActive": true}
    ]
}"#;

/// Sample `getbalances` response
pub const BALANCES_RESPONSE: &str = r#"{
    "success": true,
    "message": "",
    "result": [
        {"Currency": "BTC", "Balance": 4.21549076, "Available": 4.21549076, "Pending": 0.0},
        {"Currency": "LTC", "Balance": 12.5, "Available": 10.0, "Pending": 0.0}
    ]
}"#;

/// Sample rejected call, with a null result
pub const INVALID_MARKET_RESPONSE: &str = r#"{
    "success": false,
    "message": "INVALID_MARKET",
    "result": null
}"#;

/// A request seen by [`RecordingTransport`]
#[derive(Debug, Clone)]
pub struct Seen {
    pub url: String,
    pub signature: String,
    pub at: Instant,
}

/// Transport that replays canned JSON bodies and records every request
#[derive(Default)]
pub struct RecordingTransport {
    bodies: Mutex<VecDeque<String>>,
    seen: Mutex<Vec<Seen>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, body: &str) {
        self.bodies.lock().push_back(body.to_string());
    }

    pub fn push_times(&self, body: &str, times: usize) {
        for _ in 0..times {
            self.push(body);
        }
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().clone()
    }

    pub fn last(&self) -> Seen {
        self.seen.lock().last().cloned().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: &str, signature: &str) -> Result<ApiResponse, TransportError> {
        self.seen.lock().push(Seen {
            url: url.to_string(),
            signature: signature.to_string(),
            at: Instant::now(),
        });

        let body = self
            .bodies
            .lock()
            .pop_front()
            .ok_or_else(|| TransportError::Http("no canned response".to_string()))?;

        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Build a client over a fresh recording transport
pub fn client(config: ClientConfig) -> (BittrexClient, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new();
    let client = BittrexClient::with_transport(config, transport.clone())
        .expect("valid client config");
    (client, transport)
}

/// Split a URL into its path and query string
pub fn split_url(url: &str) -> (&str, &str) {
    url.split_once('?').expect("URL always carries a '?'")
}
