//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::catalog::Endpoint;
use crate::client::BittrexClient;
use crate::error::{RestError, RestResult};
use bittrex_types::{ApiResponse, OrderbookType, RequestParams, TickInterval};
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a BittrexClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a BittrexClient) -> Self {
        Self { client }
    }

    /// Get the open and available trading markets along with other metadata
    #[instrument(skip(self))]
    pub async fn get_markets(&self) -> RestResult<ApiResponse> {
        self.client.query(Endpoint::GetMarkets, RequestParams::new()).await
    }

    /// Get all supported currencies along with other metadata
    #[instrument(skip(self))]
    pub async fn get_currencies(&self) -> RestResult<ApiResponse> {
        self.client.query(Endpoint::GetCurrencies, RequestParams::new()).await
    }

    /// Get the current tick values for a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, market: &str) -> RestResult<ApiResponse> {
        self.client.query(Endpoint::GetTicker, market_params(market)).await
    }

    /// Get the last 24 hour summary of all active markets
    #[instrument(skip(self))]
    pub async fn get_market_summaries(&self) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::GetMarketSummaries, RequestParams::new())
            .await
    }

    /// Get the last 24 hour summary of one market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-XRP")
    #[instrument(skip(self))]
    pub async fn get_market_summary(&self, market: &str) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::GetMarketSummary, market_params(market))
            .await
    }

    /// Get the order book for a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `depth_type` - Which side(s) of the book to return
    #[instrument(skip(self))]
    pub async fn get_orderbook(
        &self,
        market: &str,
        depth_type: OrderbookType,
    ) -> RestResult<ApiResponse> {
        let params = market_params(market).with("type", depth_type.as_str());
        self.client.query(Endpoint::GetOrderbook, params).await
    }

    /// Get the latest trades that have occurred in a market
    #[instrument(skip(self))]
    pub async fn get_market_history(&self, market: &str) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::GetMarketHistory, market_params(market))
            .await
    }

    /// Get candles for a market (v2.0 only)
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-ETH")
    /// * `interval` - Candle width
    #[instrument(skip(self))]
    pub async fn get_candles(&self, market: &str, interval: TickInterval) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::GetCandles, candle_params(market, interval))
            .await
    }

    /// Get the most recent candle for a market (v2.0 only)
    #[instrument(skip(self))]
    pub async fn get_latest_candle(
        &self,
        market: &str,
        interval: TickInterval,
    ) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::GetLatestCandle, candle_params(market, interval))
            .await
    }

    /// List the names of all markets a currency trades in
    ///
    /// Matches market names ending with `currency`, ignoring case, e.g.
    /// `"LTC"` yields `["BTC-LTC", "ETH-LTC", "USDT-LTC"]`.
    #[instrument(skip(self))]
    pub async fn list_markets_by_currency(&self, currency: &str) -> RestResult<Vec<String>> {
        let result = self
            .get_markets()
            .await?
            .into_result()
            .map_err(RestError::from_api_message)?;

        let markets = result
            .as_array()
            .ok_or_else(|| RestError::Parse("market list is not an array".to_string()))?;

        let suffix = currency.to_lowercase();
        let names: Vec<String> = markets
            .iter()
            .filter_map(|market| market.get("MarketName").and_then(|name| name.as_str()))
            .filter(|name| name.to_lowercase().ends_with(&suffix))
            .map(str::to_string)
            .collect();

        debug!("Found {} markets for {}", names.len(), currency);
        Ok(names)
    }
}

/// Sends the market under both the v1.1 and v2.0 parameter names
fn market_params(market: &str) -> RequestParams {
    RequestParams::new()
        .with("market", market)
        .with("marketname", market)
}

fn candle_params(market: &str, interval: TickInterval) -> RequestParams {
    RequestParams::new()
        .with("marketName", market)
        .with("tickInterval", interval.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::transport::MockTransport;
    use bittrex_types::ApiVersion;
    use serde_json::json;
    use std::sync::Arc;

    fn client_with(version: ApiVersion) -> (BittrexClient, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::new());
        let config = ClientConfig::new()
            .with_api_version(version)
            .with_calls_per_second(1000.0);
        let client = BittrexClient::with_transport(config, transport.clone()).unwrap();
        (client, transport)
    }

    #[test]
    fn test_market_params_carry_both_names() {
        let params = market_params("BTC-LTC");
        assert_eq!(params.get("market"), Some("BTC-LTC"));
        assert_eq!(params.get("marketname"), Some("BTC-LTC"));
    }

    #[tokio::test]
    async fn test_orderbook_url() {
        let (client, transport) = client_with(ApiVersion::V1_1);
        transport.push_response(ApiResponse::ok(json!({"buy": [], "sell": []})));

        client
            .market()
            .get_orderbook("BTC-LTC", OrderbookType::Buy)
            .await
            .unwrap();

        let url = transport.last_request().unwrap().url;
        assert_eq!(
            url,
            "https://bittrex.com/api/v1.1/public/getorderbook?market=BTC-LTC&marketname=BTC-LTC&type=buy"
        );
    }

    #[tokio::test]
    async fn test_candles_v2_only() {
        let (client, transport) = client_with(ApiVersion::V1_1);
        let err = client
            .market()
            .get_candles("BTC-ETH", TickInterval::Hour)
            .await
            .unwrap_err();
        assert!(err.is_unsupported());
        assert!(transport.requests().is_empty());

        let (client, transport) = client_with(ApiVersion::V2_0);
        transport.push_response(ApiResponse::ok(json!([])));
        client
            .market()
            .get_candles("BTC-ETH", TickInterval::Hour)
            .await
            .unwrap();

        let url = transport.last_request().unwrap().url;
        assert_eq!(
            url,
            "https://bittrex.com/api/v2.0/pub/market/GetTicks?marketName=BTC-ETH&tickInterval=hour"
        );
    }

    #[tokio::test]
    async fn test_list_markets_by_currency() {
        let (client, transport) = client_with(ApiVersion::V1_1);
        transport.push_response(ApiResponse::ok(json!([
            {"MarketName": "BTC-LTC"},
            {"MarketName": "BTC-ETH"},
            {"MarketName": "ETH-LTC"},
            {"MarketName": "USDT-ltc"},
            {"Other": "field"}
        ])));

        let markets = client.market().list_markets_by_currency("LTC").await.unwrap();
        assert_eq!(markets, vec!["BTC-LTC", "ETH-LTC", "USDT-ltc"]);
    }

    #[tokio::test]
    async fn test_list_markets_surfaces_api_failure() {
        let (client, transport) = client_with(ApiVersion::V1_1);
        transport.push_response(ApiResponse::failure("SERVICE_UNAVAILABLE"));

        let err = client.market().list_markets_by_currency("LTC").await.unwrap_err();
        assert!(matches!(err, RestError::Api { message } if message == "SERVICE_UNAVAILABLE"));
    }
}
