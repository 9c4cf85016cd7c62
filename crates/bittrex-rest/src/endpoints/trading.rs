//! Private trading endpoints

use crate::catalog::Endpoint;
use crate::client::BittrexClient;
use crate::error::RestResult;
use bittrex_types::{ApiResponse, ConditionType, Decimal, OrderType, RequestParams, TimeInEffect};
use tracing::instrument;

/// Order placement request for the v2.0 `TradeBuy`/`TradeSell` endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRequest {
    pub market: String,
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub time_in_effect: TimeInEffect,
    pub condition_type: ConditionType,
    /// Trigger price, only meaningful with a condition
    pub target: Decimal,
}

impl TradeRequest {
    /// A good-til-cancelled limit order with no condition
    pub fn limit(market: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            market: market.into(),
            order_type: OrderType::Limit,
            quantity,
            rate,
            time_in_effect: TimeInEffect::default(),
            condition_type: ConditionType::default(),
            target: Decimal::ZERO,
        }
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn with_time_in_effect(mut self, time_in_effect: TimeInEffect) -> Self {
        self.time_in_effect = time_in_effect;
        self
    }

    /// Attach a trigger condition and its target price
    pub fn with_condition(mut self, condition_type: ConditionType, target: Decimal) -> Self {
        self.condition_type = condition_type;
        self.target = target;
        self
    }

    pub fn to_params(&self) -> RequestParams {
        RequestParams::new()
            .with("MarketName", &self.market)
            .with("OrderType", self.order_type.as_str())
            .with_decimal("Quantity", self.quantity)
            .with_decimal("Rate", self.rate)
            .with("TimeInEffect", self.time_in_effect.as_str())
            .with("ConditionType", self.condition_type.as_str())
            .with_decimal("Target", self.target)
    }
}

/// Private trading endpoints
pub struct TradingEndpoints<'a> {
    client: &'a BittrexClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a BittrexClient) -> Self {
        Self { client }
    }

    /// Place a limit buy order (v1.1 only)
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `quantity` - Amount to buy
    /// * `rate` - Limit price
    #[instrument(skip(self))]
    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::BuyLimit, limit_params(market, quantity, rate))
            .await
    }

    /// Place a limit sell order (v1.1 only)
    #[instrument(skip(self))]
    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::SellLimit, limit_params(market, quantity, rate))
            .await
    }

    /// Place a buy order (v2.0 only)
    #[instrument(skip(self))]
    pub async fn trade_buy(&self, request: &TradeRequest) -> RestResult<ApiResponse> {
        self.client.query(Endpoint::TradeBuy, request.to_params()).await
    }

    /// Place a sell order (v2.0 only)
    #[instrument(skip(self))]
    pub async fn trade_sell(&self, request: &TradeRequest) -> RestResult<ApiResponse> {
        self.client.query(Endpoint::TradeSell, request.to_params()).await
    }

    /// Cancel an open order
    ///
    /// # Arguments
    /// * `uuid` - Order id returned when the order was placed
    #[instrument(skip(self))]
    pub async fn cancel(&self, uuid: &str) -> RestResult<ApiResponse> {
        let params = RequestParams::new().with("uuid", uuid).with("orderid", uuid);
        self.client.query(Endpoint::CancelOrder, params).await
    }

    /// Get open orders, optionally for a single market
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self, market: Option<&str>) -> RestResult<ApiResponse> {
        let params = RequestParams::new()
            .with_opt("market", market)
            .with_opt("marketname", market);

        self.client.query(Endpoint::GetOpenOrders, params).await
    }
}

fn limit_params(market: &str, quantity: Decimal, rate: Decimal) -> RequestParams {
    RequestParams::new()
        .with("market", market)
        .with_decimal("quantity", quantity)
        .with_decimal("rate", rate)
}
