//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::catalog::Endpoint;
use crate::client::BittrexClient;
use crate::error::RestResult;
use bittrex_types::{ApiResponse, Decimal, RequestParams};
use tracing::instrument;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a BittrexClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a BittrexClient) -> Self {
        Self { client }
    }

    /// Get all balances for the account
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> RestResult<ApiResponse> {
        self.client.query(Endpoint::GetBalances, RequestParams::new()).await
    }

    /// Get the balance of one currency
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "LTC")
    #[instrument(skip(self))]
    pub async fn get_balance(&self, currency: &str) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::GetBalance, currency_params(currency))
            .await
    }

    /// Get or generate the deposit address for a currency
    #[instrument(skip(self))]
    pub async fn get_deposit_address(&self, currency: &str) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::GetDepositAddress, currency_params(currency))
            .await
    }

    /// Withdraw funds to an external address
    ///
    /// # Arguments
    /// * `currency` - Currency code
    /// * `quantity` - Amount to withdraw
    /// * `address` - Destination address
    /// * `payment_id` - Memo / payment id for currencies that need one
    #[instrument(skip(self))]
    pub async fn withdraw(
        &self,
        currency: &str,
        quantity: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> RestResult<ApiResponse> {
        let params = currency_params(currency)
            .with_decimal("quantity", quantity)
            .with("address", address)
            .with_opt("paymentid", payment_id);

        self.client.query(Endpoint::Withdraw, params).await
    }

    /// Get order history, optionally for a single market
    #[instrument(skip(self))]
    pub async fn get_order_history(&self, market: Option<&str>) -> RestResult<ApiResponse> {
        let params = RequestParams::new()
            .with_opt("market", market)
            .with_opt("marketname", market);

        self.client.query(Endpoint::GetOrderHistory, params).await
    }

    /// Get a single order by id
    #[instrument(skip(self))]
    pub async fn get_order(&self, uuid: &str) -> RestResult<ApiResponse> {
        let params = RequestParams::new().with("uuid", uuid).with("orderid", uuid);
        self.client.query(Endpoint::GetOrder, params).await
    }

    /// Get withdrawal history, optionally for a single currency
    #[instrument(skip(self))]
    pub async fn get_withdrawal_history(&self, currency: Option<&str>) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::GetWithdrawalHistory, optional_currency(currency))
            .await
    }

    /// Get deposit history, optionally for a single currency
    #[instrument(skip(self))]
    pub async fn get_deposit_history(&self, currency: Option<&str>) -> RestResult<ApiResponse> {
        self.client
            .query(Endpoint::GetDepositHistory, optional_currency(currency))
            .await
    }
}

/// Sends the currency under both the v1.1 and v2.0 parameter names
fn currency_params(currency: &str) -> RequestParams {
    RequestParams::new()
        .with("currency", currency)
        .with("currencyname", currency)
}

fn optional_currency(currency: Option<&str>) -> RequestParams {
    currency.map(currency_params).unwrap_or_default()
}
