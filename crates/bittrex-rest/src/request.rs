//! Request URL construction
//!
//! Bittrex signs the literal request URL, so the byte layout built here is
//! part of the wire contract:
//!
//! ```text
//! {base}/{version}{path}?apikey={key}&nonce={nonce}&{encoded params}
//! ```
//!
//! `apikey` and `nonce` are appended raw, ahead of the percent-encoded
//! parameters, and only for private endpoints.

use bittrex_auth::generate_nonce;
use bittrex_types::{ApiVersion, RequestParams};

use crate::catalog::Endpoint;
use crate::error::{RestError, RestResult};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://bittrex.com/api";

/// Builds request URLs for a fixed API version
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    version: ApiVersion,
}

impl RequestBuilder {
    /// Builder for the public Bittrex API root
    pub fn new(version: ApiVersion) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, version)
    }

    /// Builder for a custom API root (e.g. a proxy)
    pub fn with_base_url(base_url: impl Into<String>, version: ApiVersion) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, version }
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full request URL with a freshly generated nonce
    pub fn build(
        &self,
        endpoint: Endpoint,
        params: &RequestParams,
        api_key: &str,
    ) -> RestResult<String> {
        self.build_with_nonce(endpoint, params, api_key, &generate_nonce())
    }

    /// Build the full request URL with the given nonce
    ///
    /// The nonce is ignored for public endpoints.
    pub fn build_with_nonce(
        &self,
        endpoint: Endpoint,
        params: &RequestParams,
        api_key: &str,
        nonce: &str,
    ) -> RestResult<String> {
        let path = endpoint.resolve(self.version)?;

        let mut url = format!("{}/{}{}?", self.base_url, self.version, path);

        if endpoint.protection().is_private() {
            url.push_str(&format!("apikey={}&nonce={}&", api_key, nonce));
        }

        url.push_str(&encode_params(params)?);

        Ok(url)
    }
}

/// Percent-encode parameters as `key=value` pairs joined by `&`
pub fn encode_params(params: &RequestParams) -> RestResult<String> {
    serde_urlencoded::to_string(params).map_err(|e| RestError::InvalidParameter(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orderbook_params() -> RequestParams {
        RequestParams::new().with("market", "BTC-LTC").with("type", "buy")
    }

    #[test]
    fn test_public_url_has_no_auth() {
        let builder = RequestBuilder::new(ApiVersion::V1_1);
        let url = builder
            .build(Endpoint::GetMarkets, &RequestParams::new(), "AAA")
            .unwrap();

        assert_eq!(url, "https://bittrex.com/api/v1.1/public/getmarkets?");
        assert!(!url.contains("apikey="));
        assert!(!url.contains("nonce="));
    }

    #[test]
    fn test_public_url_with_params() {
        let builder = RequestBuilder::new(ApiVersion::V1_1);
        let url = builder
            .build(Endpoint::GetOrderbook, &orderbook_params(), "AAA")
            .unwrap();

        assert_eq!(
            url,
            "https://bittrex.com/api/v1.1/public/getorderbook?market=BTC-LTC&type=buy"
        );
    }

    #[test]
    fn test_private_url_puts_auth_first() {
        let builder = RequestBuilder::new(ApiVersion::V1_1);
        let params = RequestParams::new().with("currency", "BTC").with("currencyname", "BTC");
        let url = builder
            .build_with_nonce(Endpoint::GetBalance, &params, "AAA", "1500000000000")
            .unwrap();

        assert_eq!(
            url,
            "https://bittrex.com/api/v1.1/account/getbalance?apikey=AAA&nonce=1500000000000&currency=BTC&currencyname=BTC"
        );
    }

    #[test]
    fn test_private_url_without_params_keeps_trailing_ampersand() {
        let builder = RequestBuilder::new(ApiVersion::V2_0);
        let url = builder
            .build_with_nonce(Endpoint::GetBalances, &RequestParams::new(), "k", "42")
            .unwrap();

        assert_eq!(
            url,
            "https://bittrex.com/api/v2.0/key/balance/getbalances?apikey=k&nonce=42&"
        );
    }

    #[test]
    fn test_auth_prefix_is_not_encoded() {
        let builder = RequestBuilder::new(ApiVersion::V1_1);
        let url = builder
            .build_with_nonce(Endpoint::GetBalances, &RequestParams::new(), "a b/c", "1")
            .unwrap();

        assert!(url.contains("apikey=a b/c&nonce=1&"));
    }

    #[test]
    fn test_params_are_percent_encoded() {
        let params = RequestParams::new().with("address", "a b&c=d");
        assert_eq!(encode_params(&params).unwrap(), "address=a+b%26c%3Dd");
    }

    #[test]
    fn test_unsupported_version_fails_before_building() {
        let builder = RequestBuilder::new(ApiVersion::V1_1);
        let err = builder
            .build(Endpoint::GetCandles, &RequestParams::new(), "AAA")
            .unwrap_err();

        assert!(matches!(
            err,
            RestError::UnsupportedOperation {
                version: ApiVersion::V1_1,
                ..
            }
        ));
    }

    #[test]
    fn test_custom_base_url_strips_trailing_slash() {
        let builder = RequestBuilder::with_base_url("http://127.0.0.1:8080/api/", ApiVersion::V2_0);
        let url = builder
            .build(Endpoint::GetMarkets, &RequestParams::new(), "")
            .unwrap();

        assert_eq!(url, "http://127.0.0.1:8080/api/v2.0/pub/Markets/GetMarkets?");
    }

    #[test]
    fn test_fresh_nonce_per_build() {
        let builder = RequestBuilder::new(ApiVersion::V1_1);
        let first = builder
            .build(Endpoint::GetBalances, &RequestParams::new(), "AAA")
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(3));
        let second = builder
            .build(Endpoint::GetBalances, &RequestParams::new(), "AAA")
            .unwrap();

        assert_ne!(first, second);
    }
}
