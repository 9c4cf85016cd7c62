//! Catalog of every Bittrex operation the client knows about
//!
//! Each [`Endpoint`] maps to a path per API version, a protection level, and
//! the parameter keys it accepts. Some operations exist in only one version.

use bittrex_types::{ApiVersion, EndpointSpec, ProtectionLevel};

use crate::error::{RestError, RestResult};

/// Logical Bittrex operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    // Public market data
    GetMarkets,
    GetCurrencies,
    GetTicker,
    GetMarketSummaries,
    GetMarketSummary,
    GetOrderbook,
    GetMarketHistory,
    GetCandles,
    GetLatestCandle,
    // Trading
    BuyLimit,
    SellLimit,
    TradeBuy,
    TradeSell,
    CancelOrder,
    GetOpenOrders,
    // Account
    GetBalances,
    GetBalance,
    GetDepositAddress,
    Withdraw,
    GetOrderHistory,
    GetOrder,
    GetWithdrawalHistory,
    GetDepositHistory,
}

const MARKET: &[&str] = &["market", "marketname"];
const CURRENCY: &[&str] = &["currency", "currencyname"];
const ORDER_ID: &[&str] = &["uuid", "orderid"];
const CANDLE: &[&str] = &["marketName", "tickInterval"];
const LIMIT_ORDER: &[&str] = &["market", "quantity", "rate"];
const TRADE: &[&str] = &[
    "MarketName",
    "OrderType",
    "Quantity",
    "Rate",
    "TimeInEffect",
    "ConditionType",
    "Target",
];

impl Endpoint {
    /// Every catalogued operation
    pub const ALL: [Endpoint; 23] = [
        Self::GetMarkets,
        Self::GetCurrencies,
        Self::GetTicker,
        Self::GetMarketSummaries,
        Self::GetMarketSummary,
        Self::GetOrderbook,
        Self::GetMarketHistory,
        Self::GetCandles,
        Self::GetLatestCandle,
        Self::BuyLimit,
        Self::SellLimit,
        Self::TradeBuy,
        Self::TradeSell,
        Self::CancelOrder,
        Self::GetOpenOrders,
        Self::GetBalances,
        Self::GetBalance,
        Self::GetDepositAddress,
        Self::Withdraw,
        Self::GetOrderHistory,
        Self::GetOrder,
        Self::GetWithdrawalHistory,
        Self::GetDepositHistory,
    ];

    /// Operation name used in errors and logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetMarkets => "GetMarkets",
            Self::GetCurrencies => "GetCurrencies",
            Self::GetTicker => "GetTicker",
            Self::GetMarketSummaries => "GetMarketSummaries",
            Self::GetMarketSummary => "GetMarketSummary",
            Self::GetOrderbook => "GetOrderbook",
            Self::GetMarketHistory => "GetMarketHistory",
            Self::GetCandles => "GetCandles",
            Self::GetLatestCandle => "GetLatestCandle",
            Self::BuyLimit => "BuyLimit",
            Self::SellLimit => "SellLimit",
            Self::TradeBuy => "TradeBuy",
            Self::TradeSell => "TradeSell",
            Self::CancelOrder => "CancelOrder",
            Self::GetOpenOrders => "GetOpenOrders",
            Self::GetBalances => "GetBalances",
            Self::GetBalance => "GetBalance",
            Self::GetDepositAddress => "GetDepositAddress",
            Self::Withdraw => "Withdraw",
            Self::GetOrderHistory => "GetOrderHistory",
            Self::GetOrder => "GetOrder",
            Self::GetWithdrawalHistory => "GetWithdrawalHistory",
            Self::GetDepositHistory => "GetDepositHistory",
        }
    }

    /// Paths per API version
    pub fn spec(&self) -> EndpointSpec {
        match self {
            Self::GetMarkets => EndpointSpec::both("/public/getmarkets", "/pub/Markets/GetMarkets"),
            Self::GetCurrencies => {
                EndpointSpec::both("/public/getcurrencies", "/pub/Currencies/GetCurrencies")
            }
            Self::GetTicker => EndpointSpec::v1_1_only("/public/getticker"),
            Self::GetMarketSummaries => EndpointSpec::both(
                "/public/getmarketsummaries",
                "/pub/Market/GetMarketSummaries",
            ),
            Self::GetMarketSummary => {
                EndpointSpec::both("/public/getmarketsummary", "/pub/Market/GetMarketSummary")
            }
            Self::GetOrderbook => {
                EndpointSpec::both("/public/getorderbook", "/pub/Market/GetMarketOrderBook")
            }
            Self::GetMarketHistory => {
                EndpointSpec::both("/market/getmarkethistory", "/pub/Market/GetMarketHistory")
            }
            Self::GetCandles => EndpointSpec::v2_0_only("/pub/market/GetTicks"),
            Self::GetLatestCandle => EndpointSpec::v2_0_only("/pub/market/GetLatestTick"),
            Self::BuyLimit => EndpointSpec::v1_1_only("/market/buylimit"),
            Self::SellLimit => EndpointSpec::v1_1_only("/market/selllimit"),
            Self::TradeBuy => EndpointSpec::v2_0_only("/key/market/TradeBuy"),
            Self::TradeSell => EndpointSpec::v2_0_only("/key/market/TradeSell"),
            Self::CancelOrder => EndpointSpec::both("/market/cancel", "/key/market/TradeCancel"),
            Self::GetOpenOrders => {
                EndpointSpec::both("/market/getopenorders", "/key/market/GetOpenOrders")
            }
            Self::GetBalances => {
                EndpointSpec::both("/account/getbalances", "/key/balance/getbalances")
            }
            Self::GetBalance => EndpointSpec::both("/account/getbalance", "/key/balance/getbalance"),
            Self::GetDepositAddress => EndpointSpec::both(
                "/account/getdepositaddress",
                "/key/balance/getdepositaddress",
            ),
            Self::Withdraw => EndpointSpec::both("/account/withdraw", "/key/balance/withdrawcurrency"),
            Self::GetOrderHistory => {
                EndpointSpec::both("/account/getorderhistory", "/key/orders/GetOrderHistory")
            }
            Self::GetOrder => EndpointSpec::both("/account/getorder", "/key/orders/GetOrder"),
            Self::GetWithdrawalHistory => EndpointSpec::both(
                "/account/getwithdrawalhistory",
                "/key/balance/GetWithdrawalHistory",
            ),
            Self::GetDepositHistory => EndpointSpec::both(
                "/account/getdeposithistory",
                "/key/balance/GetDepositHistory",
            ),
        }
    }

    /// Whether the operation needs `apikey` and `nonce`
    pub fn protection(&self) -> ProtectionLevel {
        match self {
            Self::GetMarkets
            | Self::GetCurrencies
            | Self::GetTicker
            | Self::GetMarketSummaries
            | Self::GetMarketSummary
            | Self::GetOrderbook
            | Self::GetMarketHistory
            | Self::GetCandles
            | Self::GetLatestCandle => ProtectionLevel::Public,
            _ => ProtectionLevel::Private,
        }
    }

    /// Parameter keys the operation accepts
    pub fn params(&self) -> &'static [&'static str] {
        match self {
            Self::GetMarkets | Self::GetCurrencies | Self::GetMarketSummaries | Self::GetBalances => {
                &[]
            }
            Self::GetTicker | Self::GetMarketSummary | Self::GetMarketHistory => MARKET,
            Self::GetOpenOrders | Self::GetOrderHistory => MARKET,
            Self::GetOrderbook => &["market", "marketname", "type"],
            Self::GetCandles | Self::GetLatestCandle => CANDLE,
            Self::BuyLimit | Self::SellLimit => LIMIT_ORDER,
            Self::TradeBuy | Self::TradeSell => TRADE,
            Self::CancelOrder | Self::GetOrder => ORDER_ID,
            Self::GetBalance
            | Self::GetDepositAddress
            | Self::GetWithdrawalHistory
            | Self::GetDepositHistory => CURRENCY,
            Self::Withdraw => &[
                "currency",
                "currencyname",
                "quantity",
                "address",
                "paymentid",
            ],
        }
    }

    /// Path for `version`, or `UnsupportedOperation` if there is none
    pub fn resolve(&self, version: ApiVersion) -> RestResult<&'static str> {
        self.spec()
            .path(version)
            .ok_or(RestError::UnsupportedOperation {
                operation: self.name(),
                version,
            })
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_endpoint_has_a_path() {
        for endpoint in Endpoint::ALL {
            let spec = endpoint.spec();
            assert!(
                spec.supports(ApiVersion::V1_1) || spec.supports(ApiVersion::V2_0),
                "{} has no path in any version",
                endpoint
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Endpoint::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_paths_are_rooted() {
        for endpoint in Endpoint::ALL {
            for version in [ApiVersion::V1_1, ApiVersion::V2_0] {
                if let Some(path) = endpoint.spec().path(version) {
                    assert!(path.starts_with('/'), "{} {}", endpoint, path);
                    assert!(!path.contains('?'));
                }
            }
        }
    }

    #[test]
    fn test_protection_split() {
        assert_eq!(Endpoint::GetMarkets.protection(), ProtectionLevel::Public);
        assert_eq!(Endpoint::GetCandles.protection(), ProtectionLevel::Public);
        assert_eq!(Endpoint::GetBalances.protection(), ProtectionLevel::Private);
        assert_eq!(Endpoint::TradeBuy.protection(), ProtectionLevel::Private);

        // v2.0 keeps every authenticated path under /key/
        for endpoint in Endpoint::ALL {
            if let Some(path) = endpoint.spec().path(ApiVersion::V2_0) {
                let is_key_path = path.starts_with("/key/");
                assert_eq!(is_key_path, endpoint.protection().is_private(), "{}", endpoint);
            }
        }
    }

    #[test]
    fn test_resolve_unsupported() {
        assert_eq!(
            Endpoint::GetTicker.resolve(ApiVersion::V1_1).unwrap(),
            "/public/getticker"
        );

        let err = Endpoint::GetTicker.resolve(ApiVersion::V2_0).unwrap_err();
        assert!(matches!(
            err,
            RestError::UnsupportedOperation {
                operation: "GetTicker",
                version: ApiVersion::V2_0
            }
        ));

        assert!(Endpoint::GetCandles.resolve(ApiVersion::V1_1).is_err());
        assert!(Endpoint::TradeBuy.resolve(ApiVersion::V1_1).is_err());
        assert!(Endpoint::BuyLimit.resolve(ApiVersion::V2_0).is_err());
    }
}
