//! API version, protection level, and exchange enums

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bittrex API version
///
/// Selects both the base URL and the path used for each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ApiVersion {
    /// Legacy v1.1 API
    #[serde(rename = "v1.1")]
    #[default]
    V1_1,
    /// v2.0 API
    #[serde(rename = "v2.0")]
    V2_0,
}

impl ApiVersion {
    /// Returns the version tag as it appears in request URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1_1 => "v1.1",
            Self::V2_0 => "v2.0",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown API version string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown API version: {0} (supported: v1.1, v2.0)")]
pub struct ParseVersionError(pub String);

impl FromStr for ApiVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('v').unwrap_or(s) {
            "1.1" => Ok(Self::V1_1),
            "2.0" => Ok(Self::V2_0),
            _ => Err(ParseVersionError(s.to_string())),
        }
    }
}

/// Whether an endpoint requires authenticated access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtectionLevel {
    /// No `apikey`/`nonce` parameters are sent
    Public,
    /// `apikey` and `nonce` are prepended to the query string
    Private,
}

impl ProtectionLevel {
    /// Returns true for authenticated endpoints
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// Which side of the order book to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderbookType {
    /// Buy orders only
    Buy,
    /// Sell orders only
    Sell,
    /// Both sides
    #[default]
    Both,
}

impl OrderbookType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Both => "both",
        }
    }
}

/// Order types accepted by the v2.0 trade endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order
    Market,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
        }
    }
}

/// Time in force for v2.0 orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInEffect {
    /// Rests on the book until cancelled
    #[default]
    GoodTilCancelled,
    /// Fill what is possible now, cancel the rest
    ImmediateOrCancel,
    /// Fill completely or cancel
    FillOrKill,
}

impl TimeInEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoodTilCancelled => "GOOD_TIL_CANCELLED",
            Self::ImmediateOrCancel => "IMMEDIATE_OR_CANCEL",
            Self::FillOrKill => "FILL_OR_KILL",
        }
    }
}

/// Trigger condition for v2.0 conditional orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    /// Unconditional
    #[default]
    None,
    /// Trigger when price rises above target
    GreaterThan,
    /// Trigger when price falls below target
    LessThan,
    /// Fixed stop loss
    StopLossFixed,
    /// Percentage stop loss
    StopLossPercentage,
}

impl ConditionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::GreaterThan => "GREATER_THAN",
            Self::LessThan => "LESS_THAN",
            Self::StopLossFixed => "STOP_LOSS_FIXED",
            Self::StopLossPercentage => "STOP_LOSS_PERCENTAGE",
        }
    }
}

/// Candle interval for the v2.0 tick endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TickInterval {
    /// 1 minute
    OneMin,
    /// 5 minutes
    FiveMin,
    /// 30 minutes
    ThirtyMin,
    /// 1 hour
    Hour,
    /// 1 day
    Day,
}

impl TickInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMin => "oneMin",
            Self::FiveMin => "fiveMin",
            Self::ThirtyMin => "thirtyMin",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_round_trip() {
        assert_eq!("v1.1".parse::<ApiVersion>().unwrap(), ApiVersion::V1_1);
        assert_eq!("2.0".parse::<ApiVersion>().unwrap(), ApiVersion::V2_0);
        assert_eq!(ApiVersion::V2_0.to_string(), "v2.0");
        assert!("v3.0".parse::<ApiVersion>().is_err());
        assert!("vv1.1".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_version_serde_uses_url_tag() {
        let json = serde_json::to_string(&ApiVersion::V1_1).unwrap();
        assert_eq!(json, r#""v1.1""#);
    }

    #[test]
    fn test_wire_strings_match_serde() {
        let json = serde_json::to_string(&TimeInEffect::ImmediateOrCancel).unwrap();
        assert_eq!(json, format!("\"{}\"", TimeInEffect::ImmediateOrCancel.as_str()));

        let json = serde_json::to_string(&ConditionType::StopLossPercentage).unwrap();
        assert_eq!(json, format!("\"{}\"", ConditionType::StopLossPercentage.as_str()));

        let json = serde_json::to_string(&TickInterval::ThirtyMin).unwrap();
        assert_eq!(json, r#""thirtyMin""#);
    }

    #[test]
    fn test_protection_level() {
        assert!(ProtectionLevel::Private.is_private());
        assert!(!ProtectionLevel::Public.is_private());
    }
}
