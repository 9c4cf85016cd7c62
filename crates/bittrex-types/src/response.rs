//! Response envelope returned by every Bittrex endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard Bittrex response wrapper
///
/// Application-level failures are reported with `success == false` and a
/// human-readable `message`, not through HTTP status codes. The `result`
/// payload is left as raw JSON because its shape differs per endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the call succeeded
    pub success: bool,
    /// Error or informational message (empty on success)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// Endpoint-specific payload
    #[serde(default)]
    pub result: Value,
}

impl ApiResponse {
    /// Build a successful response around a payload
    pub fn ok(result: Value) -> Self {
        Self {
            success: true,
            message: String::new(),
            result,
        }
    }

    /// Build a failed response with the given message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            result: Value::Null,
        }
    }

    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the payload, or the server's message if the call failed
    pub fn into_result(self) -> Result<Value, String> {
        if self.success {
            Ok(self.result)
        } else {
            Err(self.message)
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success() {
        let raw = r#"{"success":true,"message":"","result":[{"MarketName":"BTC-LTC"}]}"#;
        let response: ApiResponse = serde_json::from_str(raw).unwrap();

        assert!(response.is_success());
        assert_eq!(response.result[0]["MarketName"], "BTC-LTC");
    }

    #[test]
    fn test_parse_failure_with_null_result() {
        let raw = r#"{"success":false,"message":"APIKEY_INVALID","result":null}"#;
        let response: ApiResponse = serde_json::from_str(raw).unwrap();

        assert!(!response.is_success());
        assert_eq!(response.into_result(), Err("APIKEY_INVALID".to_string()));
    }

    #[test]
    fn test_missing_fields_default() {
        let response: ApiResponse = serde_json::from_str(r#"{"success":true,"message":null}"#).unwrap();
        assert_eq!(response.message, "");
        assert_eq!(response.result, Value::Null);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(ApiResponse::ok(json!([1, 2])).into_result(), Ok(json!([1, 2])));
        assert!(!ApiResponse::failure("INVALID_MARKET").success);
    }
}
