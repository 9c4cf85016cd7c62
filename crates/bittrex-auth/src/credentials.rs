//! Authentication credentials for the Bittrex API
//!
//! Implements the HMAC-SHA512 URL signature required by private endpoints.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;
use std::sync::atomic::{AtomicU64, Ordering};

type HmacSha512 = Hmac<Sha512>;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BITTREX_API_KEY";

/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "BITTREX_API_SECRET";

/// Highest nonce handed out so far, keeps nonces non-decreasing if the wall clock steps back
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// API credentials for authenticated requests
///
/// Either half may be empty. Nothing is validated locally; the server rejects
/// bad keys with `success: false`.
pub struct Credentials {
    /// API key (public, sent in the query string)
    api_key: String,
    /// API secret (zeroized on drop)
    api_secret: SecretString,
}

impl Credentials {
    /// Create credentials from an API key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Credentials with an empty key and secret, enough for public endpoints
    pub fn anonymous() -> Self {
        Self::new(String::new(), String::new())
    }

    /// Create credentials from possibly-missing parts
    ///
    /// A missing key or secret becomes the empty string.
    pub fn from_parts(api_key: Option<String>, api_secret: Option<String>) -> Self {
        Self::new(api_key.unwrap_or_default(), api_secret.unwrap_or_default())
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITTREX_API_KEY` and `BITTREX_API_SECRET`. Unset variables are
    /// treated as empty, so public endpoints keep working.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok();
        let api_secret = std::env::var(API_SECRET_ENV).ok();

        if api_key.is_none() || api_secret.is_none() {
            tracing::debug!("Bittrex credentials not fully set in environment");
        }

        Self::from_parts(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns true if both the key and the secret are non-empty
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.expose_secret().is_empty()
    }

    /// Sign a fully assembled request URL with this secret
    pub fn sign(&self, url: &str) -> String {
        sign(self.api_secret.expose_secret(), url)
    }

    pub(crate) fn api_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretString with same content)
    fn clone(&self) -> Self {
        Self::new(self.api_key.clone(), self.api_secret.expose_secret().to_string())
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Sign a request URL for Bittrex's API
///
/// HMAC-SHA512 keyed by the UTF-8 bytes of `secret` over the UTF-8 bytes of
/// `url`, returned as 128 lowercase hex characters. An empty secret is a
/// valid (empty) key.
pub fn sign(secret: &str, url: &str) -> String {
    let mut mac =
        HmacSha512::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(url.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Generate the nonce for a request
///
/// Current Unix time in milliseconds. Successive calls within one process
/// never go backwards.
pub fn generate_nonce() -> String {
    let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
    let previous = LAST_NONCE.fetch_max(now, Ordering::SeqCst);
    previous.max(now).to_string()
}
