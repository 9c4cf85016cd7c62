//! At-rest storage of API credentials
//!
//! Credentials can be written to and read from a small JSON file:
//!
//! ```json
//! { "key": "12341253456345", "secret": "3345745634234534" }
//! ```
//!
//! Encryption is optional. The library ships no cipher of its own; callers
//! that want encrypted files supply a [`CredentialCipher`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::AuthResult;

/// Reversible transform applied to the key and secret before they hit disk
pub trait CredentialCipher: Send + Sync {
    /// Encrypt a plaintext value into a storable string
    fn encrypt(&self, plaintext: &str) -> AuthResult<String>;

    /// Decrypt a value produced by [`CredentialCipher::encrypt`]
    fn decrypt(&self, ciphertext: &str) -> AuthResult<String>;
}

/// Contents of a `secrets.json` file
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretsFile {
    /// API key, plaintext or encrypted
    pub key: String,
    /// API secret, plaintext or encrypted
    pub secret: String,
}

impl SecretsFile {
    /// Default file name
    pub const DEFAULT_PATH: &'static str = "secrets.json";

    /// Plaintext secrets for the given credentials
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            key: credentials.api_key().to_string(),
            secret: credentials.api_secret().to_string(),
        }
    }

    /// Encrypt both halves of the credentials with `cipher`
    pub fn encrypt(credentials: &Credentials, cipher: &dyn CredentialCipher) -> AuthResult<Self> {
        Ok(Self {
            key: cipher.encrypt(credentials.api_key())?,
            secret: cipher.encrypt(credentials.api_secret())?,
        })
    }

    /// Read a secrets file
    pub fn load(path: impl AsRef<Path>) -> AuthResult<Self> {
        let path = path.as_ref();
        debug!("Loading secrets from {}", path.display());
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this secrets file, replacing any existing one
    pub fn save(&self, path: impl AsRef<Path>) -> AuthResult<()> {
        let path = path.as_ref();
        debug!("Writing secrets to {}", path.display());
        fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }

    /// Treat the stored values as plaintext credentials
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.key, self.secret)
    }

    /// Decrypt the stored values into credentials
    pub fn decrypt(&self, cipher: &dyn CredentialCipher) -> AuthResult<Credentials> {
        Ok(Credentials::new(
            cipher.decrypt(&self.key)?,
            cipher.decrypt(&self.secret)?,
        ))
    }
}

impl std::fmt::Debug for SecretsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsFile")
            .field("key", &"[REDACTED]")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
