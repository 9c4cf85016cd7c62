//! Error types for credential handling

/// Errors that can occur while loading, storing or decrypting credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Reading or writing the secrets file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Secrets file is not valid JSON of the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// The cipher rejected the input
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Encrypted credentials were used but no cipher was configured
    #[error("credential encryption is unavailable: no CredentialCipher configured")]
    CipherUnavailable,
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type for credential operations
pub type AuthResult<T> = Result<T, AuthError>;
