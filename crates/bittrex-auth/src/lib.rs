//! Credentials and request signing for the Bittrex API
//!
//! Bittrex authenticates a request by signing the complete request URL,
//! query string included, with HMAC-SHA512 and sending the lowercase hex
//! digest in the `apisign` header.
//!
//! # Example
//!
//! ```
//! use bittrex_auth::{sign, Credentials};
//!
//! let creds = Credentials::new("AAA", "BBB");
//! let url = "https://bittrex.com/api/v1.1/account/getbalances?apikey=AAA&nonce=1&";
//!
//! let signature = creds.sign(url);
//! assert_eq!(signature, sign("BBB", url));
//! assert_eq!(signature.len(), 128);
//! ```
//!
//! Credentials can be kept on disk in a `secrets.json` file, optionally
//! encrypted with a caller-supplied [`CredentialCipher`].

mod cipher;
mod credentials;
mod error;

pub use cipher::{CredentialCipher, SecretsFile};
pub use credentials::{generate_nonce, sign, Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
