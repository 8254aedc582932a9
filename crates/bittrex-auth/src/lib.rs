//! Authentication for the Bittrex v2.0 REST API
//!
//! Private (`key/`) endpoints need three things on every request: the
//! account key and a fresh nonce in the query string, and an `apisign`
//! header holding the HMAC-SHA512 of the complete URL keyed by the account
//! secret.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_auth::{Credentials, NonceGenerator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!     let nonces = NonceGenerator::new();
//!
//!     if let Some(signer) = creds.signer() {
//!         let url = format!(
//!             "https://bittrex.com/Api/v2.0/key/orders/getorderhistory?nonce={}&apikey={}",
//!             nonces.next_nonce(),
//!             signer.api_key(),
//!         );
//!         println!("apisign: {}", signer.sign(&url)?);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod nonce;

pub use credentials::{sign_url, Credentials, RequestSigner, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use nonce::NonceGenerator;
