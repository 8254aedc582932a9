//! Account credentials for the Bittrex API
//!
//! Implements the HMAC-SHA512 URL signing used by Bittrex's private (`key/`)
//! endpoints.
//!
//! # Security
//!
//! The account secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::Sha512;
use std::path::Path;
use tracing::debug;

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// Environment variable holding the account key
pub const API_KEY_ENV: &str = "BITTREX_API_KEY";

/// Environment variable holding the account secret
pub const API_SECRET_ENV: &str = "BITTREX_API_SECRET";

/// API credentials for authenticated requests
///
/// Key and secret are independently optional. A client holding neither can
/// only reach public commands; a client holding just one of them is accepted
/// but every private command it issues fails before touching the network.
///
/// Empty strings are treated as absent.
pub struct Credentials {
    /// Account key (public)
    api_key: Option<String>,
    /// Account secret (zeroized on drop)
    api_secret: Option<SecretString>,
}

/// Layout of a JSON secrets file: `{"key": "...", "secret": "..."}`
#[derive(Deserialize)]
struct SecretsFile {
    key: Option<String>,
    secret: Option<String>,
}

impl Credentials {
    /// Create credentials holding both an account key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::anonymous()
            .with_api_key(api_key)
            .with_api_secret(api_secret)
    }

    /// Credentials with neither key nor secret (public commands only)
    pub fn anonymous() -> Self {
        Self {
            api_key: None,
            api_secret: None,
        }
    }

    /// Set the account key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into()).filter(|k| !k.is_empty());
        self
    }

    /// Set the account secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        let api_secret: String = api_secret.into();
        self.api_secret = if api_secret.is_empty() {
            None
        } else {
            Some(SecretString::from(api_secret))
        };
        self
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITTREX_API_KEY` and `BITTREX_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// Load credentials from a JSON secrets file
    ///
    /// The file holds an object with optional `key` and `secret` members.
    pub fn from_json_file(path: impl AsRef<Path>) -> AuthResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| AuthError::SecretsFile {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Loading credentials from {}", path.display());
        Self::from_json(&raw)
    }

    /// Parse credentials from the JSON secrets layout
    pub fn from_json(raw: &str) -> AuthResult<Self> {
        let file: SecretsFile = serde_json::from_str(raw)?;
        let mut creds = Self::anonymous();
        if let Some(key) = file.key {
            creds = creds.with_api_key(key);
        }
        if let Some(secret) = file.secret {
            creds = creds.with_api_secret(secret);
        }
        if !creds.is_complete() {
            debug!("Secrets file is partial; private endpoints will be refused");
        }
        Ok(creds)
    }

    /// Get the account key, if any
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Whether an account secret is present
    pub fn has_api_secret(&self) -> bool {
        self.api_secret.is_some()
    }

    /// Whether both key and secret are present
    pub fn is_complete(&self) -> bool {
        self.api_key.is_some() && self.api_secret.is_some()
    }

    /// Borrow a signer for private requests
    ///
    /// Returns `None` unless both the key and the secret are present.
    pub fn signer(&self) -> Option<RequestSigner<'_>> {
        match (&self.api_key, &self.api_secret) {
            (Some(api_key), Some(api_secret)) => Some(RequestSigner { api_key, api_secret }),
            _ => None,
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates a new secret box with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: self
                .api_secret
                .as_ref()
                .map(|s| SecretString::from(s.expose_secret().to_owned())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = self
            .api_key
            .as_ref()
            .map(|k| format!("{}...", &k[..k.char_indices().nth(8).map_or(k.len(), |(i, _)| i)]));
        f.debug_struct("Credentials")
            .field("api_key", &api_key)
            .field(
                "api_secret",
                &self.api_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Compute the `apisign` value for a fully assembled request URL
///
/// HMAC-SHA512 over the URL bytes, keyed by the account secret, rendered as
/// lowercase hex.
pub fn sign_url(secret: &[u8], url: &str) -> AuthResult<String> {
    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
    mac.update(url.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Signer for private requests, borrowed from complete [`Credentials`]
pub struct RequestSigner<'a> {
    api_key: &'a str,
    api_secret: &'a SecretString,
}

impl<'a> RequestSigner<'a> {
    /// Get the account key sent as the `apikey` query parameter
    pub fn api_key(&self) -> &'a str {
        self.api_key
    }

    /// Sign the complete request URL (query string included)
    pub fn sign(&self, url: &str) -> AuthResult<String> {
        sign_url(self.api_secret.expose_secret().as_bytes(), url)
    }
}

impl std::fmt::Debug for RequestSigner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
