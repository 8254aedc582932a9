//! Error types for authentication operations

/// Errors that can occur while loading credentials or signing requests
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Secrets file could not be read
    #[error("Failed to read secrets file {path}: {source}")]
    SecretsFile {
        /// Path that was opened
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Secrets file is not valid JSON
    #[error("Invalid secrets file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
