//! Error types for REST API operations

use bittrex_auth::AuthError;

/// Errors that can occur during REST API operations
///
/// Note that an envelope with `success: false` is *not* an error: the
/// exchange uses that flag for informational states too, so the decoded
/// envelope is handed back and the caller decides.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Command is not in the registry; nothing was sent
    #[error("Invalid command: {command}")]
    InvalidCommand {
        /// Command name as given by the caller
        command: String,
    },

    /// Missing key or secret for a private command; nothing was sent
    #[error("Authentication required for this endpoint (key and secret needed)")]
    AuthRequired,

    /// The exchange answered with a status other than 200
    #[error("Unexpected HTTP status: {status}")]
    BadStatus {
        /// Numeric HTTP status code
        status: u16,
    },

    /// Timeout or connection-level failure, passed through untouched
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body of a 200 response did not decode into the expected shape
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Credential loading or signing failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Check if the transport gave up waiting for the exchange
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Check if the exchange could not be reached at all
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }

    /// Check if the failure happened below HTTP (no answer received)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status carried by a [`RestError::BadStatus`]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Check if the error was raised before any network I/O
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidCommand { .. }
                | Self::AuthRequired
                | Self::InvalidParameter(_)
                | Self::Auth(_)
        )
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
