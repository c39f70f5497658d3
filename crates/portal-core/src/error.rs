//! Error types for the portal client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire portal client.
///
/// Gateway failures are split the way the UI has to treat them: an
/// unauthenticated response is never shown in-page (it becomes a redirect),
/// every other server rejection carries the server's own message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortalError {
    /// The server answered 401. Callers must redirect to `login_path`.
    #[error("Unauthenticated: redirecting to {login_path}")]
    Unauthenticated { login_path: String },

    /// Any other non-2xx response. `message` is the server's text, verbatim.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// Connection, DNS or body transfer failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Client-side access check failed for a module page
    #[error("No permission for module '{module}'")]
    Forbidden { module: String },

    /// Form input rejected before any network call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortalError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Unauthenticated error pointing at the given login page
    pub fn unauthenticated(login_path: impl Into<String>) -> Self {
        Self::Unauthenticated {
            login_path: login_path.into(),
        }
    }

    /// Creates a Request error from a status code and server message
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Forbidden error for a module page
    pub fn forbidden(module: impl Into<String>) -> Self {
        Self::Forbidden {
            module: module.into(),
        }
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an Unauthenticated error
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated { .. })
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the login page to navigate to, if this error demands a redirect.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated { login_path } => Some(login_path),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PortalError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PortalError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Errors bubbling up from `anyhow` call sites become `Internal`.
impl From<anyhow::Error> for PortalError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, PortalError>`.
pub type Result<T> = std::result::Result<T, PortalError>;
