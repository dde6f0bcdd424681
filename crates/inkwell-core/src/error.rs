//! Error types for the Inkwell client.

use thiserror::Error;

/// Failure reported by a [`BlogApi`](crate::api::BlogApi) implementation.
///
/// Variants follow the backend's observable behaviour rather than the
/// transport: callers decide how much of the distinction reaches the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Login rejected by the backend.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Signup rejected because the email is already registered.
    #[error("Email already in use")]
    EmailInUse,

    /// Backend rejected the submitted fields.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// True for failures that happened before the backend could answer.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// A shared error type for the Inkwell crates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InkwellError {
    /// Remote API failure
    #[error(transparent)]
    Api(#[from] ApiError),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Session persistence error
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl InkwellError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for InkwellError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for InkwellError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for InkwellError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, InkwellError>`.
pub type Result<T> = std::result::Result<T, InkwellError>;

/// A type alias for `Result<T, ApiError>`.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
