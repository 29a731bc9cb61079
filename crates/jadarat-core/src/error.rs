//! Error types for the Jadarat admin console.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of characters a new account password must have.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Client-side form validation failures.
///
/// These never reach the backend. Each variant maps to a translation key so the
/// form screens can render the message in the active language.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Returns the translation key used to display this error.
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::PasswordTooShort { .. } => "signup.passwordTooShort",
            Self::PasswordMismatch => "signup.passwordMismatch",
        }
    }
}

/// An authentication failure reported by the backend.
///
/// The message is opaque and displayed verbatim; it is never translated or
/// reinterpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A shared error type for the whole console core.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum JadaratError {
    /// Local form validation failure
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Backend-reported authentication failure
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A read against the backend failed
    #[error("Failed to fetch {resource}: {message}")]
    DataFetch {
        resource: String,
        message: String,
    },

    /// Unknown setting key or a value of the wrong kind
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JadaratError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn data_fetch(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataFetch {
            resource: resource.into(),
            message: message.into(),
        }
    }

    pub fn invalid_setting(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    pub fn is_data_fetch(&self) -> bool {
        matches!(self, Self::DataFetch { .. })
    }

    pub fn is_invalid_setting(&self) -> bool {
        matches!(self, Self::InvalidSetting { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for JadaratError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for JadaratError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for JadaratError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for JadaratError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for JadaratError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, JadaratError>`.
pub type Result<T> = std::result::Result<T, JadaratError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_displays_backend_message_verbatim() {
        let err = AuthError::new("Invalid login credentials");
        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[test]
    fn test_validation_error_translation_keys() {
        assert_eq!(
            ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH
            }
            .translation_key(),
            "signup.passwordTooShort"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.translation_key(),
            "signup.passwordMismatch"
        );
    }

    #[test]
    fn test_from_conversions() {
        let err: JadaratError = ValidationError::PasswordMismatch.into();
        assert!(err.is_validation());

        let err: JadaratError = AuthError::new("nope").into();
        assert!(err.is_auth());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: JadaratError = io.into();
        assert!(matches!(err, JadaratError::Io { .. }));
    }

    #[test]
    fn test_data_fetch_helper() {
        let err = JadaratError::data_fetch("organizations", "timeout");
        assert!(err.is_data_fetch());
        assert_eq!(err.to_string(), "Failed to fetch organizations: timeout");
    }
}
