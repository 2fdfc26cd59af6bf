//! # Error Handling
//!
//! Error types for Amity Core.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                     │
//! │  │                                                                      │
//! │  ├── Session Errors                                                    │
//! │  │   └── NoActiveSession       - Operation needs a logged-in member    │
//! │  │                                                                      │
//! │  ├── Configuration Errors                                              │
//! │  │   └── InvalidConfig         - Rejected network configuration        │
//! │  │                                                                      │
//! │  └── Internal Errors                                                   │
//! │      ├── SerializationError    - JSON encoding failed                  │
//! │      └── DeserializationError  - JSON decoding failed                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid references (an empty identity, an identity nobody has joined
//! with, rejecting a request that was never sent) are not errors. Those
//! operations leave the network untouched and report `false` or `None`.

use thiserror::Error;

/// Result type alias for Amity Core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Amity Core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ========================================================================
    // Session Errors (100-199)
    // ========================================================================

    /// A session-scoped operation was called before anyone logged in
    #[error("No active session. Log in as a member first.")]
    NoActiveSession,

    // ========================================================================
    // Configuration Errors (400-499)
    // ========================================================================

    /// The network configuration was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Internal Errors (900-999)
    // ========================================================================

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl Error {
    /// Numeric error code
    ///
    /// - 100-199: Session
    /// - 400-499: Configuration
    /// - 900-999: Internal
    pub fn code(&self) -> i32 {
        match self {
            Error::NoActiveSession => 100,
            Error::InvalidConfig(_) => 400,
            Error::SerializationError(_) => 902,
            Error::DeserializationError(_) => 903,
        }
    }

    /// Check if this error requires user action
    pub fn requires_user_action(&self) -> bool {
        matches!(self, Error::NoActiveSession | Error::InvalidConfig(_))
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            Error::DeserializationError(err.to_string())
        } else {
            Error::SerializationError(err.to_string())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::NoActiveSession.code(), 100);
        assert_eq!(Error::InvalidConfig("test".into()).code(), 400);
        assert_eq!(Error::SerializationError("test".into()).code(), 902);
        assert_eq!(Error::DeserializationError("test".into()).code(), 903);
    }

    #[test]
    fn test_requires_user_action() {
        assert!(Error::NoActiveSession.requires_user_action());
        assert!(Error::InvalidConfig("zero".into()).requires_user_action());
        assert!(!Error::SerializationError("test".into()).requires_user_action());
    }

    #[test]
    fn test_json_error_conversion() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();

        assert!(matches!(err, Error::DeserializationError(_)));
        assert_eq!(err.code(), 903);
    }

    #[test]
    fn test_error_messages() {
        assert!(Error::NoActiveSession.to_string().contains("Log in"));
        assert!(Error::InvalidConfig("bad threshold".into())
            .to_string()
            .contains("bad threshold"));
    }
}
