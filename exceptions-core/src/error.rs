//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Two items in one snapshot share an identity
    #[error("Duplicate exception identity: {0}")]
    DuplicateIdentity(String),

    /// The host could not be derived from the given input
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether the error comes from bad input rather than a broken store.
    ///
    /// Log at `warn` when `true`, at `error` when `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidHost(_) | Self::DuplicateIdentity(_) => true,
            Self::StorageError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_expected() {
        assert!(CoreError::InvalidHost(String::new()).is_expected());
        assert!(CoreError::DuplicateIdentity("example.com".to_string()).is_expected());
        assert!(!CoreError::StorageError("disk full".to_string()).is_expected());
    }

    #[test]
    fn error_serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::InvalidHost("::".to_string())).unwrap();
        assert_eq!(json["code"], "InvalidHost");
        assert_eq!(json["details"], "::");
    }
}
