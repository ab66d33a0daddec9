//! Portal Errors
//!
//! Store reducers never fail; only validation and persistence return errors.

/// Common result type for fallible portal operations
pub type PortalResult<T> = Result<T, PortalError>;

#[derive(Debug, Clone, PartialEq)]
pub enum PortalError {
    /// User input rejected by a form, message is shown inline
    Validation(String),
    /// Local storage unavailable or refused the write
    Storage(String),
    /// Persisted blob could not be encoded or decoded
    Serialization(String),
}

impl PortalError {
    /// Message to show next to a form
    pub fn message(&self) -> &str {
        match self {
            PortalError::Validation(msg)
            | PortalError::Storage(msg)
            | PortalError::Serialization(msg) => msg,
        }
    }
}

impl std::fmt::Display for PortalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortalError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            PortalError::Storage(msg) => write!(f, "Storage error: {}", msg),
            PortalError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PortalError {}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}
