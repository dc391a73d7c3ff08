//! Error types for the provider query pipeline

use std::fmt;

/// Errors raised while constructing, authenticating, executing or logging a query.
///
/// An ordinary non-2xx response is not an error: it comes back as
/// [`Outcome::Failure`](crate::Outcome::Failure).
#[derive(Debug)]
pub enum ProviderError {
    /// Missing or malformed arguments at query construction time
    InvalidArgument(String),
    /// Credentials were rejected or are not configured
    AuthenticationFailed(String),
    /// The request never received a response (timeout, DNS, connection refused)
    Transport(Box<dyn std::error::Error + Send + Sync>),
    /// A response body could not be decoded as JSON
    Decode(serde_json::Error),
    /// A value handed to the logging sink could not be rendered as a string
    Logging(String),
    /// The endpoint does not offer the requested capability
    NotSupported(String),
    /// The endpoint exists but has no working implementation
    NotImplemented(String),
    /// Configuration error
    Config(String),
}

impl ProviderError {
    /// Wrap a transport-level fault
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }

    /// Whether the error happened before any response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::AuthenticationFailed(msg) => write!(f, "Authentication failed: {}", msg),
            Self::Transport(e) => write!(f, "Transport error: {}", e),
            Self::Decode(e) => write!(f, "JSON decode error: {}", e),
            Self::Logging(msg) => write!(f, "Logging error: {}", msg),
            Self::NotSupported(msg) => write!(f, "Not supported: {}", msg),
            Self::NotImplemented(msg) => write!(f, "Not implemented: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e.as_ref()),
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_argument_display() {
        let err = ProviderError::InvalidArgument("empty subendpoint".to_string());
        assert_eq!(format!("{}", err), "Invalid argument: empty subendpoint");
    }

    #[test]
    fn test_authentication_failed_display() {
        let err = ProviderError::AuthenticationFailed("no credentials".to_string());
        assert_eq!(format!("{}", err), "Authentication failed: no credentials");
    }

    #[test]
    fn test_transport_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline elapsed");
        let err = ProviderError::transport(io);
        assert!(err.is_transport());
        assert!(format!("{}", err).contains("deadline elapsed"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_decode_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ProviderError = parse_err.into();
        assert!(matches!(err, ProviderError::Decode(_)));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_error_is_debug() {
        let err = ProviderError::NotImplemented("maps".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NotImplemented"));
    }
}
