//! Error types for the gbif-query tool

use std::fmt;

#[derive(Debug)]
pub enum QueryToolError {
    /// Provider error
    Provider(data_provider::ProviderError),
    /// Configuration or usage error
    Config(String),
    /// Failed to render the payload
    Output(serde_json::Error),
}

impl fmt::Display for QueryToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(e) => write!(f, "{}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Output(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for QueryToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Provider(e) => Some(e),
            Self::Config(_) => None,
            Self::Output(e) => Some(e),
        }
    }
}

impl From<data_provider::ProviderError> for QueryToolError {
    fn from(e: data_provider::ProviderError) -> Self {
        Self::Provider(e)
    }
}

impl From<serde_json::Error> for QueryToolError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(e)
    }
}

impl From<tracing_subscriber::filter::ParseError> for QueryToolError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QueryToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = QueryToolError::Config("unknown endpoint 'literature'".to_string());
        assert_eq!(
            format!("{}", err),
            "Configuration error: unknown endpoint 'literature'"
        );
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let err: QueryToolError =
            data_provider::ProviderError::AuthenticationFailed("no credentials".to_string()).into();
        assert_eq!(format!("{}", err), "Authentication failed: no credentials");
    }
}
