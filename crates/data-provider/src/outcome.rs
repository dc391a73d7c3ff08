//! Results of executing a query and of authenticating an endpoint

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Classified result of one executed query
///
/// `Success` carries the decoded response body, `Failure` the raw body of a
/// response the remote side rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Value),
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The payload as JSON; failure text becomes a JSON string
    pub fn payload(&self) -> Value {
        match self {
            Self::Success(v) => v.clone(),
            Self::Failure(text) => Value::String(text.clone()),
        }
    }

    /// Split into the `(success, payload)` pair
    pub fn into_pair(self) -> (bool, Value) {
        match self {
            Self::Success(v) => (true, v),
            Self::Failure(text) => (false, Value::String(text)),
        }
    }

    /// Deserialize a success payload into a typed response
    ///
    /// Returns `Ok(None)` for a failure outcome.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match self {
            Self::Success(v) => Ok(Some(T::deserialize(v)?)),
            Self::Failure(_) => Ok(None),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(v) => write!(f, "(true, {})", v),
            Self::Failure(text) => write!(f, "(false, {})", text),
        }
    }
}

/// Result of an authentication attempt
///
/// An ordinary rejection is a value, not an error. Credentials are logged
/// through their `Display` impl, which must not reveal secrets.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome<C> {
    Authenticated(C),
    Rejected(String),
}

impl<C> AuthOutcome<C> {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Renders the text recorded in the provider log for this attempt
impl<C: fmt::Display> fmt::Display for AuthOutcome<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated(credential) => fmt::Display::fmt(credential, f),
            Self::Rejected(msg) => f.write_str(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_success_pair() {
        let outcome = Outcome::Success(json!({"key": "value"}));
        assert!(outcome.is_success());
        assert_eq!(outcome.into_pair(), (true, json!({"key": "value"})));
    }

    #[test]
    fn test_failure_pair() {
        let outcome = Outcome::Failure("not found".to_string());
        assert!(!outcome.is_success());
        assert_eq!(outcome.payload(), json!("not found"));
        assert_eq!(outcome.into_pair(), (false, json!("not found")));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Outcome::Success(json!({"key": "value"})).to_string(),
            r#"(true, {"key":"value"})"#
        );
        assert_eq!(
            Outcome::Failure("not found".to_string()).to_string(),
            "(false, not found)"
        );
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Suggestion {
        key: u64,
    }

    #[test]
    fn test_decode_success() {
        let outcome = Outcome::Success(json!({"key": 5284517}));
        let decoded: Option<Suggestion> = outcome.decode().unwrap();
        assert_eq!(decoded, Some(Suggestion { key: 5284517 }));
    }

    #[test]
    fn test_decode_failure_is_none() {
        let outcome = Outcome::Failure("oops".to_string());
        let decoded: Option<Suggestion> = outcome.decode().unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let outcome = Outcome::Success(json!({"key": "not a number"}));
        assert!(outcome.decode::<Suggestion>().is_err());
    }

    #[test]
    fn test_auth_display() {
        let ok: AuthOutcome<String> = AuthOutcome::Authenticated("token for alice".to_string());
        assert!(ok.is_authenticated());
        assert_eq!(ok.to_string(), "token for alice");

        let rejected: AuthOutcome<String> = AuthOutcome::Rejected("bad password".to_string());
        assert!(!rejected.is_authenticated());
        assert_eq!(rejected.to_string(), "bad password");
    }
}
