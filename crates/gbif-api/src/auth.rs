//! HTTP Basic credentials

use std::fmt;

/// Username and password sent as HTTP Basic authentication
///
/// Neither `Display` nor `Debug` reveal the password, so the credential can
/// go through the provider log.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Display for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP Basic credentials for user '{}'", self.username)
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hides_password() {
        let auth = BasicAuth::new("alice", "s3cret");
        assert_eq!(auth.to_string(), "HTTP Basic credentials for user 'alice'");
        assert!(!format!("{:?}", auth).contains("s3cret"));
        assert_eq!(auth.password(), "s3cret");
    }
}
