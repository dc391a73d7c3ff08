//! Provider configuration, read from the environment with builder overrides

use crate::url::Delimiters;
use tracing::warn;

/// Environment variable holding the GBIF account name
pub const USER_ENV: &str = "GBIF_USER";
/// Environment variable holding the GBIF account password
pub const PASSWORD_ENV: &str = "GBIF_PASSWORD";
/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "GBIF_API_URL";

/// Base URL for GBIF API v1
pub const V1_BASE_URL: &str = "https://api.gbif.org/v1";

/// Configuration for a [`GbifProvider`](crate::GbifProvider)
#[derive(Clone, PartialEq, Eq)]
pub struct GbifConfig {
    pub base_url: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub delimiters: Delimiters,
    /// Whether endpoints authenticate before every request
    pub require_authentication: bool,
}

impl GbifConfig {
    /// Defaults only: v1 base URL, no credentials, authentication required
    pub fn new() -> Self {
        Self {
            base_url: V1_BASE_URL.to_string(),
            user: None,
            password: None,
            delimiters: Delimiters::default(),
            require_authentication: true,
        }
    }

    /// Read `GBIF_USER`, `GBIF_PASSWORD` and `GBIF_API_URL`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut config = Self::new();
        if let Some(url) = non_empty(BASE_URL_ENV) {
            config.base_url = url;
        }
        config.user = non_empty(USER_ENV);
        config.password = non_empty(PASSWORD_ENV);
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set credentials explicitly, overriding the environment
    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        warn!(
            "GBIF credentials passed explicitly; consider setting {} and {} instead",
            USER_ENV, PASSWORD_ENV
        );
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Send requests without credentials and skip authentication
    pub fn anonymous(mut self) -> Self {
        self.require_authentication = false;
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.user.is_some() && self.password.is_some()
    }
}

impl Default for GbifConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GbifConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GbifConfig")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("delimiters", &self.delimiters)
            .field("require_authentication", &self.require_authentication)
            .finish()
    }
}
