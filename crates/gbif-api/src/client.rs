//! GBIF API HTTP transport

use crate::auth::BasicAuth;
use data_provider::{Outcome, ProviderError, Result};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("gbif-api-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP transport shared by all endpoints of a provider
///
/// Sends exactly one GET per call. Requests carry no timeout unless one is
/// given for that call.
#[derive(Debug, Clone)]
pub struct GbifClient {
    http: reqwest::Client,
}

impl GbifClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ProviderError::transport)?;

        Ok(Self { http })
    }

    /// Wrap an existing `reqwest` client
    pub fn from_http(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// GET `url` and classify the response
    ///
    /// Status 200 yields the JSON-decoded body; any other status yields the
    /// raw body text. Failing to get a response at all is a transport error.
    pub async fn get(
        &self,
        url: &str,
        credential: Option<&BasicAuth>,
        timeout: Option<Duration>,
    ) -> Result<Outcome> {
        debug!(url = %url, authenticated = credential.is_some(), "Querying GBIF");

        let mut request = self.http.get(url);
        if let Some(auth) = credential {
            request = request.basic_auth(auth.username(), Some(auth.password()));
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                ProviderError::InvalidArgument(format!("invalid request URL {}: {}", url, e))
            } else {
                ProviderError::transport(e)
            }
        })?;
        let status = response.status();
        let body = response.text().await.map_err(ProviderError::transport)?;

        if status == StatusCode::OK {
            Ok(Outcome::Success(serde_json::from_str(&body)?))
        } else {
            debug!(url = %url, status = status.as_u16(), "GBIF rejected query");
            Ok(Outcome::Failure(body))
        }
    }
}
