//! The GBIF v1 provider

use crate::auth::BasicAuth;
use crate::client::GbifClient;
use crate::config::{GbifConfig, PASSWORD_ENV, USER_ENV};
use crate::endpoint::{EndpointKind, GbifEndpoint};
use crate::metadata;
use crate::url::Delimiters;
use data_provider::{AuthOutcome, EndpointInfo, Logger, Provider, ProviderInfo, Result};
use std::collections::BTreeMap;

/// GBIF API v1: registry, species, occurrence and maps endpoints
///
/// Credentials come from `GBIF_USER` / `GBIF_PASSWORD` unless set on the
/// [`GbifConfig`]. All endpoints share one HTTP client and one logging sink.
#[derive(Debug)]
pub struct GbifProvider {
    info: ProviderInfo,
    endpoints: BTreeMap<EndpointKind, EndpointInfo>,
    config: GbifConfig,
    client: GbifClient,
    logger: Logger,
}

impl GbifProvider {
    pub fn new(config: GbifConfig) -> Result<Self> {
        Ok(Self::with_client(config, GbifClient::new()?))
    }

    /// Configure from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(GbifConfig::from_env())
    }

    /// Use a preconfigured transport
    pub fn with_client(config: GbifConfig, client: GbifClient) -> Self {
        let info = ProviderInfo {
            name: metadata::NAME.to_string(),
            description: metadata::DESCRIPTION.to_string(),
            citation: metadata::CITATION.to_string(),
            license: metadata::LICENSE.to_string(),
            url: config.base_url.clone(),
        };
        let endpoints = EndpointKind::ALL
            .into_iter()
            .map(|kind| (kind, kind.spec(config.require_authentication).resolve(&info)))
            .collect();

        Self {
            info,
            endpoints,
            config,
            client,
            logger: Logger::new(),
        }
    }

    /// Basic credentials for the configured account
    ///
    /// Rejected when the user or password is missing.
    pub fn authenticate(&self) -> AuthOutcome<BasicAuth> {
        match (&self.config.user, &self.config.password) {
            (Some(user), Some(password)) => {
                AuthOutcome::Authenticated(BasicAuth::new(user.clone(), password.clone()))
            }
            _ => AuthOutcome::Rejected(format!(
                "GBIF credentials are not configured; set {} and {}",
                USER_ENV, PASSWORD_ENV
            )),
        }
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.config.delimiters
    }

    pub(crate) fn client(&self) -> &GbifClient {
        &self.client
    }

    /// Endpoint of the given kind; every kind is always present
    pub fn get(&self, kind: EndpointKind) -> GbifEndpoint<'_> {
        GbifEndpoint::new(self, kind, &self.endpoints[&kind])
    }

    pub fn registry(&self) -> GbifEndpoint<'_> {
        self.get(EndpointKind::Registry)
    }

    pub fn species(&self) -> GbifEndpoint<'_> {
        self.get(EndpointKind::Species)
    }

    pub fn occurrence(&self) -> GbifEndpoint<'_> {
        self.get(EndpointKind::Occurrence)
    }

    pub fn maps(&self) -> GbifEndpoint<'_> {
        self.get(EndpointKind::Maps)
    }
}

impl Provider for GbifProvider {
    type EndpointView<'a> = GbifEndpoint<'a>;

    fn info(&self) -> &ProviderInfo {
        &self.info
    }

    fn logger(&self) -> &Logger {
        &self.logger
    }

    fn endpoint(&self, id: &str) -> Option<GbifEndpoint<'_>> {
        EndpointKind::from_id(id).map(|kind| self.get(kind))
    }

    fn endpoint_ids(&self) -> Vec<&str> {
        self.endpoints.keys().map(|kind| kind.id()).collect()
    }
}
