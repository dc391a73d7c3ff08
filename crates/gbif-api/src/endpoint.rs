//! GBIF v1 endpoints

use crate::auth::BasicAuth;
use crate::metadata;
use crate::provider::GbifProvider;
use crate::url::compose_url;
use data_provider::{
    AuthOutcome, Endpoint, EndpointInfo, EndpointSpec, ExecuteOptions, Logger, Outcome, Provider,
    ProviderError, Query, Result,
};
use std::collections::BTreeMap;
use std::fmt;

/// The sections of the GBIF v1 API
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EndpointKind {
    Registry,
    Species,
    Occurrence,
    /// Placeholder: listed by the provider but cannot execute queries
    Maps,
}

impl EndpointKind {
    pub const ALL: [EndpointKind; 4] = [
        EndpointKind::Registry,
        EndpointKind::Species,
        EndpointKind::Occurrence,
        EndpointKind::Maps,
    ];

    /// Identifier used for provider lookups
    pub fn id(self) -> &'static str {
        match self {
            Self::Registry => "registry",
            Self::Species => "species",
            Self::Occurrence => "occurrence",
            Self::Maps => "maps",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn is_implemented(self) -> bool {
        !matches!(self, Self::Maps)
    }

    pub(crate) fn spec(self, requires_authentication: bool) -> EndpointSpec {
        let (name, description) = match self {
            Self::Registry => ("GBIF Registry", metadata::REGISTRY_DESCRIPTION),
            Self::Species => ("GBIF Species", metadata::SPECIES_DESCRIPTION),
            Self::Occurrence => ("GBIF Occurrence", metadata::OCCURRENCE_DESCRIPTION),
            Self::Maps => ("GBIF Maps", metadata::MAPS_DESCRIPTION),
        };
        EndpointSpec::new(name, self.id())
            .with_description(description)
            .requires_authentication(requires_authentication)
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Arguments accepted by every GBIF endpoint
///
/// ```
/// use gbif_api::GbifArgs;
///
/// let args = GbifArgs::new().path("suggest").param("q", "Picea abies");
/// assert_eq!(args.subendpoints, ["suggest"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GbifArgs {
    pub subendpoints: Vec<String>,
    pub parameters: BTreeMap<String, String>,
}

impl GbifArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path segment
    pub fn path(mut self, segment: impl Into<String>) -> Self {
        self.subendpoints.push(segment.into());
        self
    }

    /// Set a query parameter; the value is converted with `ToString`
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.parameters.insert(name.into(), value.to_string());
        self
    }
}

/// One GBIF endpoint, borrowed from its [`GbifProvider`]
#[derive(Debug, Clone, Copy)]
pub struct GbifEndpoint<'a> {
    provider: &'a GbifProvider,
    kind: EndpointKind,
    info: &'a EndpointInfo,
}

impl<'a> GbifEndpoint<'a> {
    pub(crate) fn new(provider: &'a GbifProvider, kind: EndpointKind, info: &'a EndpointInfo) -> Self {
        Self {
            provider,
            kind,
            info,
        }
    }

    pub fn kind(&self) -> EndpointKind {
        self.kind
    }

    pub fn provider(&self) -> &'a GbifProvider {
        self.provider
    }

    /// Full request URL for `query` under this endpoint
    pub fn url_for(&self, query: &Query) -> String {
        compose_url(
            &self.provider.info().url,
            self.info.sub_url(),
            query,
            self.provider.delimiters(),
        )
    }
}

impl Endpoint for GbifEndpoint<'_> {
    type Args = GbifArgs;
    type Credential = BasicAuth;

    fn info(&self) -> &EndpointInfo {
        self.info
    }

    fn logger(&self) -> &Logger {
        self.provider.logger()
    }

    fn is_implemented(&self) -> bool {
        self.kind.is_implemented()
    }

    fn construct_query(&self, args: GbifArgs) -> Result<Query> {
        if let Some(pos) = args.subendpoints.iter().position(|s| s.is_empty()) {
            return Err(ProviderError::InvalidArgument(format!(
                "subendpoint {} of {} is empty",
                pos, self.kind
            )));
        }
        let delimiter = self.provider.delimiters().endpoint.as_str();
        if !delimiter.is_empty() {
            if let Some(segment) = args.subendpoints.iter().find(|s| s.contains(delimiter)) {
                return Err(ProviderError::InvalidArgument(format!(
                    "subendpoint '{}' of {} contains the path delimiter '{}'",
                    segment, self.kind, delimiter
                )));
            }
        }
        if args.parameters.keys().any(|k| k.is_empty()) {
            return Err(ProviderError::InvalidArgument(format!(
                "parameter names for {} must not be empty",
                self.kind
            )));
        }
        Ok(Query::new(args.subendpoints, args.parameters))
    }

    async fn authenticate(&self) -> Result<AuthOutcome<BasicAuth>> {
        Ok(self.provider.authenticate())
    }

    async fn execute(
        &self,
        query: &Query,
        credential: Option<&BasicAuth>,
        options: &ExecuteOptions,
    ) -> Result<Outcome> {
        if !self.kind.is_implemented() {
            return Err(ProviderError::NotImplemented(format!(
                "{} is not implemented yet",
                self.info.name()
            )));
        }
        let url = self.url_for(query);
        self.provider
            .client()
            .get(&url, credential, options.timeout)
            .await
    }
}
