//! Descriptive metadata for providers and their endpoints

/// Identifying metadata of a data provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    pub description: String,
    pub citation: String,
    pub license: String,
    /// Base URL every endpoint's sub-url is appended to
    pub url: String,
}

/// An endpoint as declared by a provider, before provider defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    pub name: String,
    pub description: String,
    pub sub_url: String,
    pub citation: Option<String>,
    pub license: Option<String>,
    pub requires_authentication: bool,
}

impl EndpointSpec {
    pub fn new(name: impl Into<String>, sub_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            sub_url: sub_url.into(),
            citation: None,
            license: None,
            requires_authentication: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = Some(citation.into());
        self
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn requires_authentication(mut self, required: bool) -> Self {
        self.requires_authentication = required;
        self
    }

    /// Fill in citation and license from the owning provider
    pub fn resolve(self, provider: &ProviderInfo) -> EndpointInfo {
        EndpointInfo {
            citation: self.citation.unwrap_or_else(|| provider.citation.clone()),
            license: self.license.unwrap_or_else(|| provider.license.clone()),
            name: self.name,
            description: self.description,
            sub_url: self.sub_url,
            requires_authentication: self.requires_authentication,
        }
    }
}

/// Endpoint metadata with provider defaults applied; fixed for the provider's lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointInfo {
    name: String,
    description: String,
    sub_url: String,
    citation: String,
    license: String,
    requires_authentication: bool,
}

impl EndpointInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sub_url(&self) -> &str {
        &self.sub_url
    }

    pub fn citation(&self) -> &str {
        &self.citation
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    /// Whether every execution must be preceded by authentication
    pub fn requires_authentication(&self) -> bool {
        self.requires_authentication
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> ProviderInfo {
        ProviderInfo {
            name: "Example".to_string(),
            description: "An example provider".to_string(),
            citation: "Example (2024)".to_string(),
            license: "CC0".to_string(),
            url: "https://api.example.org/v1".to_string(),
        }
    }

    #[test]
    fn test_resolve_inherits_provider_metadata() {
        let info = EndpointSpec::new("Species", "species").resolve(&provider());
        assert_eq!(info.name(), "Species");
        assert_eq!(info.sub_url(), "species");
        assert_eq!(info.citation(), "Example (2024)");
        assert_eq!(info.license(), "CC0");
        assert!(!info.requires_authentication());
    }

    #[test]
    fn test_resolve_keeps_overrides() {
        let info = EndpointSpec::new("Maps", "maps")
            .with_description("Map tiles")
            .with_citation("Maps citation")
            .with_license("CC-BY 4.0")
            .requires_authentication(true)
            .resolve(&provider());
        assert_eq!(info.description(), "Map tiles");
        assert_eq!(info.citation(), "Maps citation");
        assert_eq!(info.license(), "CC-BY 4.0");
        assert!(info.requires_authentication());
    }
}
