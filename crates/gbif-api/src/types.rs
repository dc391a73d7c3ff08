//! Typed views of common GBIF species responses
//!
//! Endpoints return raw JSON. These structs are for callers who want to
//! decode a success payload with [`Outcome::decode`](data_provider::Outcome::decode).
//! Every field is optional; unknown fields are ignored.

use serde::Deserialize;

/// Result from `/species/suggest`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResult {
    pub key: Option<u64>,
    pub scientific_name: Option<String>,
    pub canonical_name: Option<String>,
    pub rank: Option<String>,
    pub status: Option<String>,
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub class: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
}

/// Species detail from `/species/{key}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesDetail {
    pub key: Option<u64>,
    pub scientific_name: Option<String>,
    pub canonical_name: Option<String>,
    pub vernacular_name: Option<String>,
    pub rank: Option<String>,
    pub taxonomic_status: Option<String>,
    pub kingdom: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub parent_key: Option<u64>,
    pub num_descendants: Option<u64>,
    pub extinct: Option<bool>,
}

/// One page of a list response (`/species/search`, `/species/{key}/children`, ...)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub end_of_records: bool,
    pub count: Option<u64>,
    pub results: Vec<T>,
}
