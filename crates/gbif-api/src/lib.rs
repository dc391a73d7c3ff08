//! Rust client for the GBIF (Global Biodiversity Information Facility) API v1
//!
//! [`GbifProvider`] implements the [`data_provider::Provider`] contract for
//! GBIF. Each endpoint composes a request URL from the provider's base URL,
//! its own sub-url and the query's subendpoints and parameters, then sends a
//! single GET with HTTP Basic authentication.
//!
//! # Example
//!
//! ```no_run
//! use data_provider::{EndpointExt, ExecuteOptions, Provider};
//! use gbif_api::{GbifArgs, GbifProvider, SuggestResult};
//!
//! # async fn example() -> data_provider::Result<()> {
//! // Credentials from GBIF_USER / GBIF_PASSWORD
//! let gbif = GbifProvider::from_env()?;
//! gbif.set_log_sink(|entry| eprintln!("{entry}"));
//!
//! let outcome = gbif
//!     .species()
//!     .query(
//!         GbifArgs::new().path("suggest").param("q", "Picea abies"),
//!         &ExecuteOptions::default(),
//!     )
//!     .await?;
//!
//! if let Some(results) = outcome.decode::<Vec<SuggestResult>>()? {
//!     for result in results {
//!         println!("{:?}", result.scientific_name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Endpoints
//!
//! - `registry` - datasets, organizations, installations, nodes, networks
//! - `species` - checklist bank, name search and lookup
//! - `occurrence` - occurrence records and search
//! - `maps` - listed but not implemented
//!
//! Parameter values are inserted into the URL as-is. They are not
//! percent-encoded, so callers must pass URL-safe values.

mod auth;
mod client;
mod config;
mod endpoint;
mod metadata;
mod provider;
mod types;
mod url;

pub use auth::BasicAuth;
pub use client::GbifClient;
pub use config::{GbifConfig, BASE_URL_ENV, PASSWORD_ENV, USER_ENV, V1_BASE_URL};
pub use endpoint::{EndpointKind, GbifArgs, GbifEndpoint};
pub use provider::GbifProvider;
pub use types::{ListResponse, SpeciesDetail, SuggestResult};
pub use url::{compose_url, Delimiters};

pub use data_provider::{Outcome, ProviderError, Result};
