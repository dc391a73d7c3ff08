//! Query pipeline shared by HTTP data providers
//!
//! A [`Provider`] owns shared metadata, a logging sink and a fixed set of
//! endpoints. Each [`Endpoint`] turns caller arguments into a [`Query`],
//! optionally authenticates, executes the query and reports an [`Outcome`].
//! [`EndpointExt::query`] runs those steps in order and logs each of them
//! through the provider's [`Logger`].
//!
//! # Example
//!
//! ```no_run
//! use data_provider::{Endpoint, EndpointExt, ExecuteOptions, Provider};
//!
//! # async fn example<E: Endpoint>(provider: &impl Provider, endpoint: &E, args: E::Args)
//! #     -> data_provider::Result<()> {
//! provider.set_log_sink(|entry| eprintln!("{entry}"));
//! let outcome = endpoint.query(args, &ExecuteOptions::default()).await?;
//! let (success, payload) = outcome.into_pair();
//! println!("{success}: {payload}");
//! # Ok(())
//! # }
//! ```

mod endpoint;
mod error;
mod log;
mod metadata;
mod outcome;
mod provider;
mod query;

pub use endpoint::{Endpoint, EndpointExt, ExecuteOptions};
pub use error::{ProviderError, Result};
pub use log::{tracing_sink, LogSink, Logger};
pub use metadata::{EndpointInfo, EndpointSpec, ProviderInfo};
pub use outcome::{AuthOutcome, Outcome};
pub use provider::Provider;
pub use query::Query;
