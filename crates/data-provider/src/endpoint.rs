//! The endpoint contract and the query orchestration built on it

use crate::error::{ProviderError, Result};
use crate::log::Logger;
use crate::metadata::EndpointInfo;
use crate::outcome::{AuthOutcome, Outcome};
use crate::query::Query;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Transport options forwarded to [`Endpoint::execute`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl ExecuteOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// An access point under a provider's base URL
///
/// Implementations decide how caller arguments become a [`Query`], how
/// credentials are obtained and how a query is sent. Callers go through
/// [`EndpointExt::query`], which sequences those steps and logs them.
#[allow(async_fn_in_trait)]
pub trait Endpoint {
    /// Caller-supplied arguments accepted by this endpoint
    type Args;
    /// Credential produced by [`authenticate`](Endpoint::authenticate)
    type Credential: fmt::Display;

    fn info(&self) -> &EndpointInfo;

    /// Sink shared with the owning provider
    fn logger(&self) -> &Logger;

    /// Placeholder endpoints return `false` and are rejected before any side effect
    fn is_implemented(&self) -> bool {
        true
    }

    /// Translate caller arguments into a query
    ///
    /// Fails with [`ProviderError::InvalidArgument`] on missing or malformed input.
    fn construct_query(&self, args: Self::Args) -> Result<Query>;

    /// Obtain a credential for the next execution
    ///
    /// Only called when [`EndpointInfo::requires_authentication`] is set.
    /// Endpoints that never authenticate keep this default.
    async fn authenticate(&self) -> Result<AuthOutcome<Self::Credential>> {
        Err(ProviderError::NotSupported(format!(
            "endpoint '{}' does not use authentication",
            self.info().name()
        )))
    }

    /// Send the query and classify the response
    ///
    /// A rejected request is `Ok(Outcome::Failure)`. A request that got no
    /// response at all is `Err(ProviderError::Transport)`.
    async fn execute(
        &self,
        query: &Query,
        credential: Option<&Self::Credential>,
        options: &ExecuteOptions,
    ) -> Result<Outcome>;
}

/// Query orchestration, available on every [`Endpoint`]
///
/// The blanket impl below is the only impl, so the sequence cannot be
/// replaced by individual endpoints.
#[allow(async_fn_in_trait)]
pub trait EndpointExt: Endpoint {
    /// Construct, authenticate if required, execute and log one query
    ///
    /// Sink entries, in order: the authentication message (only when the
    /// endpoint requires authentication), the query, the outcome. A rejected
    /// authentication logs its message and stops with
    /// [`ProviderError::AuthenticationFailed`] without executing.
    async fn query(&self, args: Self::Args, options: &ExecuteOptions) -> Result<Outcome> {
        let name = self.info().name();
        if !self.is_implemented() {
            return Err(ProviderError::NotImplemented(format!(
                "endpoint '{}' is not implemented",
                name
            )));
        }

        let query = self.construct_query(args)?;

        let credential = if self.info().requires_authentication() {
            let auth = self.authenticate().await?;
            self.logger().log(&auth)?;
            match auth {
                AuthOutcome::Authenticated(credential) => Some(credential),
                AuthOutcome::Rejected(msg) => {
                    debug!(endpoint = name, "authentication rejected");
                    return Err(ProviderError::AuthenticationFailed(msg));
                }
            }
        } else {
            None
        };

        self.logger().log(&query)?;
        let outcome = self.execute(&query, credential.as_ref(), options).await?;
        debug!(
            endpoint = name,
            success = outcome.is_success(),
            "query executed"
        );
        self.logger().log(&outcome)?;

        Ok(outcome)
    }
}

impl<E: Endpoint> EndpointExt for E {}
