//! The provider contract: shared metadata, logging and a fixed set of endpoints

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::log::Logger;
use crate::metadata::ProviderInfo;
use std::fmt;

/// Owner of a set of endpoints and the configuration they share
///
/// Endpoints are handed out as views borrowing the provider, so an endpoint
/// can neither outlive its provider nor belong to another one.
pub trait Provider {
    type EndpointView<'a>: Endpoint
    where
        Self: 'a;

    fn info(&self) -> &ProviderInfo;

    fn logger(&self) -> &Logger;

    /// Look up an endpoint by identifier
    fn endpoint(&self, id: &str) -> Option<Self::EndpointView<'_>>;

    /// Identifiers of all endpoints, in a stable order
    fn endpoint_ids(&self) -> Vec<&str>;

    /// Log `what` through this provider's sink
    fn log(&self, what: &dyn fmt::Display) -> Result<String> {
        self.logger().log(what)
    }

    /// Replace the logging sink
    fn set_log_sink(&self, sink: impl Fn(&str) + Send + Sync + 'static) {
        self.logger().set_sink(sink);
    }
}
