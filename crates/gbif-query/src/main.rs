//! gbif-query - run one query against a GBIF API v1 endpoint
//!
//! Credentials are read from `GBIF_USER` and `GBIF_PASSWORD`, the base URL
//! from `GBIF_API_URL`. The decoded payload is printed to stdout; provider
//! log entries go to stderr through `tracing`.
//!
//! ```text
//! gbif-query species --path suggest --param "q=Picea abies"
//! ```

mod error;

use crate::error::{QueryToolError, Result};
use clap::Parser;
use data_provider::{tracing_sink, EndpointExt, ExecuteOptions, Provider};
use gbif_api::{GbifArgs, GbifConfig, GbifProvider};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Query a GBIF API v1 endpoint
#[derive(Debug, Parser)]
#[command(name = "gbif-query", version, about)]
struct Args {
    /// Endpoint identifier: registry, species, occurrence or maps
    endpoint: String,

    /// Path segment after the endpoint (repeatable, in order)
    #[arg(long = "path", value_name = "SEGMENT")]
    subendpoints: Vec<String>,

    /// Query parameter as NAME=VALUE (repeatable)
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    parameters: Vec<(String, String)>,

    /// Request timeout in seconds; no timeout when omitted
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Send the request without credentials
    #[arg(long)]
    anonymous: bool,

    /// Do not forward provider log entries to stderr
    #[arg(long)]
    quiet: bool,
}

impl Args {
    fn gbif_args(&self) -> GbifArgs {
        let args = self
            .subendpoints
            .iter()
            .fold(GbifArgs::new(), |args, segment| args.path(segment.as_str()));
        self.parameters
            .iter()
            .fold(args, |args, (name, value)| args.param(name.as_str(), value))
    }

    fn execute_options(&self) -> ExecuteOptions {
        ExecuteOptions {
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }

    fn config(&self) -> GbifConfig {
        let config = GbifConfig::from_env();
        if self.anonymous {
            config.anonymous()
        } else {
            config
        }
    }
}

fn parse_param(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing parameter name in '{}'", raw)),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("gbif_query=info".parse()?)
        .add_directive("data_provider::sink=info".parse()?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let provider = GbifProvider::new(args.config())?;
    if !args.quiet {
        provider.set_log_sink(tracing_sink());
    }

    let endpoint = provider.endpoint(&args.endpoint).ok_or_else(|| {
        QueryToolError::Config(format!(
            "unknown endpoint '{}'; expected one of {}",
            args.endpoint,
            provider.endpoint_ids().join(", ")
        ))
    })?;

    info!(endpoint = %args.endpoint, url = %provider.info().url, "Querying {}", provider.info().name);

    let outcome = endpoint
        .query(args.gbif_args(), &args.execute_options())
        .await?;
    let (success, payload) = outcome.into_pair();
    println!("{}", serde_json::to_string_pretty(&payload)?);

    if !success {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("q=Picea abies").unwrap(),
            ("q".to_string(), "Picea abies".to_string())
        );
        assert_eq!(
            parse_param("filter=a=b").unwrap(),
            ("filter".to_string(), "a=b".to_string())
        );
        assert!(parse_param("limit").is_err());
        assert!(parse_param("=5").is_err());
    }

    #[test]
    fn test_args_to_gbif_args() {
        let args = Args::try_parse_from([
            "gbif-query",
            "species",
            "--path",
            "5231190",
            "--path",
            "children",
            "--param",
            "limit=20",
            "--timeout-secs",
            "10",
        ])
        .unwrap();

        assert_eq!(
            args.gbif_args(),
            GbifArgs::new().path("5231190").path("children").param("limit", "20")
        );
        assert_eq!(
            args.execute_options().timeout,
            Some(Duration::from_secs(10))
        );
        assert!(!args.anonymous);
    }

    #[test]
    fn test_no_timeout_by_default() {
        let args = Args::try_parse_from(["gbif-query", "registry", "--anonymous"]).unwrap();
        assert_eq!(args.execute_options().timeout, None);
        assert!(!args.config().require_authentication);
    }

    #[test]
    fn test_rejects_malformed_param() {
        assert!(Args::try_parse_from(["gbif-query", "species", "--param", "novalue"]).is_err());
    }
}
