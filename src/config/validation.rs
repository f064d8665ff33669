//! Semantic configuration checks, separate from serde's syntactic ones.

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ProbeConfig;

/// A single semantic validation failure.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("timeout.max_seconds must be at least 1")]
    TimeoutBound,

    #[error("redirect.external_url {0:?} is not an absolute URL")]
    ExternalUrl(String),
}

/// Validate a parsed configuration. Collects all failures rather than
/// stopping at the first so operators see everything wrong at once.
pub fn validate_config(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeout.max_seconds == 0 {
        errors.push(ValidationError::TimeoutBound);
    }

    if Url::parse(&config.redirect.external_url).is_err() {
        errors.push(ValidationError::ExternalUrl(
            config.redirect.external_url.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
