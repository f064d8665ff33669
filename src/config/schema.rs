//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the probe
//! backend. All types derive Serde traits for deserialization from config
//! files.

use serde::{Deserialize, Serialize};

/// Environment variable naming the ingress controller under test.
pub const CONTROLLER_NAME_ENV: &str = "CONTROLLER_NAME";

/// Root configuration for the probe backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Label identifying the ingress controller in front of this backend
    /// (e.g. "nginx", "traefik"). Cosmetic only; echoed in responses.
    pub controller_name: String,

    /// Dashboard rendering settings for `GET /`.
    pub dashboard: DashboardConfig,

    /// Timeout probe settings.
    pub timeout: TimeoutProbeConfig,

    /// Redirect probe settings.
    pub redirect: RedirectConfig,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            controller_name: "unknown".to_string(),
            dashboard: DashboardConfig::default(),
            timeout: TimeoutProbeConfig::default(),
            redirect: RedirectConfig::default(),
        }
    }
}

impl ProbeConfig {
    /// Apply environment overrides. `CONTROLLER_NAME` beats the config file
    /// so the same image can be deployed behind different controllers.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(name) = std::env::var(CONTROLLER_NAME_ENV) {
            if !name.is_empty() {
                self.controller_name = name;
            }
        }
        self
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8001".to_string(),
        }
    }
}

/// Rendering mode for the root dashboard.
///
/// The upstream deployments shipped three near-identical variants of this
/// service differing only in how `/` renders; they collapse here into one
/// configurable mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardMode {
    /// Plain JSON greeting.
    #[default]
    Json,
    /// HTML page with cookie/header tables and a script that re-fetches `/`
    /// to surface ingress-injected response headers.
    Html,
    /// HTML page with the cookie table only, no script.
    HtmlSimple,
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// How `GET /` renders.
    pub mode: DashboardMode,
}

/// Timeout probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutProbeConfig {
    /// Delay applied when the caller omits `seconds`.
    pub default_seconds: u64,

    /// Upper bound on the requested delay. Requests above it are rejected
    /// with a 200-status error body, matching the behavior proxy test
    /// suites already scrape for.
    pub max_seconds: u64,
}

impl Default for TimeoutProbeConfig {
    fn default() -> Self {
        Self {
            default_seconds: 5,
            max_seconds: 60,
        }
    }
}

/// Redirect probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Target of `GET /redirect-external` (301).
    pub external_url: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            external_url: "https://example.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProbeConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8001");
        assert_eq!(config.controller_name, "unknown");
        assert_eq!(config.dashboard.mode, DashboardMode::Json);
        assert_eq!(config.timeout.default_seconds, 5);
        assert_eq!(config.timeout.max_seconds, 60);
        assert_eq!(config.redirect.external_url, "https://example.com");
    }

    #[test]
    fn test_partial_toml() {
        let config: ProbeConfig = toml::from_str(
            r#"
            controller_name = "traefik"

            [dashboard]
            mode = "html-simple"
            "#,
        )
        .unwrap();
        assert_eq!(config.controller_name, "traefik");
        assert_eq!(config.dashboard.mode, DashboardMode::HtmlSimple);
        // Untouched sections keep their defaults
        assert_eq!(config.timeout.max_seconds, 60);
    }
}
