//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the vanity import server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VanityConfig {
    /// Host used in import paths (e.g., "example.com").
    /// When unset, the request's Host header is used.
    pub host: Option<String>,

    /// `Cache-Control` max-age in seconds.
    pub cache_max_age: u64,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Literal import paths, keyed by path.
    pub paths: BTreeMap<String, PathConfig>,

    /// Templated import paths, checked in order after `paths`.
    pub path_rules: Vec<PathRuleConfig>,
}

impl Default for VanityConfig {
    fn default() -> Self {
        Self {
            host: None,
            cache_max_age: 86_400,
            listener: ListenerConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            paths: BTreeMap::new(),
            path_rules: Vec::new(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Repository metadata for one import path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathConfig {
    /// Repository root URL; may contain the rule's placeholder.
    pub repo: String,

    /// One of bzr, git, hg, svn. Inferred for GitHub.
    #[serde(default)]
    pub vcs: Option<String>,

    /// Explicit `go-source` display ("repo dir-template file-template").
    #[serde(default)]
    pub display: Option<String>,
}

/// A templated import path such as `/{name}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathRuleConfig {
    pub pattern: String,

    #[serde(flatten)]
    pub entry: PathConfig,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
