//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every path entry resolves (known VCS, inferable VCS, non-empty repo)
//! - Check every path rule is a well-formed single-placeholder pattern
//! - Detect literal paths that collide after trailing-slash normalization
//! - Validate listener and metrics addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: VanityConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::BTreeSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::VanityConfig;
use crate::routing::pattern::{looks_templated, PatternError};
use crate::routing::Rule;
use crate::vanity::{EntryError, VanityEntry};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("configuration for {path}: {source}")]
    Entry {
        path: String,
        #[source]
        source: EntryError,
    },

    #[error("path rule {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("path {0:?} must start with '/'")]
    RelativePath(String),

    #[error("path {0:?} contains a placeholder; declare it under path_rules")]
    PlaceholderInPath(String),

    #[error("duplicate path {0:?}")]
    DuplicatePath(String),

    #[error("invalid {field} {value:?}")]
    Address { field: &'static str, value: String },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &VanityConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();

    for (path, pc) in &config.paths {
        if !path.starts_with('/') {
            errors.push(ValidationError::RelativePath(path.clone()));
        }
        if looks_templated(path) {
            errors.push(ValidationError::PlaceholderInPath(path.clone()));
        }
        let normalized = Rule::literal(path);
        if !seen.insert(normalized.path().to_string()) {
            errors.push(ValidationError::DuplicatePath(normalized.path().to_string()));
        }
        if let Err(source) = VanityEntry::from_config(pc) {
            errors.push(ValidationError::Entry {
                path: path.clone(),
                source,
            });
        }
    }

    for rule in &config.path_rules {
        if !rule.pattern.starts_with('/') {
            errors.push(ValidationError::RelativePath(rule.pattern.clone()));
        }
        if let Err(source) = Rule::templated(&rule.pattern) {
            errors.push(ValidationError::Pattern {
                pattern: rule.pattern.clone(),
                source,
            });
        }
        if let Err(source) = VanityEntry::from_config(&rule.entry) {
            errors.push(ValidationError::Entry {
                path: rule.pattern.clone(),
                source,
            });
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::Address {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::Address {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
