//! Vanity import metadata.
//!
//! # Data Flow
//! ```text
//! VanityConfig (paths, path_rules)
//!     → entry.rs (VCS resolution, display inference)
//!     → site.rs (RuleSet<VanityEntry> + host + cache settings)
//!
//! Per request:
//!     Site::resolve(path)
//!     → RuleSet::find
//!     → VanityEntry::resolve (placeholder substitution)
//!     → Resolution (import path, subpath, repo, vcs, display)
//! ```

pub mod entry;
pub mod hosts;
pub mod site;
pub mod vcs;

use thiserror::Error;

pub use entry::{substitute, ResolvedEntry, VanityEntry};
pub use hosts::{infer_display, KnownHost};
pub use site::{Resolution, Site, SiteError};
pub use vcs::Vcs;

/// Errors in a single path entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("repo must not be empty")]
    EmptyRepo,

    #[error("unknown VCS {0:?}")]
    UnknownVcs(String),

    #[error("cannot infer VCS from {0}")]
    CannotInferVcs(String),
}
