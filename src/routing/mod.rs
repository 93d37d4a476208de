//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Rule Compilation (at startup / reload):
//!     paths (literal) + path_rules (templated)
//!     → pattern.rs (split templated patterns into prefix/placeholder/suffix)
//!     → matcher.rs (sort literals, keep templated order)
//!     → Freeze as immutable RuleSet
//!
//! Incoming Request path
//!     → RuleSet::find
//!         1. literal rules (binary search, `/`-boundary prefixes)
//!         2. templated rules (whole path only, configuration order, first match wins)
//!     → Return: MatchResult or None
//! ```
//!
//! # Design Decisions
//! - Rules compiled once, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same input always matches same rule

pub mod matcher;
pub mod pattern;

pub use matcher::{MatchResult, Rule, RuleEntry, RuleSet, RuleSetError};
pub use pattern::{parse_pattern, PatternError, PatternParts};
