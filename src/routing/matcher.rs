//! Rule set matching.
//!
//! # Responsibilities
//! - Hold literal rules (sorted, binary searched) and templated rules
//!   (configuration order, scanned)
//! - Resolve a request path to the best rule, its matched span, the
//!   residual subpath and any captured placeholder value
//!
//! # Design Decisions
//! - Literal rules always outrank templated rules
//! - Prefix matches only count at `/` boundaries: `/portmidi` never
//!   matches `/portmidiabc`
//! - A templated rule matches the whole query or nothing; its placeholder
//!   never spans a `/`
//! - Among templated rules the first configured match wins
//! - Immutable after construction (shared across tasks without locks)

use thiserror::Error;

use crate::routing::pattern::{parse_pattern, PatternError};

/// A single routing rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Matches a path and everything below it.
    Literal { path: String },

    /// Matches exactly `prefix` + one path segment + `suffix`.
    Templated {
        pattern: String,
        prefix: String,
        placeholder: String,
        suffix: String,
    },
}

impl Rule {
    /// Build a literal rule, stripping one trailing `/`.
    pub fn literal(path: &str) -> Self {
        Rule::Literal {
            path: normalize(path).to_string(),
        }
    }

    /// Build a templated rule, stripping one trailing `/` before parsing.
    pub fn templated(pattern: &str) -> Result<Self, PatternError> {
        let pattern = normalize(pattern);
        let parts = parse_pattern(pattern)?;
        Ok(Rule::Templated {
            pattern: pattern.to_string(),
            prefix: parts.prefix.to_string(),
            placeholder: parts.placeholder.to_string(),
            suffix: parts.suffix.to_string(),
        })
    }

    /// The normalized path or pattern as configured.
    pub fn path(&self) -> &str {
        match self {
            Rule::Literal { path } => path,
            Rule::Templated { pattern, .. } => pattern,
        }
    }

    /// The `{name}` token of a templated rule.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Rule::Literal { .. } => None,
            Rule::Templated { placeholder, .. } => Some(placeholder),
        }
    }

    /// Match this rule against `path`.
    ///
    /// Returns `(span, subpath, captured)`.
    fn match_path<'q>(&self, path: &'q str) -> Option<(&'q str, &'q str, Option<&'q str>)> {
        match self {
            Rule::Literal { path: rule_path } => {
                if path == rule_path {
                    return Some((path, "", None));
                }
                let rest = path.strip_prefix(rule_path.as_str())?;
                let subpath = rest.strip_prefix('/')?;
                Some((&path[..rule_path.len()], subpath, None))
            }
            Rule::Templated { prefix, suffix, .. } => {
                let rest = path.strip_prefix(prefix.as_str())?;
                let captured = capture(rest, suffix)?;
                Some((path, "", Some(captured)))
            }
        }
    }
}

/// The segment between prefix and suffix: non-empty and without a `/`.
fn capture<'q>(rest: &'q str, suffix: &str) -> Option<&'q str> {
    rest.strip_suffix(suffix)
        .filter(|middle| !middle.is_empty() && !middle.contains('/'))
}

fn normalize(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// A rule together with the payload it resolves to.
#[derive(Debug, Clone)]
pub struct RuleEntry<T> {
    pub rule: Rule,
    pub payload: T,
}

/// Result of a successful lookup.
#[derive(Debug)]
pub struct MatchResult<'a, T> {
    pub rule: &'a Rule,
    pub payload: &'a T,
    /// The portion of the query consumed by the rule.
    pub span: &'a str,
    /// What follows the span, without a leading `/`.
    pub subpath: &'a str,
    /// The placeholder value for templated matches.
    pub captured: Option<&'a str>,
}

// Manual impls: derives would require `T: Clone`/`T: Copy`.
impl<T> Clone for MatchResult<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatchResult<'_, T> {}

/// Errors building a rule set.
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("invalid path rule {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("duplicate path {0:?}")]
    DuplicatePath(String),
}

/// Ordered collection of literal and templated rules.
#[derive(Debug, Clone)]
pub struct RuleSet<T> {
    literal: Vec<RuleEntry<T>>,
    templated: Vec<RuleEntry<T>>,
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        Self {
            literal: Vec::new(),
            templated: Vec::new(),
        }
    }
}

impl<T> RuleSet<T> {
    /// Build a rule set from literal paths and templated patterns.
    ///
    /// Fails on the first malformed pattern or on two literal paths that
    /// normalize to the same value.
    pub fn build<L, P>(literal: L, templated: P) -> Result<Self, RuleSetError>
    where
        L: IntoIterator<Item = (String, T)>,
        P: IntoIterator<Item = (String, T)>,
    {
        let mut literal: Vec<RuleEntry<T>> = literal
            .into_iter()
            .map(|(path, payload)| RuleEntry {
                rule: Rule::literal(&path),
                payload,
            })
            .collect();
        literal.sort_by(|a, b| a.rule.path().cmp(b.rule.path()));

        if let Some(dup) = literal
            .windows(2)
            .find(|w| w[0].rule.path() == w[1].rule.path())
        {
            return Err(RuleSetError::DuplicatePath(dup[0].rule.path().to_string()));
        }

        let templated = templated
            .into_iter()
            .map(|(pattern, payload)| {
                let rule = Rule::templated(&pattern)
                    .map_err(|source| RuleSetError::Pattern { pattern, source })?;
                Ok(RuleEntry { rule, payload })
            })
            .collect::<Result<Vec<_>, RuleSetError>>()?;

        tracing::debug!(
            literal = literal.len(),
            templated = templated.len(),
            "Rule set built"
        );

        Ok(Self { literal, templated })
    }

    /// Find the rule matching `path`.
    pub fn find<'a>(&'a self, path: &'a str) -> Option<MatchResult<'a, T>> {
        self.find_literal(path).or_else(|| self.find_templated(path))
    }

    /// Binary search the query itself, then each shorter prefix that ends
    /// right before a `/`. The longest prefix wins.
    fn find_literal<'a>(&'a self, path: &'a str) -> Option<MatchResult<'a, T>> {
        let candidates = std::iter::once(path.len())
            .chain(path.rmatch_indices('/').map(|(i, _)| i));

        for end in candidates {
            let candidate = &path[..end];
            if let Ok(i) = self
                .literal
                .binary_search_by(|e| e.rule.path().cmp(candidate))
            {
                let entry = &self.literal[i];
                if let Some((span, subpath, _)) = entry.rule.match_path(path) {
                    return Some(MatchResult {
                        rule: &entry.rule,
                        payload: &entry.payload,
                        span,
                        subpath,
                        captured: None,
                    });
                }
            }
        }
        None
    }

    fn find_templated<'a>(&'a self, path: &'a str) -> Option<MatchResult<'a, T>> {
        self.templated.iter().find_map(|entry| {
            entry
                .rule
                .match_path(path)
                .map(|(span, subpath, captured)| MatchResult {
                    rule: &entry.rule,
                    payload: &entry.payload,
                    span,
                    subpath,
                    captured,
                })
        })
    }

    /// Literal rules in path order.
    pub fn literal(&self) -> impl Iterator<Item = &RuleEntry<T>> {
        self.literal.iter()
    }

    /// Templated rules in configuration order.
    pub fn templated(&self) -> impl Iterator<Item = &RuleEntry<T>> {
        self.templated.iter()
    }

    pub fn len(&self) -> usize {
        self.literal.len() + self.templated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
