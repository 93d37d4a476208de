//! Per-rule payload: where an import path lives and how to browse it.

use std::borrow::Cow;

use crate::config::schema::PathConfig;
use crate::vanity::hosts::infer_display;
use crate::vanity::vcs::Vcs;
use crate::vanity::EntryError;

/// Repository metadata attached to a rule.
///
/// For templated rules `repo` and `display` may still contain the rule's
/// placeholder token; [`VanityEntry::resolve`] fills it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanityEntry {
    pub repo: String,
    pub vcs: Vcs,
    /// Full `go-source` display, explicit or inferred.
    pub display: Option<String>,
}

/// A [`VanityEntry`] with the captured value substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry<'a> {
    pub repo: Cow<'a, str>,
    pub vcs: Vcs,
    pub display: Option<Cow<'a, str>>,
}

impl VanityEntry {
    pub fn new(repo: &str, vcs: Option<&str>, display: Option<&str>) -> Result<Self, EntryError> {
        if repo.trim().is_empty() {
            return Err(EntryError::EmptyRepo);
        }
        let vcs = Vcs::resolve(vcs, repo)?;
        let display = match display {
            Some(explicit) => Some(explicit.to_string()),
            None => infer_display(repo),
        };
        Ok(Self {
            repo: repo.to_string(),
            vcs,
            display,
        })
    }

    pub fn from_config(config: &PathConfig) -> Result<Self, EntryError> {
        Self::new(
            &config.repo,
            config.vcs.as_deref(),
            config.display.as_deref(),
        )
    }

    /// Substitute `captured` for every `placeholder` token.
    ///
    /// Literal matches pass `None` and borrow the entry unchanged.
    pub fn resolve<'a>(&'a self, placeholder: Option<&str>, captured: Option<&str>) -> ResolvedEntry<'a> {
        let subst = |template: &'a str| match (placeholder, captured) {
            (Some(token), Some(value)) => substitute(template, token, value),
            _ => Cow::Borrowed(template),
        };
        ResolvedEntry {
            repo: subst(self.repo.as_str()),
            vcs: self.vcs,
            display: self.display.as_deref().map(subst),
        }
    }
}

/// Replace every occurrence of `token` in `template` with `value`.
pub fn substitute<'a>(template: &'a str, token: &str, value: &str) -> Cow<'a, str> {
    if token.is_empty() || !template.contains(token) {
        Cow::Borrowed(template)
    } else {
        Cow::Owned(template.replace(token, value))
    }
}
