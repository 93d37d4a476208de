//! A compiled site: the rule set plus everything needed to render it.

use thiserror::Error;

use crate::config::VanityConfig;
use crate::routing::{MatchResult, RuleSet, RuleSetError};
use crate::vanity::{EntryError, ResolvedEntry, VanityEntry};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("configuration for {path}: {source}")]
    Entry {
        path: String,
        #[source]
        source: EntryError,
    },

    #[error(transparent)]
    Rules(#[from] RuleSetError),
}

/// Immutable snapshot served to requests.
///
/// Built once per configuration load and swapped as a whole on reload.
#[derive(Debug)]
pub struct Site {
    /// Fixed import host; `None` means use the request's `Host`.
    pub host: Option<String>,
    pub cache_max_age: u64,
    pub rules: RuleSet<VanityEntry>,
}

/// A resolved lookup, ready to render.
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    /// Import path without host (`/portmidi`).
    pub import_path: &'a str,
    pub subpath: &'a str,
    pub entry: ResolvedEntry<'a>,
}

impl Site {
    pub fn from_config(config: &VanityConfig) -> Result<Self, SiteError> {
        let literal = config
            .paths
            .iter()
            .map(|(path, pc)| {
                VanityEntry::from_config(pc)
                    .map(|entry| (path.clone(), entry))
                    .map_err(|source| SiteError::Entry {
                        path: path.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let templated = config
            .path_rules
            .iter()
            .map(|rule| {
                VanityEntry::from_config(&rule.entry)
                    .map(|entry| (rule.pattern.clone(), entry))
                    .map_err(|source| SiteError::Entry {
                        path: rule.pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rules = RuleSet::build(literal, templated)?;

        Ok(Self {
            host: config.host.clone().filter(|h| !h.is_empty()),
            cache_max_age: config.cache_max_age,
            rules,
        })
    }

    /// Look up `path` and substitute any captured value into its entry.
    pub fn resolve<'a>(&'a self, path: &'a str) -> Option<Resolution<'a>> {
        self.rules.find(path).map(|m| resolution(&m))
    }

    /// Literal import paths, for the index page.
    pub fn literal_paths(&self) -> impl Iterator<Item = &str> {
        self.rules.literal().map(|e| e.rule.path())
    }
}

fn resolution<'a>(m: &MatchResult<'a, VanityEntry>) -> Resolution<'a> {
    Resolution {
        import_path: m.span,
        subpath: m.subpath,
        entry: m.payload.resolve(m.rule.placeholder(), m.captured),
    }
}
