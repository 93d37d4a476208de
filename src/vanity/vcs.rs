//! Version control system kinds.

use std::fmt;
use std::str::FromStr;

use crate::vanity::hosts::KnownHost;
use crate::vanity::EntryError;

/// Version control systems understood by `go get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vcs {
    Bzr,
    Git,
    Hg,
    Svn,
}

impl Vcs {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vcs::Bzr => "bzr",
            Vcs::Git => "git",
            Vcs::Hg => "hg",
            Vcs::Svn => "svn",
        }
    }

    /// Resolve an explicit VCS name, or infer one from the repository host.
    ///
    /// Only GitHub is inferred; Bitbucket hosts both git and hg so it must
    /// be stated.
    pub fn resolve(explicit: Option<&str>, repo: &str) -> Result<Self, EntryError> {
        match explicit {
            Some(name) => name.parse(),
            None => match KnownHost::of(repo) {
                Some(KnownHost::GitHub) => Ok(Vcs::Git),
                _ => Err(EntryError::CannotInferVcs(repo.to_string())),
            },
        }
    }
}

impl FromStr for Vcs {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bzr" => Ok(Vcs::Bzr),
            "git" => Ok(Vcs::Git),
            "hg" => Ok(Vcs::Hg),
            "svn" => Ok(Vcs::Svn),
            other => Err(EntryError::UnknownVcs(other.to_string())),
        }
    }
}

impl fmt::Display for Vcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        for name in ["bzr", "git", "hg", "svn"] {
            let vcs: Vcs = name.parse().unwrap();
            assert_eq!(vcs.to_string(), name);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "xyzzy".parse::<Vcs>(),
            Err(EntryError::UnknownVcs(name)) if name == "xyzzy"
        ));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(
            Vcs::resolve(None, "https://github.com/rakyll/portmidi").unwrap(),
            Vcs::Git
        );
        assert_eq!(
            Vcs::resolve(Some("hg"), "https://bitbucket.org/zombiezen/gopdf").unwrap(),
            Vcs::Hg
        );
        assert!(matches!(
            Vcs::resolve(None, "https://bitbucket.org/zombiezen/gopdf"),
            Err(EntryError::CannotInferVcs(_))
        ));
        assert!(Vcs::resolve(None, "https://example.org/repo").is_err());
    }
}
