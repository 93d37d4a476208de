//! Well-known repository hosts and their default `go-source` displays.

use url::Url;

/// Hosts whose source browsing URLs can be inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownHost {
    GitHub,
    Bitbucket,
}

impl KnownHost {
    /// Identify the host of a repository URL.
    ///
    /// The URL may still contain a `{placeholder}`; only the host is read.
    pub fn of(repo: &str) -> Option<Self> {
        let url = Url::parse(repo).ok()?;
        if url.scheme() != "https" {
            return None;
        }
        match url.host_str()? {
            "github.com" => Some(KnownHost::GitHub),
            "bitbucket.org" => Some(KnownHost::Bitbucket),
            _ => None,
        }
    }

    /// The full `go-source` display (`repo dir-template file-template`).
    pub fn display(&self, repo: &str) -> String {
        match self {
            KnownHost::GitHub => format!(
                "{repo} {repo}/tree/master{{/dir}} {repo}/blob/master{{/dir}}/{{file}}#L{{line}}"
            ),
            KnownHost::Bitbucket => format!(
                "{repo} {repo}/src/default{{/dir}} {repo}/src/default{{/dir}}/{{file}}#{{file}}-{{line}}"
            ),
        }
    }
}

/// Default display for a repository, if its host is known.
pub fn infer_display(repo: &str) -> Option<String> {
    KnownHost::of(repo).map(|host| host.display(repo))
}
