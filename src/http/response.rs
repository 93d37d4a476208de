//! Response rendering.
//!
//! # Responsibilities
//! - Render the `go-import` / `go-source` page for a resolved path
//! - Render the index page listing literal import paths
//!
//! # Design Decisions
//! - Plain string building; the pages are fixed and tiny
//! - Every interpolated value is HTML-escaped

use std::borrow::Cow;

use crate::vanity::{Resolution, Vcs};

const DOC_SITE: &str = "https://pkg.go.dev";

/// The metadata page served for a matched import path.
#[derive(Debug, Clone)]
pub struct ImportPage<'a> {
    /// Host plus import path, e.g. `example.com/portmidi`.
    import: String,
    vcs: Vcs,
    repo: &'a str,
    display: Option<&'a str>,
    subpath: &'a str,
}

impl<'a> ImportPage<'a> {
    pub fn new(host: &str, resolution: &'a Resolution<'_>) -> Self {
        Self {
            import: format!("{host}{}", resolution.import_path),
            vcs: resolution.entry.vcs,
            repo: &resolution.entry.repo,
            display: resolution.entry.display.as_deref(),
            subpath: resolution.subpath,
        }
    }

    /// Content of the `go-import` meta tag.
    pub fn go_import(&self) -> String {
        format!("{} {} {}", self.import, self.vcs, self.repo)
    }

    /// Content of the `go-source` meta tag, if a display is known.
    pub fn go_source(&self) -> Option<String> {
        self.display.map(|display| format!("{} {}", self.import, display))
    }

    /// Documentation link for the requested package.
    pub fn doc_url(&self) -> String {
        if self.subpath.is_empty() {
            format!("{DOC_SITE}/{}", self.import)
        } else {
            format!("{DOC_SITE}/{}/{}", self.import, self.subpath)
        }
    }

    pub fn render(&self) -> String {
        let import = escape(&self.go_import()).into_owned();
        let source = self
            .go_source()
            .map(|source| {
                format!("<meta name=\"go-source\" content=\"{}\">\n", escape(&source))
            })
            .unwrap_or_default();
        let doc_url = self.doc_url();
        let doc_url = escape(&doc_url);

        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"/>\n\
             <meta name=\"go-import\" content=\"{import}\">\n\
             {source}\
             <meta http-equiv=\"refresh\" content=\"0; url={doc_url}\">\n\
             </head>\n\
             <body>\n\
             Nothing to see here; <a href=\"{doc_url}\">see the package on pkg.go.dev</a>.\n\
             </body>\n\
             </html>\n"
        )
    }
}

/// Render the index page for `/`.
pub fn render_index<'a>(host: &str, paths: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<body>\n<ul>\n");
    for path in paths {
        let import = format!("{host}{path}");
        let import = escape(&import);
        out.push_str(&format!(
            "<li><a href=\"{DOC_SITE}/{import}\">{import}</a></li>\n"
        ));
    }
    out.push_str("</ul>\n</body>\n</html>\n");
    out
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
