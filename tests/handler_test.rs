//! End-to-end tests: configuration in, go-import metadata out.

use reqwest::StatusCode;

mod common;

use common::{client, find_meta, start_server};

struct Case {
    name: &'static str,
    config: &'static str,
    path: &'static str,
    go_import: &'static str,
    go_source: &'static str,
}

const CASES: &[Case] = &[
    Case {
        name: "explicit display",
        config: r#"
            host = "example.com"
            [paths."/portmidi"]
            repo = "https://github.com/rakyll/portmidi"
            display = "https://github.com/rakyll/portmidi _ _"
        "#,
        path: "/portmidi",
        go_import: "example.com/portmidi git https://github.com/rakyll/portmidi",
        go_source: "example.com/portmidi https://github.com/rakyll/portmidi _ _",
    },
    Case {
        name: "display GitHub inference",
        config: r#"
            host = "example.com"
            [paths."/portmidi"]
            repo = "https://github.com/rakyll/portmidi"
        "#,
        path: "/portmidi",
        go_import: "example.com/portmidi git https://github.com/rakyll/portmidi",
        go_source: "example.com/portmidi https://github.com/rakyll/portmidi https://github.com/rakyll/portmidi/tree/master{/dir} https://github.com/rakyll/portmidi/blob/master{/dir}/{file}#L{line}",
    },
    Case {
        name: "Bitbucket Mercurial",
        config: r#"
            host = "example.com"
            [paths."/gopdf"]
            repo = "https://bitbucket.org/zombiezen/gopdf"
            vcs = "hg"
        "#,
        path: "/gopdf",
        go_import: "example.com/gopdf hg https://bitbucket.org/zombiezen/gopdf",
        go_source: "example.com/gopdf https://bitbucket.org/zombiezen/gopdf https://bitbucket.org/zombiezen/gopdf/src/default{/dir} https://bitbucket.org/zombiezen/gopdf/src/default{/dir}/{file}#{file}-{line}",
    },
    Case {
        name: "Bitbucket Git",
        config: r#"
            host = "example.com"
            [paths."/mygit"]
            repo = "https://bitbucket.org/zombiezen/mygit"
            vcs = "git"
        "#,
        path: "/mygit",
        go_import: "example.com/mygit git https://bitbucket.org/zombiezen/mygit",
        go_source: "example.com/mygit https://bitbucket.org/zombiezen/mygit https://bitbucket.org/zombiezen/mygit/src/default{/dir} https://bitbucket.org/zombiezen/mygit/src/default{/dir}/{file}#{file}-{line}",
    },
    Case {
        name: "subpath",
        config: r#"
            host = "example.com"
            [paths."/portmidi"]
            repo = "https://github.com/rakyll/portmidi"
            display = "https://github.com/rakyll/portmidi _ _"
        "#,
        path: "/portmidi/foo",
        go_import: "example.com/portmidi git https://github.com/rakyll/portmidi",
        go_source: "example.com/portmidi https://github.com/rakyll/portmidi _ _",
    },
    Case {
        name: "subpath with trailing config slash",
        config: r#"
            host = "example.com"
            [paths."/portmidi/"]
            repo = "https://github.com/rakyll/portmidi"
            display = "https://github.com/rakyll/portmidi _ _"
        "#,
        path: "/portmidi/foo",
        go_import: "example.com/portmidi git https://github.com/rakyll/portmidi",
        go_source: "example.com/portmidi https://github.com/rakyll/portmidi _ _",
    },
    Case {
        name: "path rules",
        config: r#"
            host = "example.com"
            [[path_rules]]
            pattern = "/{name}"
            repo = "https://github.com/rakyll/{name}"
            display = "https://github.com/rakyll/{name} _ _"
        "#,
        path: "/portmidi",
        go_import: "example.com/portmidi git https://github.com/rakyll/portmidi",
        go_source: "example.com/portmidi https://github.com/rakyll/portmidi _ _",
    },
    Case {
        name: "path rules come last",
        config: r#"
            host = "example.com"
            [paths."/portmidi/"]
            repo = "https://github.com/rakyll/modo"
            display = "https://github.com/rakyll/modo_ _"

            [[path_rules]]
            pattern = "/{name}"
            repo = "https://github.com/rakyll/{name}"
            display = "https://github.com/rakyll/{name} _ _"
        "#,
        path: "/portmidi",
        go_import: "example.com/portmidi git https://github.com/rakyll/modo",
        go_source: "example.com/portmidi https://github.com/rakyll/modo_ _",
    },
    Case {
        name: "first path rule wins",
        config: r#"
            host = "example.com"
            [[path_rules]]
            pattern = "/{name}"
            repo = "https://github.com/first/{name}"

            [[path_rules]]
            pattern = "/{name}"
            repo = "https://github.com/second/{name}"
        "#,
        path: "/anything",
        go_import: "example.com/anything git https://github.com/first/anything",
        go_source: "example.com/anything https://github.com/first/anything https://github.com/first/anything/tree/master{/dir} https://github.com/first/anything/blob/master{/dir}/{file}#L{line}",
    },
    Case {
        name: "path rule with prefix and suffix",
        config: r#"
            host = "example.com"
            [[path_rules]]
            pattern = "/x/{repo}.v2"
            repo = "https://github.com/x/{repo}"
            display = "https://github.com/x/{repo} _ _"
        "#,
        path: "/x/lib.v2",
        go_import: "example.com/x/lib.v2 git https://github.com/x/lib",
        go_source: "example.com/x/lib.v2 https://github.com/x/lib _ _",
    },
    Case {
        name: "placeholder does not span slash",
        config: r#"
            host = "example.com"
            [[path_rules]]
            pattern = "/{name}"
            repo = "https://github.com/a/{name}"
            display = "https://github.com/a/{name} _ _"

            [[path_rules]]
            pattern = "/{name}/v2"
            repo = "https://github.com/b/{name}"
            display = "https://github.com/b/{name} _ _"
        "#,
        path: "/lib/v2",
        go_import: "example.com/lib/v2 git https://github.com/b/lib",
        go_source: "example.com/lib/v2 https://github.com/b/lib _ _",
    },
];

#[tokio::test]
async fn test_handler() {
    let client = client();

    for case in CASES {
        let server = start_server(case.config).await;
        let res = client
            .get(server.url(case.path))
            .send()
            .await
            .unwrap_or_else(|e| panic!("{}: request failed: {e}", case.name));

        assert_eq!(res.status(), StatusCode::OK, "{}: status", case.name);
        let body = res.text().await.unwrap();

        assert_eq!(
            find_meta(&body, "go-import").as_deref(),
            Some(case.go_import),
            "{}: go-import",
            case.name
        );
        assert_eq!(
            find_meta(&body, "go-source").as_deref(),
            Some(case.go_source),
            "{}: go-source",
            case.name
        );
    }
}

#[tokio::test]
async fn test_unmatched_paths_are_not_found() {
    let server = start_server(
        r#"
        host = "example.com"
        [paths."/portmidi"]
        repo = "https://github.com/rakyll/portmidi"
        "#,
    )
    .await;
    let client = client();

    for path in ["/foo", "/zzz", "/portmidiabc"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_path_rules_match_whole_path_only() {
    let server = start_server(
        r#"
        host = "example.com"
        [[path_rules]]
        pattern = "/{name}"
        repo = "https://github.com/rakyll/{name}"

        [[path_rules]]
        pattern = "/x/{repo}.v2"
        repo = "https://github.com/x/{repo}"
        "#,
    )
    .await;
    let client = client();

    for path in ["/a/b", "/portmidi/sub", "/x/lib.v2/sub/pkg", "/x/.v2"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_index_and_cache_headers() {
    let server = start_server(
        r#"
        host = "example.com"
        cache_max_age = 120
        [paths."/abc"]
        repo = "https://github.com/rakyll/abc"
        [paths."/portmidi"]
        repo = "https://github.com/rakyll/portmidi"
        "#,
    )
    .await;
    let client = client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["cache-control"], "public, max-age=120");
    let body = res.text().await.unwrap();
    assert!(body.contains("example.com/abc"));
    assert!(body.contains("example.com/portmidi"));

    let res = client.get(server.url("/portmidi/foo?go-get=1")).send().await.unwrap();
    assert_eq!(res.headers()["cache-control"], "public, max-age=120");
    assert!(res.headers().contains_key("x-request-id"));
    let body = res.text().await.unwrap();
    assert!(body.contains("url=https://pkg.go.dev/example.com/portmidi/foo"));
}

#[tokio::test]
async fn test_host_defaults_to_request_host() {
    let server = start_server(
        r#"
        [paths."/portmidi"]
        repo = "https://github.com/rakyll/portmidi"
        "#,
    )
    .await;

    let body = client()
        .get(server.url("/portmidi"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let want = format!(
        "{}/portmidi git https://github.com/rakyll/portmidi",
        server.addr
    );
    assert_eq!(find_meta(&body, "go-import"), Some(want));
}

#[tokio::test]
async fn test_head_request() {
    let server = start_server(
        r#"
        [paths."/portmidi"]
        repo = "https://github.com/rakyll/portmidi"
        "#,
    )
    .await;

    let res = client().head(server.url("/portmidi")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
