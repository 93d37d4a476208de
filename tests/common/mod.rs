//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::mpsc;
use vanity_server::config::{parse_config, VanityConfig};
use vanity_server::http::HttpServer;
use vanity_server::lifecycle::Shutdown;

/// A running server on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    #[allow(dead_code)]
    pub updates: mpsc::UnboundedSender<VanityConfig>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server for the given TOML configuration.
pub async fn start_server(config: &str) -> TestServer {
    let config = parse_config(config).expect("valid test config");
    let server = HttpServer::new(config).expect("rules build");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let (updates, config_updates) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let _ = server.run(listener, config_updates, server_shutdown).await;
    });

    TestServer {
        addr,
        shutdown,
        updates,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Extract the content of `<meta name="{name}" content="...">`.
#[allow(dead_code)]
pub fn find_meta(body: &str, name: &str) -> Option<String> {
    let sep = format!("<meta name=\"{name}\" content=\"");
    let start = body.find(&sep)? + sep.len();
    let len = body[start..].find('"')?;
    Some(body[start..start + len].to_string())
}
