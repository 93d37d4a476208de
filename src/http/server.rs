//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create Axum Router with the vanity handler
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve until the shutdown broadcast fires
//! - Swap in a freshly built Site whenever a new configuration arrives
//!
//! # Design Decisions
//! - The Site lives behind `ArcSwap`; handlers take a snapshot per request
//! - A reload that fails to build leaves the current Site in place
//! - Listener and timeout settings are fixed at startup; reloads only
//!   affect host, cache and rules

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use arc_swap::ArcSwap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::VanityConfig;
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::http::response::{render_index, ImportPage};
use crate::observability::metrics;
use crate::vanity::{Site, SiteError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<ArcSwap<Site>>,
}

/// HTTP server for vanity import paths.
pub struct HttpServer {
    router: Router,
    config: VanityConfig,
    site: Arc<ArcSwap<Site>>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails if the configured rules do not build.
    pub fn new(config: VanityConfig) -> Result<Self, SiteError> {
        let site = Arc::new(ArcSwap::from_pointee(Site::from_config(&config)?));
        let state = AppState { site: site.clone() };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            site,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &VanityConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(vanity_handler))
            .route("/{*path}", get(vanity_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
            )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Configurations received on `config_updates` replace the served Site.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<VanityConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            rules = self.site.load().rules.len(),
            "HTTP server starting"
        );

        let site = self.site.clone();
        let reloader = tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                apply_config(&site, &config);
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        reloader.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the startup config.
    pub fn config(&self) -> &VanityConfig {
        &self.config
    }

    /// The Site currently being served.
    pub fn site(&self) -> Arc<Site> {
        self.site.load_full()
    }
}

/// Build a Site from `config` and swap it in.
///
/// Returns false (and keeps the current Site) if the rules fail to build.
pub fn apply_config(site: &ArcSwap<Site>, config: &VanityConfig) -> bool {
    match Site::from_config(config) {
        Ok(new_site) => {
            let rules = new_site.rules.len();
            site.store(Arc::new(new_site));
            metrics::record_reload("applied");
            tracing::info!(rules, "Configuration reloaded");
            true
        }
        Err(e) => {
            metrics::record_reload("rejected");
            tracing::error!(error = %e, "Rejected new configuration; keeping current rules");
            false
        }
    }
}

/// Resolve the request path and render the matching page.
async fn vanity_handler(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let start = Instant::now();
    let site = state.site.load_full();
    let path = uri.path();
    let request_id = request_id(&headers);

    let host = site
        .host
        .as_deref()
        .or_else(|| headers.get(header::HOST).and_then(|h| h.to_str().ok()))
        .unwrap_or_default();

    if let Some(resolution) = site.resolve(path) {
        tracing::debug!(
            request_id,
            path,
            import_path = resolution.import_path,
            repo = %resolution.entry.repo,
            "Resolved import path"
        );
        let body = ImportPage::new(host, &resolution).render();
        metrics::record_request("import", 200, start);
        return html(site.cache_max_age, body);
    }

    if path == "/" {
        metrics::record_request("index", 200, start);
        return html(site.cache_max_age, render_index(host, site.literal_paths()));
    }

    tracing::debug!(request_id, path, "No rule matched");
    metrics::record_request("not_found", 404, start);
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn html(cache_max_age: u64, body: String) -> Response {
    (
        [(header::CACHE_CONTROL, format!("public, max-age={cache_max_age}"))],
        Html(body),
    )
        .into_response()
}
