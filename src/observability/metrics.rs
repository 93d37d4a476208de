//! Metrics collection and exposition.
//!
//! # Metrics
//! - `vanity_requests_total` (counter): requests by outcome, status
//! - `vanity_request_duration_seconds` (histogram): latency by outcome
//! - `vanity_config_reloads_total` (counter): reloads by result

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install Prometheus exporter"),
    }
}

/// Record one served request.
///
/// `outcome` is one of "import", "index", "not_found".
pub fn record_request(outcome: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "vanity_requests_total",
        "outcome" => outcome,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("vanity_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

/// Record a configuration reload attempt ("applied", "rejected", "invalid").
pub fn record_reload(result: &'static str) {
    metrics::counter!("vanity_config_reloads_total", "result" => result).increment(1);
}
