//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (path, request_id, outcome)
//! - Request ID flows from the request-id layer into handler logs
//! - Metrics are cheap; without an installed recorder they are no-ops

pub mod logging;
pub mod metrics;
