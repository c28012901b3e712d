//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Expose a Prometheus-compatible metrics endpoint
//! - Track per-project request counts and latency
//!
//! # Metrics
//! - `issues_requests_total` (counter): total requests by method, status, project
//! - `issues_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Recording is a no-op until the exporter is installed, so tests and
//!   metrics-disabled deployments pay nothing

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, project: &str, start: Instant) {
    counter!(
        "issues_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "project" => project.to_string(),
    )
    .increment(1);
    histogram!(
        "issues_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "project" => project.to_string(),
    )
    .record(start.elapsed().as_secs_f64());
}
