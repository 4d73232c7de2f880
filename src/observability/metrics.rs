//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ssr_requests_total` (counter): dispatched requests by outcome
//! - `ssr_render_duration_seconds` (histogram): time spent rendering and composing
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - The Prometheus exporter is only installed when an address is configured

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const REQUESTS_TOTAL: &str = "ssr_requests_total";
pub const RENDER_DURATION: &str = "ssr_render_duration_seconds";

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one dispatched request.
pub fn record_request(outcome: &'static str) {
    ::metrics::counter!(REQUESTS_TOTAL, "outcome" => outcome).increment(1);
}

/// Record how long the render pipeline took for one request.
pub fn record_render(start: Instant) {
    ::metrics::histogram!(RENDER_DURATION).record(start.elapsed().as_secs_f64());
}
