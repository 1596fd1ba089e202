use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;

/// Serve the recorder's metrics in Prometheus text format at `/metrics`
pub fn metrics_router(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || std::future::ready(handle.render())))
}
