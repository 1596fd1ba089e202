// Integration tests for request metrics
// Uses a thread-local Prometheus recorder so the global one stays untouched

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use forecast_api::{build_app, metrics_router, ApiConfig};
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[test]
fn test_forecast_requests_are_counted_and_exported() {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    let app = build_app(ApiConfig::default())
        .expect("Failed to build app")
        .merge(metrics_router(handle));

    // Current-thread runtime keeps every poll on this thread, inside the local recorder
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    let (status, body) = metrics::with_local_recorder(&recorder, || {
        runtime.block_on(async {
            let (status, _) = get(app.clone(), "/weatherforecast").await;
            assert_eq!(status, StatusCode::OK);

            get(app, "/metrics").await
        })
    });

    assert_eq!(status, StatusCode::OK);
    assert!(
        body.contains("forecast_requests_total 1"),
        "unexpected metrics output: {body}"
    );
}

#[test]
fn test_metrics_route_renders_empty_recorder() {
    let recorder = PrometheusBuilder::new().build_recorder();
    let app = metrics_router(recorder.handle());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let (status, body) = runtime.block_on(get(app, "/metrics"));

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("forecast_requests_total"));
}
