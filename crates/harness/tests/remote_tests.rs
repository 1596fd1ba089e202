// Smoke test over a real socket
// Serves the app on an ephemeral port and points the remote client at it

use forecast_api::{build_app, ApiConfig};
use forecast_api_harness::{
    run_remote_smoke_test, HarnessError, RemoteClient, ResourceClient, TestOutcome,
};
use tokio::net::TcpListener;

async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();
    let app = build_app(ApiConfig::default()).expect("Failed to build app");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn remote_weather_forecast_returns_ok() {
    let base_url = spawn_app().await;

    let outcome = run_remote_smoke_test(&base_url).await.unwrap();
    assert_eq!(outcome, TestOutcome::Passed);
}

#[tokio::test]
async fn remote_client_reads_body() {
    let base_url = spawn_app().await;
    let client = RemoteClient::new(&format!("{}/", base_url)).unwrap();
    assert_eq!(client.base_url(), base_url);

    let response = client.get("/health").await.unwrap();
    assert_eq!(response.body.as_ref(), b"Healthy");
}

#[tokio::test]
async fn unreachable_instance_is_request_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = run_remote_smoke_test(&format!("http://{}", addr))
        .await
        .unwrap_err();

    assert!(matches!(err, HarnessError::Request { .. }));
    assert!(err.is_failure());
}
