use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::outcome::HarnessError;

/// Response captured by a harness client
#[derive(Debug, Clone)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Anything the smoke checks can send a GET through
#[async_trait]
pub trait ResourceClient: Send + Sync {
    async fn get(&self, path: &str) -> Result<TestResponse, HarnessError>;
}

/// Client bound to an in-process router; requests never touch a socket
#[derive(Clone)]
pub struct TestClient {
    app: Router,
}

impl TestClient {
    pub fn new(app: Router) -> Self {
        Self { app }
    }
}

#[async_trait]
impl ResourceClient for TestClient {
    async fn get(&self, path: &str) -> Result<TestResponse, HarnessError> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .map_err(|e| HarnessError::request(path, e))?;

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|never| match never {});

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| HarnessError::request(path, e))?;

        tracing::debug!(path, status = %status, "In-process request completed");

        Ok(TestResponse { status, body })
    }
}
