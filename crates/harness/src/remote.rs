use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::client::{ResourceClient, TestResponse};
use crate::outcome::{HarnessError, TestOutcome};
use crate::smoke::{check_weather_forecast, WEATHER_FORECAST_PATH};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for a deployed instance reachable over HTTP
#[derive(Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Result<Self, HarnessError> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, HarnessError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HarnessError::Setup(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ResourceClient for RemoteClient {
    async fn get(&self, path: &str) -> Result<TestResponse, HarnessError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| HarnessError::request(path, e))?;

        // reqwest and axum sit on different `http` major versions
        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| HarnessError::request(path, e))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| HarnessError::request(path, e))?;

        tracing::debug!(url = %url, status = %status, "Remote request completed");

        Ok(TestResponse { status, body })
    }
}

/// Smoke test against a deployed instance
pub async fn run_remote_smoke_test(base_url: &str) -> Result<TestOutcome, HarnessError> {
    let client = RemoteClient::new(base_url)?;
    let outcome = check_weather_forecast(&client).await?;
    tracing::info!(
        base_url = client.base_url(),
        path = WEATHER_FORECAST_PATH,
        %outcome,
        "Remote smoke test finished"
    );
    Ok(outcome)
}
