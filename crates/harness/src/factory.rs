use axum::Router;
use forecast_api::{build_app, ApiConfig};

use crate::client::TestClient;
use crate::outcome::HarnessError;

/// Scoped in-process host for the application.
///
/// Owns one instance of the router built from the application's entry
/// point. Clients share that instance; it is released when the factory is
/// dropped.
pub struct WebApplicationFactory {
    app: Router,
}

impl WebApplicationFactory {
    /// Build the application with default configuration
    pub fn new() -> Result<Self, HarnessError> {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> Result<Self, HarnessError> {
        let app = build_app(config).map_err(|e| {
            tracing::error!("Application failed to start: {:#}", e);
            HarnessError::Setup(format!("{:#}", e))
        })?;

        tracing::debug!("In-process application started");
        Ok(Self { app })
    }

    /// Wrap an already-built router
    pub fn from_router(app: Router) -> Self {
        Self { app }
    }

    pub fn create_client(&self) -> TestClient {
        TestClient::new(self.app.clone())
    }
}

impl Drop for WebApplicationFactory {
    fn drop(&mut self) {
        tracing::debug!("In-process application torn down");
    }
}
