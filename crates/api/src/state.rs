use std::sync::Arc;

use anyhow::Context;

use crate::forecast::ForecastService;
use crate::settings::ApiConfig;

/// Shared state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub forecasts: Arc<ForecastService>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let forecasts = ForecastService::new(&config.forecast)
            .context("Invalid forecast configuration")?;

        tracing::debug!(
            days = config.forecast.days,
            expose_health = config.server.expose_health,
            "Application state initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            forecasts: Arc::new(forecasts),
        })
    }
}
