use axum::http::StatusCode;

use crate::client::ResourceClient;
use crate::factory::WebApplicationFactory;
use crate::outcome::{HarnessError, TestOutcome};

pub const WEATHER_FORECAST_PATH: &str = "/weatherforecast";

/// GET the forecast route and expect 200 OK. The body is not inspected.
pub async fn check_weather_forecast(
    client: &dyn ResourceClient,
) -> Result<TestOutcome, HarnessError> {
    let response = client.get(WEATHER_FORECAST_PATH).await?;
    Ok(TestOutcome::expect_status(StatusCode::OK, response.status))
}

/// Smoke test against a fresh in-process instance with default configuration
pub async fn run_smoke_test() -> Result<TestOutcome, HarnessError> {
    let factory = WebApplicationFactory::new()?;
    run_smoke_test_with(&factory).await
}

/// Smoke test against an existing factory, so a fixture can share one host
pub async fn run_smoke_test_with(
    factory: &WebApplicationFactory,
) -> Result<TestOutcome, HarnessError> {
    let client = factory.create_client();
    let outcome = check_weather_forecast(&client).await?;
    tracing::info!(path = WEATHER_FORECAST_PATH, %outcome, "In-process smoke test finished");
    Ok(outcome)
}
