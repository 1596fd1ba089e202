use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use forecast_api_models::WeatherForecast;

use crate::state::AppState;

/// Create weather forecast router
pub fn create_router() -> Router<AppState> {
    Router::new().route("/weatherforecast", get(get_weather_forecast))
}

/// Return the next few days of sample forecasts
pub async fn get_weather_forecast(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherForecast>>, StatusCode> {
    metrics::counter!("forecast_requests_total").increment(1);

    let forecasts = state.forecasts.generate().map_err(|e| {
        tracing::error!("Failed to generate forecast: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(forecasts))
}
