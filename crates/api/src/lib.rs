use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod forecast;
pub mod routes;
pub mod settings;
pub mod state;

pub use forecast::*;
pub use routes::prometheus::metrics_router;
pub use settings::*;
pub use state::AppState;

/// Assemble the application router for the given state
pub fn create_app(state: AppState) -> Router {
    let mut router = Router::new().merge(routes::weather::create_router());

    if state.config.server.expose_health {
        router = router.merge(routes::health::create_router());
    }

    let cors_enabled = state.config.server.cors_enabled;
    let mut app = router
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Build the application from configuration.
///
/// This is the entry point both the server binary and the test harness bind
/// to; configuration errors surface here, before any request is served.
pub fn build_app(config: ApiConfig) -> anyhow::Result<Router> {
    let state = AppState::new(config)?;
    Ok(create_app(state))
}
