//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use geotrack_app::ports::LocationRepository;

use crate::assets::Assets;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the JSON API and the PWA shell routes at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive
/// [`CorsLayer`] so the API can be called from any origin.
pub fn build<LR>(state: AppState<LR>, assets: &Assets) -> Router
where
    LR: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .merge(crate::assets::routes(assets))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
