//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod locations;

use axum::Router;
use axum::routing::{get, post};

use geotrack_app::ports::LocationRepository;

use crate::state::AppState;

/// Build the JSON API sub-router.
///
/// Paths are mounted at the root because the PWA calls them there.
pub fn routes<LR>() -> Router<AppState<LR>>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/save-location", post(locations::save::<LR>))
        .route("/get-locations", get(locations::list::<LR>))
}
