//! Shared application state for axum handlers.

use std::sync::Arc;

use geotrack_app::ports::LocationRepository;
use geotrack_app::services::location_service::LocationService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<LR> {
    /// Location ingest and query service.
    pub location_service: Arc<LocationService<LR>>,
}

impl<LR> Clone for AppState<LR> {
    fn clone(&self) -> Self {
        Self {
            location_service: Arc::clone(&self.location_service),
        }
    }
}

impl<LR> AppState<LR>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(location_service: LocationService<LR>) -> Self {
        Self {
            location_service: Arc::new(location_service),
        }
    }
}
