//! Location service — use-cases for recording and listing device locations.

use geotrack_domain::error::TrackerError;
use geotrack_domain::id::{DeviceId, LocationId};
use geotrack_domain::location::{Location, LocationReading};

use crate::ports::LocationRepository;

/// Maximum number of locations returned by [`LocationService::list`].
pub const RECENT_LIMIT: usize = 50;

/// Application service for location ingest and queries.
pub struct LocationService<R> {
    repo: R,
}

impl<R: LocationRepository> LocationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stamp a reading with the current UTC time and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Write`] propagated from the repository.
    pub async fn save(&self, reading: LocationReading) -> Result<LocationId, TrackerError> {
        let location = reading.stamp();
        let device_id = location.device_id.clone();
        let id = self.repo.insert(location).await?;
        tracing::debug!(%device_id, location_id = %id, "location saved");
        Ok(id)
    }

    /// List the [`RECENT_LIMIT`] most recent locations of a device, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Read`] propagated from the repository.
    pub async fn list(&self, device_id: DeviceId) -> Result<Vec<Location>, TrackerError> {
        let locations = self
            .repo
            .find_recent_by_device(device_id, RECENT_LIMIT)
            .await?;
        tracing::debug!(count = locations.len(), "locations fetched");
        Ok(locations)
    }
}
