//! Storage port — repository trait for location records.

use std::future::Future;

use geotrack_domain::error::TrackerError;
use geotrack_domain::id::{DeviceId, LocationId};
use geotrack_domain::location::{Location, NewLocation};

/// Repository for persisting and querying [`Location`]s.
///
/// Records are append-only: there is no update or delete.
pub trait LocationRepository {
    /// Persist a new location and return the identifier storage assigned to it.
    ///
    /// Failures are reported as [`TrackerError::Write`].
    fn insert(
        &self,
        location: NewLocation,
    ) -> impl Future<Output = Result<LocationId, TrackerError>> + Send;

    /// Find at most `limit` locations of a device, newest first.
    ///
    /// Failures are reported as [`TrackerError::Read`].
    fn find_recent_by_device(
        &self,
        device_id: DeviceId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Location>, TrackerError>> + Send;
}
