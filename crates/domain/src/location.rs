//! Location — a device's reported position, stamped by the server.

use crate::id::{DeviceId, LocationId};
use crate::time::{Timestamp, now};

/// What a client reports. Coordinates are kept as sent; no range check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationReading {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub device_id: DeviceId,
}

impl LocationReading {
    /// Stamp the reading with the current server time.
    ///
    /// Readings never carry their own time, so this is the only way a
    /// [`NewLocation`] gets its timestamp.
    #[must_use]
    pub fn stamp(self) -> NewLocation {
        self.stamp_at(now())
    }

    /// Stamp the reading with the given server time.
    #[must_use]
    pub fn stamp_at(self, timestamp: Timestamp) -> NewLocation {
        NewLocation {
            latitude: self.latitude,
            longitude: self.longitude,
            timestamp,
            device_id: self.device_id,
        }
    }
}

/// A location ready to be persisted; storage assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: Timestamp,
    pub device_id: DeviceId,
}

impl NewLocation {
    /// Attach the identifier assigned by storage.
    #[must_use]
    pub fn with_id(self, id: LocationId) -> Location {
        Location {
            id,
            latitude: self.latitude,
            longitude: self.longitude,
            timestamp: self.timestamp,
            device_id: self.device_id,
        }
    }
}

/// A stored location record. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: Timestamp,
    pub device_id: DeviceId,
}
