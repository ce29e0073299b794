//! `MongoDB` implementation of [`LocationRepository`].

use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Bson, Document, doc};
use serde::{Deserialize, Serialize};

use geotrack_app::ports::LocationRepository;
use geotrack_domain::error::TrackerError;
use geotrack_domain::id::{DeviceId, LocationId};
use geotrack_domain::location::{Location, NewLocation};
use geotrack_domain::time::Timestamp;

use crate::error::StorageError;

/// Shape of a document in the `locations` collection.
///
/// Coordinates are stored as `null` when the client did not send them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timestamp: bson::DateTime,
    device_id: String,
}

impl From<NewLocation> for LocationDocument {
    fn from(location: NewLocation) -> Self {
        Self {
            id: None,
            latitude: location.latitude,
            longitude: location.longitude,
            timestamp: bson::DateTime::from_millis(location.timestamp.timestamp_millis()),
            device_id: location.device_id.into_inner(),
        }
    }
}

impl TryFrom<LocationDocument> for Location {
    type Error = StorageError;

    fn try_from(document: LocationDocument) -> Result<Self, Self::Error> {
        let millis = document.timestamp.timestamp_millis();
        let timestamp = Timestamp::from_timestamp_millis(millis)
            .ok_or(StorageError::TimestampOutOfRange(millis))?;

        Ok(Self {
            id: LocationId::new(document.id.map(|id| id.to_hex()).unwrap_or_default()),
            latitude: document.latitude,
            longitude: document.longitude,
            timestamp,
            device_id: DeviceId::new(document.device_id),
        })
    }
}

/// Stringify the `_id` the server assigned on insert.
fn inserted_id(id: Bson) -> Result<LocationId, StorageError> {
    match id {
        Bson::ObjectId(oid) => Ok(LocationId::new(oid.to_hex())),
        other => Err(StorageError::UnexpectedId(other)),
    }
}

/// Sort order for recent-first queries.
///
/// Stored timestamps have millisecond precision, so saves within the same
/// millisecond tie. `ObjectId`s grow with insert order and break the tie.
fn recent_first() -> Document {
    doc! { "timestamp": -1, "_id": -1 }
}

/// `MongoDB`-backed location repository.
pub struct MongoLocationRepository {
    collection: Collection<LocationDocument>,
}

impl MongoLocationRepository {
    /// Create a new repository on the given collection.
    #[must_use]
    pub fn new(collection: Collection<LocationDocument>) -> Self {
        Self { collection }
    }

    async fn insert_document(&self, location: NewLocation) -> Result<LocationId, StorageError> {
        let result = self
            .collection
            .insert_one(LocationDocument::from(location))
            .await?;
        inserted_id(result.inserted_id)
    }

    async fn find_documents(
        &self,
        device_id: DeviceId,
        limit: usize,
    ) -> Result<Vec<Location>, StorageError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let documents: Vec<LocationDocument> = self
            .collection
            .find(doc! { "device_id": device_id.as_str() })
            .sort(recent_first())
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Location::try_from).collect()
    }
}

impl LocationRepository for MongoLocationRepository {
    async fn insert(&self, location: NewLocation) -> Result<LocationId, TrackerError> {
        self.insert_document(location)
            .await
            .map_err(TrackerError::write)
    }

    async fn find_recent_by_device(
        &self,
        device_id: DeviceId,
        limit: usize,
    ) -> Result<Vec<Location>, TrackerError> {
        self.find_documents(device_id, limit)
            .await
            .map_err(TrackerError::read)
    }
}
