//! JSON handlers for location ingest and queries.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer, Serialize};

use geotrack_app::ports::LocationRepository;
use geotrack_domain::id::{DeviceId, LocationId};
use geotrack_domain::location::{Location, LocationReading};
use geotrack_domain::time::to_iso8601;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for saving a location. Every field is optional.
///
/// Coordinates may be sent as numbers or numeric strings (`"12.9"`).
#[derive(Debug, Default, Deserialize)]
pub struct SaveLocationRequest {
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub longitude: Option<f64>,
    pub device_id: Option<String>,
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Number(f64),
        Text(String),
    }

    match Option::<Coordinate>::deserialize(deserializer)? {
        Some(Coordinate::Number(value)) => Ok(Some(value)),
        Some(Coordinate::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Coordinate::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid coordinate: {text:?}"))),
        None => Ok(None),
    }
}

impl From<SaveLocationRequest> for LocationReading {
    fn from(req: SaveLocationRequest) -> Self {
        Self {
            latitude: req.latitude,
            longitude: req.longitude,
            device_id: DeviceId::or_unknown(req.device_id),
        }
    }
}

/// Query parameters for the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Device to list. Defaults to `unknown`.
    pub device_id: Option<String>,
}

/// Body of a successful save.
#[derive(Debug, Serialize)]
pub struct SavedBody {
    pub status: &'static str,
    pub message: &'static str,
    pub inserted_id: String,
}

/// A location as sent over the wire.
#[derive(Debug, Serialize)]
pub struct LocationBody {
    #[serde(rename = "_id")]
    pub id: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// ISO-8601, e.g. `2024-05-01T08:30:00.123000+00:00`.
    pub timestamp: String,
    pub device_id: String,
}

impl From<Location> for LocationBody {
    fn from(location: Location) -> Self {
        Self {
            timestamp: to_iso8601(location.timestamp),
            id: location.id.into_inner(),
            latitude: location.latitude,
            longitude: location.longitude,
            device_id: location.device_id.into_inner(),
        }
    }
}

/// Possible responses from the save endpoint.
pub enum SaveResponse {
    Ok(Json<SavedBody>),
}

impl SaveResponse {
    fn saved(id: LocationId) -> Self {
        Self::Ok(Json(SavedBody {
            status: "success",
            message: "Location saved",
            inserted_id: id.into_inner(),
        }))
    }
}

impl IntoResponse for SaveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<LocationBody>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /save-location`
pub async fn save<LR>(
    State(state): State<AppState<LR>>,
    payload: Result<Json<SaveLocationRequest>, JsonRejection>,
) -> Result<SaveResponse, ApiError>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let id = state.location_service.save(req.into()).await?;
    Ok(SaveResponse::saved(id))
}

/// `GET /get-locations?device_id=`
pub async fn list<LR>(
    State(state): State<AppState<LR>>,
    Query(params): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    let device_id = DeviceId::or_unknown(params.device_id);
    let locations = state.location_service.list(device_id).await?;
    Ok(ListResponse::Ok(Json(
        locations.into_iter().map(LocationBody::from).collect(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_missing_fields_when_converting_request() {
        let reading = LocationReading::from(SaveLocationRequest::default());
        assert_eq!(reading.latitude, None);
        assert_eq!(reading.longitude, None);
        assert_eq!(reading.device_id.as_str(), "unknown");
    }

    #[test]
    fn should_render_id_and_iso_timestamp() {
        let location = LocationReading {
            latitude: Some(12.9),
            longitude: Some(77.6),
            device_id: DeviceId::from("phone-1"),
        }
        .stamp()
        .with_id(LocationId::new("665f1c2ab9e4d1a7c3f0e812"));
        let expected_timestamp = to_iso8601(location.timestamp);

        let body = serde_json::to_value(LocationBody::from(location)).unwrap();
        assert_eq!(body["_id"], "665f1c2ab9e4d1a7c3f0e812");
        assert_eq!(body["timestamp"], expected_timestamp.as_str());
        assert_eq!(body["device_id"], "phone-1");
        assert_eq!(body["latitude"], 12.9);
    }

    #[test]
    fn should_reject_non_numeric_latitude() {
        let result: Result<SaveLocationRequest, _> =
            serde_json::from_str(r#"{"latitude":"north"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_accept_numeric_string_coordinates() {
        let req: SaveLocationRequest =
            serde_json::from_str(r#"{"latitude":"12.9","longitude":" -77.6 "}"#).unwrap();
        assert_eq!(req.latitude, Some(12.9));
        assert_eq!(req.longitude, Some(-77.6));
    }

    #[test]
    fn should_treat_null_and_blank_coordinates_as_missing() {
        let req: SaveLocationRequest =
            serde_json::from_str(r#"{"latitude":null,"longitude":""}"#).unwrap();
        assert_eq!(req.latitude, None);
        assert_eq!(req.longitude, None);
    }

    #[test]
    fn should_ignore_client_timestamp() {
        let req: SaveLocationRequest =
            serde_json::from_str(r#"{"timestamp":"1999-01-01T00:00:00Z"}"#).unwrap();
        assert!(req.latitude.is_none());
    }
}
