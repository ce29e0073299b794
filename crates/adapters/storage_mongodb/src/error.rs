//! Storage-specific error type wrapping driver errors.

use geotrack_domain::error::TrackerError;

/// Errors originating from the `MongoDB` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The `MONGODB_CONNECTION_STRING` variable was not set.
    #[error("MongoDB connection string is not set")]
    MissingConnectionString,

    /// The client could not be created or the server did not answer.
    #[error("failed to connect to database `{database}`: {source}")]
    Connect {
        database: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// A driver operation failed.
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    /// The server assigned an `_id` that is not an `ObjectId`.
    #[error("unexpected inserted id {0}")]
    UnexpectedId(mongodb::bson::Bson),

    /// A stored timestamp is outside the range chrono can represent.
    #[error("timestamp out of range: {0}ms")]
    TimestampOutOfRange(i64),
}

/// Conversion used at startup: anything going wrong before the server
/// accepts traffic is either a configuration or a connection problem.
impl From<StorageError> for TrackerError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::MissingConnectionString => Self::Configuration(Box::new(err)),
            other => Self::Connection(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_missing_connection_string() {
        let err = StorageError::MissingConnectionString;
        assert_eq!(err.to_string(), "MongoDB connection string is not set");
    }

    #[test]
    fn should_convert_missing_connection_string_to_configuration_error() {
        let err: TrackerError = StorageError::MissingConnectionString.into();
        assert!(matches!(err, TrackerError::Configuration(_)));
    }

    #[test]
    fn should_convert_other_errors_to_connection_error() {
        let err: TrackerError = StorageError::TimestampOutOfRange(i64::MAX).into();
        assert!(matches!(err, TrackerError::Connection(_)));
    }

    #[test]
    fn should_display_unexpected_id() {
        let err = StorageError::UnexpectedId(mongodb::bson::Bson::Int32(7));
        assert_eq!(err.to_string(), "unexpected inserted id 7");
    }
}
