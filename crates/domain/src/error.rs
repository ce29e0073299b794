//! Error kinds shared across the workspace.
//!
//! Every layer defines its own typed errors and converts them into
//! [`TrackerError`] at the port boundary.

/// A type-erased error coming from an adapter (driver, parser, IO).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error for geotrack.
///
/// `Configuration` and `Connection` only happen during startup and stop the
/// process. `Write` and `Read` happen per request and are reported to the
/// client without affecting other requests.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Missing or malformed process configuration.
    #[error("configuration error: {0}")]
    Configuration(#[source] BoxError),

    /// The storage backend could not be reached.
    #[error("connection error: {0}")]
    Connection(#[source] BoxError),

    /// Persisting a location failed.
    #[error("{0}")]
    Write(#[source] BoxError),

    /// Reading locations failed.
    #[error("{0}")]
    Read(#[source] BoxError),
}

impl TrackerError {
    /// Wrap an adapter error as a [`TrackerError::Write`].
    pub fn write(err: impl Into<BoxError>) -> Self {
        Self::Write(err.into())
    }

    /// Wrap an adapter error as a [`TrackerError::Read`].
    pub fn read(err: impl Into<BoxError>) -> Self {
        Self::Read(err.into())
    }
}
