//! PWA shell: the HTML page, the service worker and the manifest.
//!
//! Files are served from disk as-is, so editing them does not need a rebuild.

use std::path::{Path, PathBuf};

use axum::Router;
use tower_http::services::ServeFile;

/// Where the shell files live on disk.
#[derive(Debug, Clone)]
pub struct Assets {
    /// HTML page served at `/`.
    pub index_page: PathBuf,
    /// Script served at `/service-worker.js`.
    pub service_worker: PathBuf,
    /// Web app manifest served at `/manifest.json`.
    pub manifest: PathBuf,
}

impl Assets {
    /// Resolve the standard file names inside a templates and a static directory.
    pub fn from_dirs(templates_dir: impl AsRef<Path>, static_dir: impl AsRef<Path>) -> Self {
        let static_dir = static_dir.as_ref();
        Self {
            index_page: templates_dir.as_ref().join("index.html"),
            service_worker: static_dir.join("service-worker.js"),
            manifest: static_dir.join("manifest.json"),
        }
    }
}

/// Build the sub-router serving the shell files.
pub fn routes<S>(assets: &Assets) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route_service("/", ServeFile::new(&assets.index_page))
        .route_service("/service-worker.js", ServeFile::new(&assets.service_worker))
        .route_service("/manifest.json", ServeFile::new(&assets.manifest))
}
