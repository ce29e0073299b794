//! # geotrack-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** used by the PWA
//!   (`POST /save-location`, `GET /get-locations`)
//! - Serve the **PWA shell**: the HTML page, the service worker and the
//!   manifest, straight from disk
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `geotrack-app` (for port traits and services) and `geotrack-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod assets;
pub mod error;
pub mod router;
pub mod state;
