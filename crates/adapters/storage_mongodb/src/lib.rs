//! # geotrack-adapter-storage-mongodb
//!
//! `MongoDB` persistence adapter using the official [mongodb](https://docs.rs/mongodb) driver.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `geotrack-app::ports::storage`
//! - Resolve the database from the connection string and verify it is reachable
//! - Map between domain types and BSON documents
//!
//! ## Dependency rule
//! Depends on `geotrack-app` (for port traits) and `geotrack-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod client;
pub mod error;
pub mod location_repo;

pub use client::{Config, Database};
pub use location_repo::MongoLocationRepository;
