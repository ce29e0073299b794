//! # geotrack-domain
//!
//! Pure domain model for the geotrack location logger.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error kinds, timestamps
//! - Define **Location records** (a device's position at a server-assigned instant)
//! - Define **Location readings** (what a client reports, before the server stamps it)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod location;
