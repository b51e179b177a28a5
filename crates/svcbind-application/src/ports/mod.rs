//! Application Port Interfaces
//!
//! The kind registry is the one application-level port: service kinds are
//! contributed by the provider crate at link time and resolved here.

/// Service-kind registry
pub mod registry;
