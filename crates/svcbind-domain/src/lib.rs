//! # svcbind Domain Layer
//!
//! Core business types for service-binding resolution: the credential
//! descriptor value object, the connection-URI parser, the error taxonomy,
//! and the port traits implemented by the outer layers.
//!
//! This crate has no dependency on other workspace crates. Ports follow the
//! Dependency Inversion Principle: the domain defines the contracts, the
//! provider and infrastructure layers implement them.

/// Error handling types
pub mod error;
/// Domain port interfaces
pub mod ports;
/// Immutable domain value objects
pub mod value_objects;

// Re-export the error types and the most commonly used domain types
pub use error::{Error, Result};
pub use ports::infrastructure::{BindingSource, ConnectorFactory, RawBinding, RegistrationSink};
pub use ports::providers::ServiceConnector;
pub use value_objects::{CredentialDescriptor, CredentialUri};
