//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and external layers.
//!
//! Ports follow the Dependency Inversion Principle:
//! - High-level modules (domain) define interfaces
//! - Low-level modules (providers, infrastructure) implement them
//!
//! ## Organization
//!
//! - **infrastructure/** - Inbound raw binding data and outbound registration
//! - **providers/** - Service connector port implemented per service kind

/// Infrastructure service ports
pub mod infrastructure;
/// Service connector port
pub mod providers;

// Re-export commonly used port traits for convenience
pub use infrastructure::{BindingSource, ConnectorFactory, RawBinding, RegistrationSink};
pub use providers::ServiceConnector;
