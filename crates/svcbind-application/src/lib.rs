//! # svcbind Application Layer
//!
//! Orchestrates the service-binding flow: raw binding data is parsed into
//! a [`catalog::ServiceCatalog`], the catalog is cached behind the
//! single-flight [`resolver::CatalogResolver`], and the
//! [`registrar`] hands every entry to a registration sink as a named,
//! lazily-constructible connector.
//!
//! The service-kind registry lives here as a linkme distributed slice;
//! `svcbind-providers` submits one entry per supported kind at link time.

/// Service catalog and its builder
pub mod catalog;
/// Application port interfaces (kind registry)
pub mod ports;
/// Registrar driving a registration sink
pub mod registrar;
/// Lazy single-flight catalog resolution
pub mod resolver;

pub use catalog::{CatalogBuilder, MalformedPolicy, ServiceCatalog};
pub use ports::registry::{
    SERVICE_KINDS, ServiceKindEntry, kind_for, list_service_kinds, resolve_connector,
};
pub use registrar::{RegistrationOutcome, register_all};
pub use resolver::CatalogResolver;
