//! # svcbind Infrastructure Layer
//!
//! Cross-cutting technical concerns: configuration loading, logging setup,
//! the concrete binding-source adapters, and the in-memory registration
//! sink.
//!
//! This crate depends on `svcbind-providers` so that the linkme kind
//! registrations are linked into any artifact built on top of it.

// Service kinds must be linked even though nothing here calls them directly
use svcbind_providers as _;

/// Configuration types and loader
pub mod config;
/// Shared constants
pub mod constants;
/// Structured logging with tracing
pub mod logging;
/// Registration sink implementations
pub mod sink;
/// Binding source implementations
pub mod source;

pub use config::{AppConfig, CatalogConfig, ConfigLoader, LoggingConfig, SourceConfig};
pub use sink::InMemorySink;
pub use source::{EnvBindingSource, StaticBindingSource};
