//! Infrastructure service ports

/// Outbound registration sink port
pub mod sink;
/// Inbound raw binding source port
pub mod source;

pub use sink::{ConnectorFactory, RegistrationSink};
pub use source::{BindingSource, RawBinding};
