//! Service Connector Port
//!
//! The capability every service kind provides: turning a credential
//! descriptor into a kind-specific connection string. Relational kinds
//! build a JDBC-style URL; URI-shaped kinds reproduce the connection URI.

use std::sync::Arc;

use crate::value_objects::CredentialDescriptor;

/// Connector produced for one catalog entry
///
/// A connector is the client-facing configuration object for one bound
/// service. It borrows nothing from the catalog: implementations hold a
/// shared reference to the descriptor they were built from.
pub trait ServiceConnector: Send + Sync + std::fmt::Debug {
    /// Id of the service this connector was built for
    fn id(&self) -> &str;

    /// Kind label of the service (e.g. "oracle", "redis")
    fn label(&self) -> &'static str;

    /// Kind-specific connection string
    fn connection_url(&self) -> String;

    /// The descriptor this connector was built from
    fn descriptor(&self) -> &Arc<CredentialDescriptor>;
}
