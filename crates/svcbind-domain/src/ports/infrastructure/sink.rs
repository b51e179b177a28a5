//! Registration Sink Port
//!
//! Outbound contract the registrar drives. The sink is the stand-in for
//! whatever owns named configuration entries in the host application
//! (a DI container, a plain map). Factories are deferred: the sink decides
//! if and when a connector is actually built.

use std::sync::Arc;

use crate::error::Result;
use crate::ports::providers::ServiceConnector;
use crate::value_objects::CredentialDescriptor;

/// Deferred connector constructor handed to the sink at registration time
pub type ConnectorFactory =
    Box<dyn Fn() -> Result<Arc<dyn ServiceConnector>> + Send + Sync + 'static>;

/// Registration sink interface
pub trait RegistrationSink: Send + Sync {
    /// Register one named entry. A rejection (e.g. duplicate id) fails with
    /// [`crate::error::Error::Registration`] naming the offending id; the
    /// registrar keeps going with the remaining entries.
    fn register(
        &self,
        id: &str,
        descriptor: Arc<CredentialDescriptor>,
        factory: ConnectorFactory,
    ) -> Result<()>;
}
