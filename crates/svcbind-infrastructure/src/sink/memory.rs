//! In-memory registration sink
//!
//! Holds the registered entries in a concurrent map keyed by service id.
//! The deferred factory is invoked the first time a connector is requested
//! and the built connector is reused afterwards, mirroring singleton
//! semantics in a host container.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use svcbind_domain::error::{Error, Result};
use svcbind_domain::ports::infrastructure::{ConnectorFactory, RegistrationSink};
use svcbind_domain::ports::providers::ServiceConnector;
use svcbind_domain::value_objects::CredentialDescriptor;

struct SinkEntry {
    descriptor: Arc<CredentialDescriptor>,
    factory: ConnectorFactory,
}

/// Concurrent in-memory registration sink
#[derive(Default)]
pub struct InMemorySink {
    entries: DashMap<String, SinkEntry>,
    built: DashMap<String, Arc<dyn ServiceConnector>>,
}

impl InMemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor of one registered entry, failing with
    /// [`Error::UnknownService`] when absent.
    pub fn descriptor(&self, id: &str) -> Result<Arc<CredentialDescriptor>> {
        self.entries
            .get(id)
            .map(|e| Arc::clone(&e.descriptor))
            .ok_or_else(|| Error::unknown_service(id))
    }

    /// Connector for one registered entry, building it on first request.
    pub fn connector(&self, id: &str) -> Result<Arc<dyn ServiceConnector>> {
        if let Some(connector) = self.built.get(id) {
            return Ok(Arc::clone(&connector));
        }

        let entry = self.entries.get(id).ok_or_else(|| Error::unknown_service(id))?;
        let connector = (entry.factory)()?;
        drop(entry);

        self.built.insert(id.to_string(), Arc::clone(&connector));
        debug!(id = %id, "connector built");
        Ok(connector)
    }

    /// Ids of all registered entries, in no particular order
    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key().clone()).collect()
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sink has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RegistrationSink for InMemorySink {
    fn register(
        &self,
        id: &str,
        descriptor: Arc<CredentialDescriptor>,
        factory: ConnectorFactory,
    ) -> Result<()> {
        match self.entries.entry(id.to_string()) {
            Entry::Occupied(_) => Err(Error::registration(id, "duplicate id")),
            Entry::Vacant(slot) => {
                slot.insert(SinkEntry {
                    descriptor,
                    factory,
                });
                Ok(())
            }
        }
    }
}
