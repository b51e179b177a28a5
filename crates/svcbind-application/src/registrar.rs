//! Registrar
//!
//! Walks a resolved catalog and hands every entry to a registration sink
//! as a named, deferred connector factory. Registration is not
//! transactional: a rejected entry is recorded and the remaining entries
//! are still attempted, matching the best-effort nature of bulk
//! registration into a host container.

use std::sync::Arc;

use tracing::{debug, warn};

use svcbind_domain::error::Error;
use svcbind_domain::ports::infrastructure::{ConnectorFactory, RegistrationSink};

use crate::catalog::ServiceCatalog;
use crate::ports::registry::resolve_connector;

/// Result of one bulk registration pass
#[derive(Debug, Default)]
pub struct RegistrationOutcome {
    /// Number of entries the sink accepted
    pub registered: usize,
    /// Per-entry failures, each an [`Error::Registration`] naming the
    /// offending id
    pub failures: Vec<Error>,
}

impl RegistrationOutcome {
    /// Whether every catalog entry was accepted
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Register every catalog entry with the sink, in ascending id order.
///
/// The factory handed to the sink is deferred: the connector is only built
/// when the sink asks for it. Failures do not roll back previously
/// registered entries.
pub fn register_all(catalog: &ServiceCatalog, sink: &dyn RegistrationSink) -> RegistrationOutcome {
    let mut outcome = RegistrationOutcome::default();

    for descriptor in catalog.entries_by_id() {
        let id = descriptor.id().to_string();

        let captured = Arc::clone(&descriptor);
        let factory: ConnectorFactory = Box::new(move || resolve_connector(&captured));

        match sink.register(&id, Arc::clone(&descriptor), factory) {
            Ok(()) => {
                debug!(id = %id, label = descriptor.label(), "registered service");
                outcome.registered += 1;
            }
            Err(err) => {
                let err = match err {
                    Error::Registration { .. } => err,
                    other => Error::registration(id.as_str(), other.to_string()),
                };
                warn!(id = %id, error = %err, "service registration rejected");
                outcome.failures.push(err);
            }
        }
    }

    outcome
}
