//! Service kind registry entries and resolution

use std::sync::Arc;

use svcbind_domain::error::{Error, Result};
use svcbind_domain::ports::providers::ServiceConnector;
use svcbind_domain::value_objects::CredentialDescriptor;

/// Registry entry for one service kind
///
/// Each kind implementation registers itself with this entry using
/// `#[linkme::distributed_slice(SERVICE_KINDS)]`. The entry carries the
/// static label association plus a factory producing the kind's connector.
pub struct ServiceKindEntry {
    /// Unique kind label (e.g. "oracle", "redis")
    pub label: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// URI schemes this kind claims when no kind hint is present
    pub schemes: &'static [&'static str],
    /// Factory producing the kind-specific connector from a descriptor
    pub factory: fn(Arc<CredentialDescriptor>) -> Result<Arc<dyn ServiceConnector>>,
}

// Auto-collection via linkme distributed slices - kinds submit entries at compile time
#[linkme::distributed_slice]
pub static SERVICE_KINDS: [ServiceKindEntry] = [..];

/// Find the kind entry for a raw binding.
///
/// A kind hint that names a registered label wins; otherwise the first
/// entry claiming the scheme matches. `None` when nothing is registered
/// for either.
pub fn kind_for(scheme: &str, hint: Option<&str>) -> Option<&'static ServiceKindEntry> {
    if let Some(hint) = hint {
        if let Some(entry) = SERVICE_KINDS.iter().find(|e| e.label == hint) {
            return Some(entry);
        }
    }
    SERVICE_KINDS
        .iter()
        .find(|e| e.schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme)))
}

/// Resolve the connector for a descriptor via its kind label.
///
/// The label was assigned from the registry during catalog construction,
/// so a miss here means the registry changed between builds - surfaced as
/// [`Error::UnknownKind`] naming the available labels.
pub fn resolve_connector(descriptor: &Arc<CredentialDescriptor>) -> Result<Arc<dyn ServiceConnector>> {
    let label = descriptor.label();

    for entry in SERVICE_KINDS {
        if entry.label == label {
            return (entry.factory)(Arc::clone(descriptor));
        }
    }

    Err(Error::unknown_kind(
        label,
        SERVICE_KINDS.iter().map(|e| e.label.to_string()).collect(),
    ))
}

/// List all registered service kinds as (label, description) pairs
pub fn list_service_kinds() -> Vec<(&'static str, &'static str)> {
    SERVICE_KINDS
        .iter()
        .map(|e| (e.label, e.description))
        .collect()
}
