//! Service catalog
//!
//! In-memory mapping from service id to credential descriptor, preserving
//! first-seen order for label lookups. Catalogs are built once and read
//! only; rebuilding produces a new instance.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use svcbind_domain::error::{Error, Result};
use svcbind_domain::ports::infrastructure::RawBinding;
use svcbind_domain::value_objects::{CredentialDescriptor, CredentialUri};

use crate::ports::registry::kind_for;

/// Policy for raw binding records that fail to parse or map to a kind
///
/// The default aborts the whole build: a partial catalog is worse than
/// none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// The first bad entry fails the whole build
    #[default]
    Abort,
    /// Bad entries are dropped with a warning
    Skip,
}

/// Read-only mapping from service id to credential descriptor
#[derive(Debug, Default)]
pub struct ServiceCatalog {
    entries: Vec<Arc<CredentialDescriptor>>,
    index: HashMap<String, usize>,
}

impl ServiceCatalog {
    /// Look up one descriptor by id, failing with
    /// [`Error::UnknownService`] when absent.
    pub fn get(&self, id: &str) -> Result<Arc<CredentialDescriptor>> {
        self.index
            .get(id)
            .map(|&i| Arc::clone(&self.entries[i]))
            .ok_or_else(|| Error::unknown_service(id))
    }

    /// All descriptors of one kind, in first-seen order. Empty when none
    /// match - not an error.
    pub fn by_label(&self, label: &str) -> Vec<Arc<CredentialDescriptor>> {
        self.entries
            .iter()
            .filter(|d| d.label() == label)
            .map(Arc::clone)
            .collect()
    }

    /// Iterate all descriptors in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CredentialDescriptor>> {
        self.entries.iter()
    }

    /// All descriptors in ascending id order (the registrar's iteration
    /// order)
    pub fn entries_by_id(&self) -> Vec<Arc<CredentialDescriptor>> {
        let mut entries: Vec<_> = self.entries.iter().map(Arc::clone).collect();
        entries.sort_by(|a, b| a.id().cmp(b.id()));
        entries
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, descriptor: CredentialDescriptor) -> Result<()> {
        if self.index.contains_key(descriptor.id()) {
            return Err(Error::malformed_credential(
                descriptor.id(),
                "duplicate service id",
            ));
        }
        self.index
            .insert(descriptor.id().to_string(), self.entries.len());
        self.entries.push(Arc::new(descriptor));
        Ok(())
    }
}

/// Builds a [`ServiceCatalog`] from raw binding records
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogBuilder {
    policy: MalformedPolicy,
}

impl CatalogBuilder {
    /// Create a builder with the given malformed-entry policy
    pub fn new(policy: MalformedPolicy) -> Self {
        Self { policy }
    }

    /// Parse every raw binding into a descriptor and assemble the catalog.
    ///
    /// Under [`MalformedPolicy::Abort`] the first bad entry propagates;
    /// under [`MalformedPolicy::Skip`] it is dropped with a warning that
    /// carries the offending id, never the credentials.
    pub fn build(&self, bindings: Vec<RawBinding>) -> Result<ServiceCatalog> {
        let mut catalog = ServiceCatalog::default();

        for binding in bindings {
            match Self::descriptor_from(&binding).and_then(|d| catalog.insert(d)) {
                Ok(()) => {}
                Err(err) => match self.policy {
                    MalformedPolicy::Abort => return Err(err),
                    MalformedPolicy::Skip => {
                        warn!(id = %binding.id, error = %err, "skipping malformed service binding");
                    }
                },
            }
        }

        Ok(catalog)
    }

    fn descriptor_from(binding: &RawBinding) -> Result<CredentialDescriptor> {
        let entry = kind_for(&binding.scheme, binding.kind.as_deref()).ok_or_else(|| {
            Error::unknown_kind(
                binding.kind.clone().unwrap_or_else(|| binding.scheme.clone()),
                crate::ports::registry::list_service_kinds()
                    .into_iter()
                    .map(|(label, _)| label.to_string())
                    .collect(),
            )
        })?;

        let parsed = CredentialUri::parse(&binding.uri, &binding.scheme)?;
        CredentialDescriptor::new(binding.id.as_str(), entry.label, parsed)
    }
}
