//! Lazy single-flight catalog resolution
//!
//! Process-wide catalog state initialized on first access. The cache mutex
//! is held across the fetch-and-parse pass, so at most one pass executes
//! even under concurrent first access; every waiting caller then observes
//! the completed catalog. Failures are never cached - a later call retries.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use svcbind_domain::error::{Error, Result};
use svcbind_domain::ports::infrastructure::BindingSource;

use crate::catalog::{CatalogBuilder, MalformedPolicy, ServiceCatalog};

/// Lazily resolves and caches the service catalog
pub struct CatalogResolver {
    source: Arc<dyn BindingSource>,
    builder: CatalogBuilder,
    cache: Mutex<Option<Arc<ServiceCatalog>>>,
}

impl CatalogResolver {
    /// Create a resolver over a binding source
    pub fn new(source: Arc<dyn BindingSource>, policy: MalformedPolicy) -> Self {
        Self {
            source,
            builder: CatalogBuilder::new(policy),
            cache: Mutex::new(None),
        }
    }

    /// Return the cached catalog, fetching and parsing the raw binding
    /// data on first call.
    ///
    /// Source failures surface as [`Error::CatalogUnavailable`]; parse
    /// failures propagate per the builder's [`MalformedPolicy`]. Either
    /// way nothing is cached, so the next call retries.
    pub async fn resolve(&self) -> Result<Arc<ServiceCatalog>> {
        let mut cache = self.cache.lock().await;

        if let Some(catalog) = cache.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = self.fetch_and_build().await?;
        *cache = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Rebuild the catalog from fresh binding data.
    ///
    /// The cache is replaced only on success; on failure the previously
    /// resolved catalog stays untouched and continues to be served.
    pub async fn refresh(&self) -> Result<Arc<ServiceCatalog>> {
        let mut cache = self.cache.lock().await;

        let catalog = self.fetch_and_build().await?;
        *cache = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    async fn fetch_and_build(&self) -> Result<Arc<ServiceCatalog>> {
        let bindings = self
            .source
            .fetch_raw_bindings()
            .await
            .map_err(|e| Error::catalog_unavailable_with_source("failed to fetch raw binding data", e))?;

        let catalog = self.builder.build(bindings)?;
        debug!(services = catalog.len(), "service catalog built");
        Ok(Arc::new(catalog))
    }
}
