//! Static in-process binding source
//!
//! Serves a fixed set of binding records. Useful for tests, fixtures, and
//! development without a hosting platform.

use async_trait::async_trait;

use svcbind_domain::error::Result;
use svcbind_domain::ports::infrastructure::{BindingSource, RawBinding};

/// Binding source over a fixed record set
#[derive(Debug, Clone, Default)]
pub struct StaticBindingSource {
    bindings: Vec<RawBinding>,
}

impl StaticBindingSource {
    /// Create a source serving the given records
    pub fn new(bindings: Vec<RawBinding>) -> Self {
        Self { bindings }
    }
}

#[async_trait]
impl BindingSource for StaticBindingSource {
    async fn fetch_raw_bindings(&self) -> Result<Vec<RawBinding>> {
        Ok(self.bindings.clone())
    }
}
