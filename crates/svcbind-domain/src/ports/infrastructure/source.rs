//! Raw Binding Source Port
//!
//! Inbound contract for the platform collaborator that exposes raw
//! service-binding data. The catalog resolver calls this exactly once per
//! catalog (re)build; any retry or timeout policy belongs to the
//! implementation, not to the core.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One raw service-binding record as exposed by the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawBinding {
    /// Stable service identifier
    pub id: String,
    /// URI scheme the connection string is expected to use
    pub scheme: String,
    /// Raw connection string
    pub uri: String,
    /// Optional kind hint; when it names a registered kind label it wins
    /// over scheme matching
    #[serde(default)]
    pub kind: Option<String>,
}

/// Raw binding data provider interface
#[async_trait]
pub trait BindingSource: Send + Sync {
    /// Fetch all raw binding records, failing with
    /// [`crate::error::Error::SourceUnavailable`] when the platform data
    /// is unreachable or unparseable.
    async fn fetch_raw_bindings(&self) -> Result<Vec<RawBinding>>;
}
