//! Redis service kind
//!
//! The connection string for Redis clients is the URI itself, so the
//! connector reproduces the descriptor's URI form.

use std::sync::Arc;

use svcbind_application::ports::registry::{SERVICE_KINDS, ServiceKindEntry};
use svcbind_domain::ports::providers::ServiceConnector;
use svcbind_domain::value_objects::CredentialDescriptor;

/// Redis connector
#[derive(Debug)]
pub struct RedisConnector {
    descriptor: Arc<CredentialDescriptor>,
}

impl RedisConnector {
    /// Create a connector for one Redis binding
    pub fn new(descriptor: Arc<CredentialDescriptor>) -> Self {
        Self { descriptor }
    }

    /// Whether the binding uses TLS (`rediss` scheme)
    pub fn is_secure(&self) -> bool {
        self.descriptor.scheme() == "rediss"
    }
}

impl ServiceConnector for RedisConnector {
    fn id(&self) -> &str {
        self.descriptor.id()
    }

    fn label(&self) -> &'static str {
        "redis"
    }

    fn connection_url(&self) -> String {
        self.descriptor.uri_string()
    }

    fn descriptor(&self) -> &Arc<CredentialDescriptor> {
        &self.descriptor
    }
}

#[linkme::distributed_slice(SERVICE_KINDS)]
static REDIS_KIND: ServiceKindEntry = ServiceKindEntry {
    label: "redis",
    description: "Redis key-value store",
    schemes: &["redis", "rediss"],
    factory: |descriptor| Ok(Arc::new(RedisConnector::new(descriptor))),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relational::tests::descriptor;

    #[test]
    fn reproduces_the_connection_uri() {
        let connector = RedisConnector::new(descriptor(
            "redis-1",
            "redis://:sekrit@cachehost:6379",
            "redis",
            "redis",
        ));
        assert_eq!(connector.connection_url(), "redis://:sekrit@cachehost:6379");
        assert!(!connector.is_secure());
    }

    #[test]
    fn rediss_scheme_is_secure() {
        let connector = RedisConnector::new(descriptor(
            "redis-2",
            "rediss://cachehost:6380",
            "rediss",
            "redis",
        ));
        assert!(connector.is_secure());
    }
}
