//! MongoDB service kind

use std::sync::Arc;

use svcbind_application::ports::registry::{SERVICE_KINDS, ServiceKindEntry};
use svcbind_domain::ports::providers::ServiceConnector;
use svcbind_domain::value_objects::CredentialDescriptor;

/// MongoDB connector
#[derive(Debug)]
pub struct MongoConnector {
    descriptor: Arc<CredentialDescriptor>,
}

impl MongoConnector {
    /// Create a connector for one MongoDB binding
    pub fn new(descriptor: Arc<CredentialDescriptor>) -> Self {
        Self { descriptor }
    }

    /// Database name from the URI path, empty when unset
    pub fn database(&self) -> &str {
        self.descriptor.path()
    }
}

impl ServiceConnector for MongoConnector {
    fn id(&self) -> &str {
        self.descriptor.id()
    }

    fn label(&self) -> &'static str {
        "mongodb"
    }

    fn connection_url(&self) -> String {
        self.descriptor.uri_string()
    }

    fn descriptor(&self) -> &Arc<CredentialDescriptor> {
        &self.descriptor
    }
}

#[linkme::distributed_slice(SERVICE_KINDS)]
static MONGODB_KIND: ServiceKindEntry = ServiceKindEntry {
    label: "mongodb",
    description: "MongoDB document store",
    schemes: &["mongodb"],
    factory: |descriptor| Ok(Arc::new(MongoConnector::new(descriptor))),
};
