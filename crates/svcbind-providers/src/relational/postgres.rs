//! PostgreSQL service kind

use std::sync::Arc;

use svcbind_application::ports::registry::{SERVICE_KINDS, ServiceKindEntry};

use super::RelationalConnector;

#[linkme::distributed_slice(SERVICE_KINDS)]
static POSTGRES_KIND: ServiceKindEntry = ServiceKindEntry {
    label: "postgresql",
    description: "PostgreSQL relational database (JDBC-style URL)",
    schemes: &["postgres", "postgresql"],
    factory: |descriptor| {
        Ok(Arc::new(RelationalConnector::new(
            descriptor,
            "postgresql",
            "postgresql",
        )))
    },
};
