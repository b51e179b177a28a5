//! MySQL service kind

use std::sync::Arc;

use svcbind_application::ports::registry::{SERVICE_KINDS, ServiceKindEntry};

use super::RelationalConnector;

#[linkme::distributed_slice(SERVICE_KINDS)]
static MYSQL_KIND: ServiceKindEntry = ServiceKindEntry {
    label: "mysql",
    description: "MySQL relational database (JDBC-style URL)",
    schemes: &["mysql"],
    factory: |descriptor| Ok(Arc::new(RelationalConnector::new(descriptor, "mysql", "mysql"))),
};
