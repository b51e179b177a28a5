//! SMTP service kind

use std::sync::Arc;

use svcbind_application::ports::registry::{SERVICE_KINDS, ServiceKindEntry};
use svcbind_domain::ports::providers::ServiceConnector;
use svcbind_domain::value_objects::CredentialDescriptor;

/// SMTP relay connector
#[derive(Debug)]
pub struct SmtpConnector {
    descriptor: Arc<CredentialDescriptor>,
}

impl SmtpConnector {
    /// Create a connector for one SMTP binding
    pub fn new(descriptor: Arc<CredentialDescriptor>) -> Self {
        Self { descriptor }
    }
}

impl ServiceConnector for SmtpConnector {
    fn id(&self) -> &str {
        self.descriptor.id()
    }

    fn label(&self) -> &'static str {
        "smtp"
    }

    fn connection_url(&self) -> String {
        self.descriptor.uri_string()
    }

    fn descriptor(&self) -> &Arc<CredentialDescriptor> {
        &self.descriptor
    }
}

#[linkme::distributed_slice(SERVICE_KINDS)]
static SMTP_KIND: ServiceKindEntry = ServiceKindEntry {
    label: "smtp",
    description: "SMTP mail relay",
    schemes: &["smtp"],
    factory: |descriptor| Ok(Arc::new(SmtpConnector::new(descriptor))),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relational::tests::descriptor;

    #[test]
    fn reproduces_the_connection_uri() {
        let connector = SmtpConnector::new(descriptor(
            "smtp-1",
            "smtp://mailer:pw@mail.example.com:587",
            "smtp",
            "smtp",
        ));
        assert_eq!(
            connector.connection_url(),
            "smtp://mailer:pw@mail.example.com:587"
        );
    }
}
